//! vertarray CLI: buffer benchmarks and shape dumps.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vertarray")]
#[command(version, about = "vertarray: growable GPU vertex buffers and line-list shapes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run benchmark suite.
    Bench {
        /// Which scenario to run (xy_fill, circles, round_rects, text_instancing, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Timed iterations per scenario.
        #[arg(short, long, default_value_t = 5)]
        iterations: u32,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,

        /// First allocation size, in records.
        #[arg(long)]
        min_capacity: Option<usize>,

        /// Capacity multiplier applied on growth.
        #[arg(long)]
        growth_factor: Option<usize>,
    },

    /// Print the vertices of a generated shape as JSON.
    Dump {
        /// Shape to generate (line, box, rotated_box, circle, arc, round_rect, glyph).
        #[arg(long)]
        shape: String,

        /// Tessellation steps for curved shapes.
        #[arg(long)]
        steps: Option<usize>,
    },
}

/// Installs the global subscriber: `RUST_LOG` if set, `warn` otherwise.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bench {
            scenario,
            iterations,
            output,
            min_capacity,
            growth_factor,
        } => commands::bench(
            &scenario,
            iterations,
            output.as_deref(),
            min_capacity,
            growth_factor,
        ),
        Commands::Dump { shape, steps } => commands::dump(&shape, steps),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
