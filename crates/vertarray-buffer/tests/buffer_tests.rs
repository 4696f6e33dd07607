//! Integration tests for vertarray-buffer.

use vertarray_buffer::{
    GrowthPolicy, TexBuffer, TexVertex, TraceBuffer, TraceInstance, VertexBuffer, ViaBuffer,
    XyBuffer, XyVertex,
};
use vertarray_math::{Mat2x3, Vec2};
use vertarray_types::VertexError;

fn xy(i: usize) -> XyVertex {
    XyVertex::new(i as f32, -(i as f32))
}

// ─── Allocation Tests ─────────────────────────────────────────

#[test]
fn new_buffer_is_empty() {
    let buf = XyBuffer::new();
    assert_eq!(buf.capacity(), 0);
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.tell(), 0);
    assert!(buf.is_empty());
}

#[test]
fn with_capacity_reserves_zeroed_slots() {
    let buf = TexBuffer::with_capacity(16).unwrap();
    assert_eq!(buf.capacity(), 16);
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.stride(), 16);
}

#[test]
fn strides_match_record_layouts() {
    assert_eq!(XyBuffer::new().stride(), 8);
    assert_eq!(TexBuffer::new().stride(), 16);
    assert_eq!(TraceBuffer::new().stride(), 20);
    assert_eq!(ViaBuffer::new().stride(), 16);
}

#[test]
fn oversized_initial_capacity_is_overflow() {
    let err = XyBuffer::with_capacity(usize::MAX / 4).unwrap_err();
    assert!(matches!(err, VertexError::Overflow { stride: 8, .. }));
}

#[test]
fn invalid_policy_rejected() {
    let policy = GrowthPolicy {
        growth_factor: 1,
        ..Default::default()
    };
    let err = XyBuffer::with_policy(0, policy).unwrap_err();
    assert!(matches!(err, VertexError::InvalidConfig(_)));
}

// ─── Append Tests ─────────────────────────────────────────────

#[test]
fn append_order_preserved_across_growth() {
    for initial in [0, 1, 7, 1024] {
        let mut buf = XyBuffer::with_capacity(initial).unwrap();
        let k = 3000;
        for i in 0..k {
            buf.push(xy(i)).unwrap();
        }
        assert_eq!(buf.len(), k);
        assert_eq!(buf.tell(), k);
        for (i, v) in buf.iter().enumerate() {
            assert_eq!(*v, xy(i));
        }
    }
}

#[test]
fn first_growth_uses_min_capacity() {
    let mut buf = XyBuffer::new();
    buf.push_xy(1.0, 2.0).unwrap();
    assert_eq!(buf.capacity(), 1024);
}

#[test]
fn growth_doubles_from_nonzero_capacity() {
    let mut buf = XyBuffer::with_capacity(3).unwrap();
    for i in 0..4 {
        buf.push(xy(i)).unwrap();
    }
    assert_eq!(buf.capacity(), 6);
}

#[test]
fn growth_is_sufficient_and_monotonic() {
    let mut buf = XyBuffer::with_capacity(5).unwrap();
    let mut last = buf.capacity();
    for request in [1, 10, 3, 500, 2, 5000] {
        buf.ensure_capacity(request).unwrap();
        assert!(buf.capacity() >= buf.tell() + request);
        assert!(buf.capacity() >= last);
        last = buf.capacity();
        for i in 0..request {
            buf.push(xy(i)).unwrap();
        }
    }
}

#[test]
fn growth_preserves_committed_records() {
    let mut buf = XyBuffer::with_capacity(2).unwrap();
    buf.push_xy(1.0, 1.0).unwrap();
    buf.push_xy(2.0, 2.0).unwrap();
    buf.ensure_capacity(100).unwrap();
    assert_eq!(buf.as_slice(), &[XyVertex::new(1.0, 1.0), XyVertex::new(2.0, 2.0)]);
}

#[test]
fn reserved_writer_commits_each_push() {
    let mut buf = XyBuffer::new();
    {
        let mut w = buf.reserve(3).unwrap();
        assert_eq!(w.remaining(), 3);
        w.push(xy(0));
        w.push(xy(1));
        assert_eq!(w.remaining(), 1);
        w.push(xy(2));
    }
    assert_eq!(buf.len(), 3);
}

// ─── Overflow Tests ───────────────────────────────────────────

#[test]
fn growth_past_address_space_is_overflow() {
    let mut buf = TexBuffer::new();
    let err = buf.ensure_capacity(usize::MAX / 16).unwrap_err();
    assert!(matches!(err, VertexError::Overflow { stride: 16, .. }));
    // Nothing was allocated on the failed path.
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn cursor_plus_request_wrap_is_overflow() {
    let mut buf = XyBuffer::new();
    buf.push_xy(0.0, 0.0).unwrap();
    let err = buf.ensure_capacity(usize::MAX).unwrap_err();
    assert!(matches!(err, VertexError::Overflow { .. }));
    assert_eq!(buf.len(), 1);
}

#[test]
fn ceiling_is_enforced_exactly() {
    // 8192 records of 8 bytes fit in 64 KiB; one more does not.
    let policy = GrowthPolicy {
        max_bytes: 64 * 1024,
        ..Default::default()
    };
    let mut buf = XyBuffer::with_policy(0, policy).unwrap();
    for i in 0..8192 {
        buf.push(xy(i)).unwrap();
    }
    assert_eq!(buf.capacity(), 8192);
    let err = buf.push(xy(8192)).unwrap_err();
    assert!(matches!(err, VertexError::Overflow { requested: 8193, stride: 8 }));
    assert_eq!(buf.len(), 8192);
}

// ─── Concat Tests ─────────────────────────────────────────────

#[test]
fn concat_appends_in_order() {
    let a_records: Vec<XyVertex> = (0..5).map(xy).collect();
    let b_records: Vec<XyVertex> = (100..103).map(xy).collect();
    let mut a = XyBuffer::from_slice(&a_records).unwrap();
    let b = XyBuffer::from_slice(&b_records).unwrap();

    a.extend_from_buffer(&b).unwrap();

    assert_eq!(a.len(), 8);
    assert_eq!(&a.as_slice()[..5], a_records.as_slice());
    assert_eq!(&a.as_slice()[5..], b_records.as_slice());
    // Source is untouched.
    assert_eq!(b.len(), 3);
}

#[test]
fn concat_into_empty_grows() {
    let src = TraceBuffer::from_slice(&[TraceInstance::new(0.0, 0.0, 1.0, 1.0, 0.1)]).unwrap();
    let mut dst = TraceBuffer::new();
    dst.extend_from_buffer(&src).unwrap();
    assert_eq!(dst.as_slice(), src.as_slice());
}

#[test]
fn concat_writes_at_rewound_cursor() {
    let mut a = XyBuffer::from_slice(&[xy(0), xy(1), xy(2), xy(3)]).unwrap();
    let b = XyBuffer::from_slice(&[xy(9)]).unwrap();
    a.seek(1).unwrap();
    a.extend_from_buffer(&b).unwrap();
    assert_eq!(a.tell(), 2);
    assert_eq!(a.len(), 4);
    assert_eq!(a.as_slice(), &[xy(0), xy(9), xy(2), xy(3)]);
}

// ─── Seek / Clear Tests ───────────────────────────────────────

#[test]
fn seek_rewinds_without_losing_count() {
    let mut buf = XyBuffer::with_capacity(8).unwrap();
    for i in 0..5 {
        buf.push(xy(i)).unwrap();
    }
    buf.seek(2).unwrap();
    assert_eq!(buf.tell(), 2);
    assert_eq!(buf.len(), 5);
    buf.push(xy(42)).unwrap();
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_slice()[2], xy(42));
}

#[test]
fn seek_forward_raises_count() {
    let mut buf = XyBuffer::with_capacity(8).unwrap();
    buf.seek(6).unwrap();
    assert_eq!(buf.len(), 6);
    // Skipped slots are zeroed.
    assert_eq!(buf.as_slice()[3], XyVertex::default());
}

#[test]
fn seek_past_capacity_is_out_of_bounds() {
    let mut buf = XyBuffer::with_capacity(4).unwrap();
    let err = buf.seek(4).unwrap_err();
    assert!(matches!(
        err,
        VertexError::OutOfBounds {
            position: 4,
            capacity: 4
        }
    ));
    assert_eq!(buf.tell(), 0);
}

#[test]
fn clear_keeps_capacity() {
    let mut buf = XyBuffer::new();
    for i in 0..2000 {
        buf.push(xy(i)).unwrap();
    }
    let cap = buf.capacity();
    buf.clear();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.tell(), 0);
    assert_eq!(buf.capacity(), cap);
}

#[test]
fn clear_then_append_matches_fresh_buffer() {
    let mut reused = XyBuffer::with_capacity(16).unwrap();
    for i in 0..40 {
        reused.push(xy(i * 3)).unwrap();
    }
    reused.clear();

    let mut fresh = XyBuffer::with_capacity(reused.capacity()).unwrap();
    for i in 0..10 {
        reused.push(xy(i)).unwrap();
        fresh.push(xy(i)).unwrap();
    }
    assert_eq!(reused.len(), fresh.len());
    assert_eq!(reused.tell(), fresh.tell());
    assert_eq!(reused.as_slice(), fresh.as_slice());
}

// ─── Raw View Tests ───────────────────────────────────────────

#[test]
fn raw_view_covers_committed_bytes() {
    let mut buf = TexBuffer::with_capacity(64).unwrap();
    buf.push_tex(1.0, 2.0, 0.25, 0.75).unwrap();
    buf.push_tex(3.0, 4.0, 0.5, 0.5).unwrap();

    let view = buf.raw_view();
    assert_eq!(view.count(), 2);
    assert_eq!(view.stride(), 16);
    assert_eq!(view.as_bytes().len(), 32);
    assert_eq!(view.as_ptr(), buf.as_slice().as_ptr() as *const u8);
    assert_eq!(buf.size_bytes(), 32);

    let first: [f32; 4] = bytemuck_floats(&view.as_bytes()[..16]);
    assert_eq!(first, [1.0, 2.0, 0.25, 0.75]);
}

fn bytemuck_floats(bytes: &[u8]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        out[i] = f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    out
}

// ─── Appender Tests ───────────────────────────────────────────

#[test]
fn via_stores_squared_ratio() {
    let mut buf = ViaBuffer::new();
    buf.push_via(5.0, 6.0, 2.0, 1.0).unwrap();
    let via = buf.as_slice()[0];
    assert_eq!(via.x, 5.0);
    assert_eq!(via.y, 6.0);
    assert_eq!(via.r, 2.0);
    assert!((via.r_ins_frac_sq - 0.25).abs() < 1e-7);
    assert!((via.r_inside() - 1.0).abs() < 1e-6);
}

#[test]
fn via_rejects_bad_radii() {
    let mut buf = ViaBuffer::new();
    assert!(matches!(
        buf.push_via(0.0, 0.0, 0.0, 0.0),
        Err(VertexError::InvalidRecord(_))
    ));
    assert!(buf.push_via(0.0, 0.0, f32::NAN, 0.0).is_err());
    assert!(buf.push_via(0.0, 0.0, 1.0, -0.5).is_err());
    assert!(buf.is_empty());
}

#[test]
fn trace_fields_stored_verbatim() {
    let mut buf = TraceBuffer::new();
    buf.push_trace(1.0, 2.0, 3.0, 4.0, 0.5).unwrap();
    assert_eq!(buf.as_slice()[0], TraceInstance::new(1.0, 2.0, 3.0, 4.0, 0.5));
}

#[test]
fn records_serialize() {
    let v = TexVertex::new(1.0, 2.0, 0.5, 0.5);
    let json = serde_json::to_string(&v).unwrap();
    assert!(json.contains("\"tx\":0.5"));
    let back: TexVertex = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

// ─── Projection Tests ─────────────────────────────────────────

#[test]
fn projection_rotates_position_keeps_uv() {
    let src = TexBuffer::from_slice(&[TexVertex::new(1.0, 0.0, 0.5, 0.5)]).unwrap();
    let mut dst = TexBuffer::new();
    let m = Mat2x3::from_coeffs([0.0, -1.0, 0.0, 1.0, 0.0, 0.0]);

    dst.extend_projected(&src, &m).unwrap();

    assert_eq!(dst.len(), 1);
    assert_eq!(dst.as_slice()[0], TexVertex::new(0.0, 1.0, 0.5, 0.5));
}

#[test]
fn projection_instances_many_placements() {
    let glyphs = TexBuffer::from_slice(&[
        TexVertex::new(0.0, 0.0, 0.0, 0.0),
        TexVertex::new(1.0, 0.0, 1.0, 0.0),
        TexVertex::new(1.0, 1.0, 1.0, 1.0),
    ])
    .unwrap();
    let mut dst = TexBuffer::with_capacity(2).unwrap();

    for k in 0..100 {
        let m = Mat2x3::translation(Vec2::new(k as f32 * 10.0, 0.0));
        dst.extend_projected(&glyphs, &m).unwrap();
    }

    assert_eq!(dst.len(), 300);
    assert_eq!(dst.tell(), 300);
    assert_eq!(dst.as_slice()[298], TexVertex::new(991.0, 0.0, 1.0, 0.0));
}

#[test]
fn projection_of_traces_maps_both_endpoints() {
    let src = TraceBuffer::from_slice(&[TraceInstance::new(0.0, 0.0, 1.0, 0.0, 0.2)]).unwrap();
    let mut dst = TraceBuffer::new();
    dst.extend_projected(&src, &Mat2x3::translation(Vec2::new(2.0, 3.0)))
        .unwrap();
    assert_eq!(dst.as_slice()[0], TraceInstance::new(2.0, 3.0, 3.0, 3.0, 0.2));
}

#[test]
fn projection_from_slice() {
    let mut dst: VertexBuffer<XyVertex> = VertexBuffer::new();
    dst.extend_projected_slice(&[xy(1), xy(2)], &Mat2x3::scale(Vec2::splat(2.0)))
        .unwrap();
    assert_eq!(dst.as_slice(), &[XyVertex::new(2.0, -2.0), XyVertex::new(4.0, -4.0)]);
}

// ─── Policy Tests ─────────────────────────────────────────────

#[test]
fn policy_presets_validate() {
    assert!(GrowthPolicy::default().validate().is_ok());
    assert!(GrowthPolicy::compact().validate().is_ok());
    assert!(GrowthPolicy::aggressive().validate().is_ok());
}

#[test]
fn policy_next_capacity() {
    let p = GrowthPolicy::default();
    assert_eq!(p.next_capacity(0, 1, 8).unwrap(), 1024);
    assert_eq!(p.next_capacity(0, 3000, 8).unwrap(), 4096);
    assert_eq!(p.next_capacity(100, 101, 8).unwrap(), 200);

    let p = GrowthPolicy::aggressive();
    assert_eq!(p.next_capacity(16 * 1024, 16 * 1024 + 1, 16).unwrap(), 64 * 1024);
}

#[test]
fn custom_policy_drives_growth() {
    let mut buf = XyBuffer::with_policy(0, GrowthPolicy::compact()).unwrap();
    buf.push_xy(0.0, 0.0).unwrap();
    assert_eq!(buf.capacity(), 64);
    assert_eq!(buf.policy(), &GrowthPolicy::compact());
}

#[test]
fn policy_serializes() {
    let p = GrowthPolicy::aggressive();
    let json = serde_json::to_string(&p).unwrap();
    let back: GrowthPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
