use std::hint::black_box;

use execinfo::{capture, Address, MAX_DEPTH, MAX_FRAMES};

#[inline(never)]
fn capture_into(buffer: &mut [Address]) -> usize {
    black_box(capture(buffer))
}

#[inline(never)]
fn capture_nested(levels: usize, buffer: &mut [Address]) -> usize {
    let depth = if levels == 0 { capture_into(buffer) } else { capture_nested(levels - 1, buffer) };
    black_box(depth)
}

#[test]
fn test_capture_is_bounded_and_non_null() {
    let mut frames = [Address::NULL; 32];
    let depth = capture_into(&mut frames);

    println!("Captured {depth} frames");
    assert!(depth <= frames.len());
    assert!(frames[..depth].iter().all(|addr| !addr.is_null()));
    assert!(frames[depth..].iter().all(|addr| addr.is_null()), "tail must stay untouched");
}

#[test]
fn test_empty_buffer_captures_nothing() {
    assert_eq!(capture_into(&mut []), 0);
}

#[test]
fn test_same_call_site_is_stable() {
    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut frames = [Address::NULL; 32];
        let depth = capture_into(&mut frames);
        runs.push(frames[..depth].to_vec());
    }

    assert_eq!(runs[0].len(), runs[1].len());
    let settled = runs[0].len().saturating_sub(1);
    assert_eq!(runs[0][..settled], runs[1][..settled]);
}

#[test]
fn test_oversized_buffer_returns_true_depth() {
    let mut depths = Vec::new();
    for len in [MAX_FRAMES, 200] {
        let mut frames = vec![Address::NULL; len];
        depths.push(capture_into(&mut frames));
    }

    assert_eq!(depths[0], depths[1]);
}

#[test]
fn test_smaller_buffer_is_a_prefix() {
    let mut runs = Vec::new();
    for len in [10, 1] {
        let mut frames = vec![Address::NULL; len];
        let depth = capture_into(&mut frames);
        frames.truncate(depth);
        runs.push(frames);
    }

    let (wide, narrow) = (&runs[0], &runs[1]);
    assert!(narrow.len() <= 1);
    assert_eq!(narrow[..], wide[..narrow.len()]);
}

#[test]
fn test_deep_stack_is_clamped() {
    let mut shallow = [Address::NULL; 8];
    let walkable = capture_nested(4, &mut shallow);

    let mut frames = vec![Address::NULL; 200];
    let depth = capture_nested(MAX_DEPTH + 20, &mut frames);

    println!("Shallow walk: {walkable} frames, deep walk: {depth} frames");
    assert!(depth <= MAX_DEPTH);
    assert!(frames[MAX_DEPTH..].iter().all(|addr| addr.is_null()));

    #[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        assert!(walkable >= 5, "nested walk stopped early: {walkable} frames");
        assert_eq!(depth, MAX_DEPTH);
    }
}

#[test]
fn test_max_frames_matches_walker_depth() {
    assert_eq!(MAX_FRAMES, MAX_DEPTH);
    assert_eq!(MAX_DEPTH, 128);
}
