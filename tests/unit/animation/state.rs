use super::*;

#[test]
fn zero_or_non_finite_duration_is_rejected() {
    assert!(AnimationState::new(0.0).is_err());
    assert!(AnimationState::new(f32::NAN).is_err());
    assert!(AnimationState::new(f32::INFINITY).is_err());
}

#[test]
fn forward_play_once_clamps_and_stops() {
    let mut s = AnimationState::new(500.0).unwrap().running();
    let mut last = s.anim_value();
    for _ in 0..100 {
        s.tick(FRAME_INTERVAL_MS);
        assert!(s.anim_value() >= last);
        assert!(s.anim_value() <= 1.0);
        last = s.anim_value();
    }
    assert_eq!(s.anim_value(), 1.0);
    assert!(!s.running);
    assert_eq!(s.value(), 1.0);
}

#[test]
fn forward_play_once_takes_duration_worth_of_ticks() {
    let mut s = AnimationState::new(500.0).unwrap().running();
    // 500 ms at 60 Hz is 30 frames
    for _ in 0..29 {
        s.tick(FRAME_INTERVAL_MS);
    }
    assert!(s.running);
    s.tick(FRAME_INTERVAL_MS);
    s.tick(FRAME_INTERVAL_MS);
    assert!(!s.running);
}

#[test]
fn reverse_starts_at_one_and_stops_at_zero() {
    let mut s = AnimationState::new(-500.0).unwrap().running();
    assert_eq!(s.anim_value(), 1.0);
    let mut last = s.anim_value();
    for _ in 0..100 {
        s.tick(FRAME_INTERVAL_MS);
        assert!(s.anim_value() <= last);
        assert!(s.anim_value() >= 0.0);
        last = s.anim_value();
    }
    assert_eq!(s.anim_value(), 0.0);
    assert!(!s.running);
}

#[test]
fn reverse_output_is_corrected_by_one() {
    let s = AnimationState::new(-500.0).unwrap();
    // linear ease at progress 1 minus the reverse correction
    assert_eq!(s.value(), 0.0);
    let f = AnimationState::new(500.0).unwrap();
    assert_eq!(f.value(), 0.0);
}

#[test]
fn loop_forever_never_stops() {
    let mut s = AnimationState::new(100.0)
        .unwrap()
        .with_repeat(AnimationState::LOOP_FOREVER)
        .running();
    for _ in 0..10_000 {
        s.tick(FRAME_INTERVAL_MS);
        assert!(s.anim_value() >= 0.0 && s.anim_value() <= 1.0);
    }
    assert!(s.running);
}

#[test]
fn finite_repeat_wraps_then_stops() {
    let mut s = AnimationState::new(100.0).unwrap().with_repeat(2).running();
    let mut wraps = 0;
    let mut last = s.anim_value();
    for _ in 0..200 {
        s.tick(FRAME_INTERVAL_MS);
        if s.anim_value() < last {
            wraps += 1;
        }
        last = s.anim_value();
    }
    assert_eq!(wraps, 2);
    assert_eq!(s.repeat_count, 0);
    assert!(!s.running);
    assert_eq!(s.anim_value(), 1.0);
}

#[test]
fn stopped_state_still_refreshes_value() {
    let mut s = AnimationState::new(500.0).unwrap().with_ease(Ease::In);
    s.offset = 0.5;
    s.tick(FRAME_INTERVAL_MS);
    assert_eq!(s.anim_value(), 0.0);
    assert_eq!(s.value(), 0.5);
}

#[test]
fn offset_and_ease_shape_the_output() {
    let mut s = AnimationState::new(1000.0)
        .unwrap()
        .with_ease(Ease::In)
        .with_offset(2.0)
        .running();
    s.tick(500.0);
    assert_eq!(s.anim_value(), 0.5);
    assert_eq!(s.value(), 2.25);
}

#[test]
fn reverse_finite_repeat_wraps_then_stops_at_zero() {
    let mut s = AnimationState::new(-100.0).unwrap().with_repeat(2).running();
    let mut wraps = 0;
    let mut last = s.anim_value();
    for _ in 0..200 {
        s.tick(FRAME_INTERVAL_MS);
        assert!(s.anim_value() >= 0.0 && s.anim_value() <= 1.0);
        if s.anim_value() > last {
            wraps += 1;
        }
        last = s.anim_value();
    }
    assert_eq!(wraps, 2);
    assert_eq!(s.repeat_count, 0);
    assert!(!s.running);
    assert_eq!(s.anim_value(), 0.0);
}

#[test]
fn reverse_loop_forever_never_stops() {
    let mut s = AnimationState::new(-100.0)
        .unwrap()
        .with_repeat(AnimationState::LOOP_FOREVER)
        .running();
    let mut wraps = 0;
    let mut last = s.anim_value();
    for _ in 0..10_000 {
        s.tick(FRAME_INTERVAL_MS);
        assert!(s.anim_value() >= 0.0 && s.anim_value() <= 1.0);
        if s.anim_value() > last {
            wraps += 1;
        }
        last = s.anim_value();
    }
    assert!(wraps > 100);
    assert!(s.running);
    assert!(s.repeat_count < 0);
}
