use super::*;

fn state_at(value: f32) -> AnimationState {
    // linear, forward; offset places `value` directly
    AnimationState::new(1000.0).unwrap().with_offset(value)
}

#[test]
fn slide_adds_scaled_value_to_x() {
    let mut r = Rect::new(10, 5, 4, 4);
    RectTransform::Slide {
        offset: 1.0,
        step: 10.0,
    }
    .apply(0.5, &mut r);
    assert_eq!(r, Rect::new(25, 5, 4, 4));
}

#[test]
fn orbit_traces_a_circle() {
    let orbit = RectTransform::Orbit {
        radius: 20.0,
        phase: 0.0,
    };
    let mut r = Rect::new(100, 100, 1, 1);
    orbit.apply(0.0, &mut r);
    assert_eq!((r.pos.x, r.pos.y), (120, 100));

    let mut r = Rect::new(100, 100, 1, 1);
    orbit.apply(0.25, &mut r);
    assert_eq!((r.pos.x, r.pos.y), (100, 120));

    let mut r = Rect::new(100, 100, 1, 1);
    orbit.apply(0.5, &mut r);
    assert_eq!((r.pos.x, r.pos.y), (80, 100));
}

#[test]
fn channel_transform_saturates() {
    let mut c = Color::opaque(250, 10, 0);
    ColorTransform::Channel {
        channel: Channel::R,
        scale: 100.0,
    }
    .apply(1.0, &mut c);
    ColorTransform::Channel {
        channel: Channel::G,
        scale: -100.0,
    }
    .apply(1.0, &mut c);
    assert_eq!(c, Color::opaque(255, 0, 0));
}

#[test]
fn chained_additive_nodes_sum_in_either_order() {
    let states = [state_at(0.5), state_at(0.25)];
    let slide = RectTransform::Slide {
        offset: 0.0,
        step: 8.0,
    };
    let orbit = RectTransform::Orbit {
        radius: 4.0,
        phase: 0.0,
    };

    let mut forward = AnimatorPool::default();
    let a = forward.add(StateId(0), slide);
    let b = forward.add(StateId(1), orbit);
    forward.add_last(a, b).unwrap();

    let mut backward = AnimatorPool::default();
    let b2 = backward.add(StateId(1), orbit);
    let a2 = backward.add(StateId(0), slide);
    backward.add_last(b2, a2).unwrap();

    let mut r1 = Rect::new(0, 0, 2, 2);
    forward.apply(Some(a), &states, &mut r1).unwrap();
    let mut r2 = Rect::new(0, 0, 2, 2);
    backward.apply(Some(b2), &states, &mut r2).unwrap();

    // slide: 0.5 * 8 = 4 on x; orbit at a quarter turn: +4 on y
    assert_eq!(r1, Rect::new(4, 4, 2, 2));
    assert_eq!(r1, r2);
}

#[test]
fn each_node_sees_previous_result() {
    fn double_x(_: f32, r: &mut Rect) {
        r.pos.x *= 2;
    }
    let states = [state_at(1.0)];
    let mut pool = AnimatorPool::default();
    let slide = pool.add(
        StateId(0),
        RectTransform::Slide {
            offset: 0.0,
            step: 3.0,
        },
    );
    let double = pool.add(StateId(0), RectTransform::Custom(double_x));
    pool.insert(slide, double).unwrap();

    let mut r = Rect::new(1, 0, 1, 1);
    pool.apply(Some(slide), &states, &mut r).unwrap();
    assert_eq!(r.pos.x, 8);
}

#[test]
fn no_head_leaves_target_untouched() {
    let pool: AnimatorPool<RectTransform> = AnimatorPool::default();
    let mut r = Rect::new(1, 2, 3, 4);
    pool.apply(None, &[], &mut r).unwrap();
    assert_eq!(r, Rect::new(1, 2, 3, 4));
}

#[test]
fn unknown_state_is_an_error() {
    let mut pool = AnimatorPool::default();
    let id = pool.add(
        StateId(3),
        ColorTransform::Channel {
            channel: Channel::B,
            scale: 1.0,
        },
    );
    let mut c = Color::default();
    let err = pool.apply(Some(id), &[state_at(0.0)], &mut c).unwrap_err();
    assert!(err.to_string().contains("unknown animation state 3"));
}

#[test]
fn transforms_deserialize_by_kind() {
    let t: RectTransform =
        serde_json::from_value(serde_json::json!({"kind": "orbit", "radius": 5.0, "phase": 0.5}))
            .unwrap();
    assert!(matches!(t, RectTransform::Orbit { radius, phase } if radius == 5.0 && phase == 0.5));
    let c: ColorTransform =
        serde_json::from_value(serde_json::json!({"kind": "channel", "channel": "g", "scale": 2.0}))
            .unwrap();
    assert!(matches!(c, ColorTransform::Channel { channel: Channel::G, .. }));
}
