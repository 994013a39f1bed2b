use super::*;
use crate::scene::shape::NodeType;
use serde_json::json;

fn parse(v: serde_json::Value) -> SceneDef {
    serde_json::from_value(v).unwrap()
}

#[test]
fn colors_accept_all_spellings() {
    let cases = [
        (json!("#ff0000"), Color::opaque(0xff, 0, 0)),
        (json!("00ff0080"), Color::rgba(0, 0xff, 0, 0x80)),
        (json!([1, 2, 3]), Color::opaque(1, 2, 3)),
        (json!([1, 2, 3, 4]), Color::rgba(1, 2, 3, 4)),
        (json!({"r": 9, "g": 8, "b": 7}), Color::opaque(9, 8, 7)),
        (json!({"r": 9, "g": 8, "b": 7, "a": 0}), Color::rgba(9, 8, 7, 0)),
    ];
    for (v, expect) in cases {
        let c: ColorDef = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(c.0, expect, "{v}");
    }
}

#[test]
fn bad_colors_are_rejected() {
    for v in [json!("#fff"), json!("#gg0000"), json!([1, 2]), json!([1, 2, 300])] {
        assert!(serde_json::from_value::<ColorDef>(v.clone()).is_err(), "{v}");
    }
}

#[test]
fn build_links_nodes_in_declaration_order() {
    let def = parse(json!({
        "framebuffer": {"width": 8, "height": 8},
        "nodes": [
            {"type": "shape", "rect": {"x": 0, "y": 0, "width": 8, "height": 8}, "color": "#ff0000"},
            {"type": "image", "rect": {"x": 0, "y": 0, "width": 2, "height": 2},
             "format": "rgb565", "asset_size": {"width": 2, "height": 2},
             "source_rect": {"x": 0, "y": 0, "width": 2, "height": 2}},
            {"type": "shape", "rect": {"x": 1, "y": 1, "width": 2, "height": 2}, "color": "#0000ff", "visible": false}
        ]
    }));
    let scene = def.build().unwrap();
    let root = scene.root.unwrap();
    let kinds: Vec<_> = scene
        .graph
        .iter_from(root)
        .map(|(_, n)| n.kind.node_type())
        .collect();
    assert_eq!(kinds, vec![NodeType::Shape, NodeType::Image, NodeType::Shape]);
    assert_eq!(scene.format, PixelFormat::Rgb565);
    assert_eq!(scene.size, Size::new(8, 8));
}

#[test]
fn states_get_defaults() {
    let def = parse(json!({
        "framebuffer": {"width": 1, "height": 1},
        "states": [{"duration": 500.0}, {"duration": -250.0, "repeat_count": -1, "running": false, "ease": "in_out", "offset": 0.5}]
    }));
    let scene = def.build().unwrap();
    assert!(scene.states[0].running);
    assert_eq!(scene.states[0].repeat_count, 0);
    assert!(!scene.states[1].running);
    assert_eq!(scene.states[1].repeat_count, AnimationState::LOOP_FOREVER);
    assert_eq!(scene.states[1].anim_value(), 1.0);
    assert!(scene.root.is_none());
}

#[test]
fn animators_chain_onto_the_shape() {
    let def = parse(json!({
        "framebuffer": {"width": 4, "height": 4},
        "states": [{"duration": 100.0}],
        "nodes": [{
            "type": "shape",
            "rect": {"x": 0, "y": 0, "width": 1, "height": 1},
            "color": [255, 0, 0],
            "rect_animators": [
                {"kind": "slide", "state": 0, "step": 2.0},
                {"kind": "orbit", "state": 0, "radius": 1.0}
            ],
            "color_animators": [{"kind": "channel", "state": 0, "channel": "b", "scale": 10.0}]
        }]
    }));
    let scene = def.build().unwrap();
    let root = scene.root.unwrap();
    let NodeKind::Shape(shape) = &scene.graph.get(root).unwrap().kind else {
        panic!("expected shape");
    };
    let head = shape.rect_animator.unwrap();
    assert_eq!(scene.graph.rect_animators.chain(head).count(), 2);
    assert_eq!(
        scene
            .graph
            .color_animators
            .chain(shape.color_animator.unwrap())
            .count(),
        1
    );
}

#[test]
fn validation_catches_bad_input() {
    let bad_state_ref = parse(json!({
        "framebuffer": {"width": 4, "height": 4},
        "nodes": [{
            "type": "shape",
            "rect": {"x": 0, "y": 0, "width": 1, "height": 1},
            "color": "#ffffff",
            "rect_animators": [{"kind": "slide", "state": 0, "step": 2.0}]
        }]
    }));
    assert!(
        bad_state_ref
            .validate()
            .unwrap_err()
            .to_string()
            .contains("references state 0")
    );

    let zero_duration = parse(json!({
        "framebuffer": {"width": 4, "height": 4},
        "states": [{"duration": 0.0}]
    }));
    assert!(zero_duration.validate().is_err());

    let empty_fb = parse(json!({"framebuffer": {"width": 0, "height": 4}}));
    assert!(empty_fb.validate().is_err());

    let clear_on_rgba = parse(json!({
        "framebuffer": {"width": 1, "height": 1, "format": "rgba8888"},
        "clear": "#000000"
    }));
    assert!(clear_on_rgba.validate().is_err());
}

#[test]
fn from_reader_reports_serde_errors() {
    let err = SceneDef::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn renderer_and_clear_follow_the_scene() {
    let def = parse(json!({
        "framebuffer": {"width": 2, "height": 2},
        "active_area": {"x": 0, "y": 0, "width": 1, "height": 1},
        "clear": "#0000ff",
        "nodes": [{"type": "shape", "rect": {"x": 0, "y": 0, "width": 2, "height": 2}, "color": "#ff0000"}]
    }));
    let scene = def.build().unwrap();
    let mut data = scene.alloc_framebuffer().unwrap();
    assert_eq!(data.len(), 8);
    let mut r = scene.renderer(&mut data).unwrap();
    let clear = crate::render::format::pack_rgb565(scene.clear.unwrap());
    r.framebuffer_mut().fill_rgb565(clear).unwrap();
    r.run(&scene.graph, &scene.states).unwrap();
    assert_eq!(r.framebuffer().pixel_rgb565(0, 0).unwrap(), 0xf800);
    assert_eq!(r.framebuffer().pixel_rgb565(1, 1).unwrap(), 0x001f);
}

#[test]
fn oversized_framebuffer_fails_validation() {
    let def = parse(json!({
        "framebuffer": {"width": 2147483647, "height": 2147483647, "format": "rgba8888"}
    }));
    let err = def.validate().unwrap_err();
    assert!(matches!(err, EmbuiError::Validation(_)), "{err}");
    assert!(def.build().is_err());
}
