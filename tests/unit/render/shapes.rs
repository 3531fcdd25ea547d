use super::*;

#[test]
fn every_kind_has_a_non_empty_glyph() {
    for kind in ShapeKind::ALL {
        let parts = glyph(kind);
        assert!(!parts.is_empty(), "{kind:?} has no parts");
        assert!(
            parts.iter().any(|p| !p.path.elements().is_empty()),
            "{kind:?} has only empty paths"
        );
    }
}

#[test]
fn glyphs_stay_near_the_unit_circle() {
    for kind in ShapeKind::ALL {
        for p in glyph(kind) {
            if p.path.elements().is_empty() {
                continue;
            }
            let bb = p.path.bounding_box();
            assert!(bb.x0 >= -1.1 && bb.x1 <= 1.1, "{kind:?} x extent {bb:?}");
            assert!(bb.y0 >= -1.1 && bb.y1 <= 1.1, "{kind:?} y extent {bb:?}");
        }
    }
}

#[test]
fn torus_ring_has_two_subpaths() {
    let parts = glyph(ShapeKind::Torus);
    let moves = parts[0]
        .path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn tones_lighten_and_darken() {
    let c = Rgba8 {
        r: 100,
        g: 100,
        b: 100,
        a: 200,
    };
    assert_eq!(Tone::Base.apply(c), c);
    let light = Tone::Light.apply(c);
    let dark = Tone::Dark.apply(c);
    assert!(light.r > c.r && dark.r < c.r);
    assert_eq!(light.a, 200);
    assert_eq!(dark.a, 200);
}
