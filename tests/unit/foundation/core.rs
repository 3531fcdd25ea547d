use super::*;

#[test]
fn surface_follows_container_at_16_9() {
    let s = Surface::for_container(1632);
    assert_eq!(s.width, 1600);
    assert_eq!(s.height, 918);

    let tiny = Surface::for_container(10);
    assert_eq!(tiny.width, 1);
    assert!(tiny.height >= 1);
}

#[test]
fn surface_new_rejects_zero_extent() {
    assert!(Surface::new(0, 10).is_err());
    assert!(Surface::new(10, 0).is_err());
    assert!(Surface::new(1, 1).is_ok());
}

#[test]
fn scene_origin_maps_to_surface_centre() {
    let s = Surface::new(200, 100).unwrap();
    let p = s.scene_to_pixels() * Point::new(0.0, 0.0);
    assert_eq!(p, Point::new(100.0, 50.0));

    // One unit up moves toward the top edge.
    let up = s.scene_to_pixels() * Point::new(0.0, 1.0);
    assert_eq!(up, Point::new(100.0, 40.0));
}

#[test]
fn hex_color_accepts_short_long_and_alpha_forms() {
    let c = HexColor::parse("#4A90E2").unwrap();
    assert_eq!(
        c.rgba(),
        Rgba8 {
            r: 0x4a,
            g: 0x90,
            b: 0xe2,
            a: 255
        }
    );
    assert_eq!(c.as_str(), "#4A90E2");

    let short = HexColor::parse("#fff").unwrap();
    assert_eq!(short.rgba(), Rgba8::WHITE);

    let alpha = HexColor::parse("#00000080").unwrap();
    assert_eq!(alpha.rgba().a, 0x80);
}

#[test]
fn hex_color_rejects_malformed_tokens() {
    assert!(HexColor::parse("4A90E2").is_err());
    assert!(HexColor::parse("#12345").is_err());
    assert!(HexColor::parse("#zzzzzz").is_err());
    assert!(HexColor::parse("#ééé").is_err());
}

#[test]
fn hex_color_serializes_as_written() {
    let c: HexColor = serde_json::from_str("\"#E24A77\"").unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#E24A77\"");
    assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
}

#[test]
fn premultiply_scales_channels_by_alpha() {
    let c = Rgba8 {
        r: 255,
        g: 128,
        b: 0,
        a: 128,
    };
    assert_eq!(c.premultiplied(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::WHITE.premultiplied(), [255, 255, 255, 255]);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    assert_eq!(Transform2D::default().to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(3.0, -1.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(3.0, -1.5)));
}
