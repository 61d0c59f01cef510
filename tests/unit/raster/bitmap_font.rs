use super::*;
use crate::raster::layer::Layer;

#[test]
fn lowercase_maps_to_uppercase() {
    assert_eq!(glyph('a'), glyph('A'));
    assert_eq!(glyph('z'), glyph('Z'));
}

#[test]
fn unknown_glyph_is_a_box() {
    assert_eq!(glyph('\u{2603}'), BOX);
    assert_eq!(glyph(' '), [0; 7]);
}

#[test]
fn glyph_rows_fit_five_columns() {
    for c in (' '..='~').chain(['%', '/']) {
        assert!(glyph(c).iter().all(|row| *row < 0x20), "glyph {c:?}");
    }
}

#[test]
fn measure_scales_with_size() {
    let (w8, h8) = measure("AB", 8.0);
    assert_eq!((w8, h8), (11.0, 8.0));
    let (w16, h16) = measure("AB", 16.0);
    assert_eq!((w16, h16), (22.0, 16.0));
    assert_eq!(measure("", 16.0).0, 0.0);
}

#[test]
fn draw_sets_pixels_of_glyph_cells() {
    let layer = Layer::paint(12, 8, |ctx| {
        draw(ctx, "I", 8.0, [255, 255, 255], 0.0, 0.0);
        Ok(())
    })
    .unwrap();
    // 'I' top row is 0x0E: columns 1..=3 lit, column 0 dark.
    assert_eq!(layer.pixel(2, 0)[3], 255);
    assert_eq!(layer.pixel(0, 0)[3], 0);
    assert_eq!(layer.pixel(2, 3)[3], 255);
}
