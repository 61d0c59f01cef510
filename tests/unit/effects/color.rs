use super::*;

#[test]
fn gray_pixels_survive_saturation() {
    let mut canvas = RgbImage::from_pixel(4, 4, image::Rgb([90, 90, 90]));
    saturate(&mut canvas, SATURATION);
    assert_eq!(canvas.get_pixel(1, 1).0, [90, 90, 90]);
}

#[test]
fn saturation_widens_channel_spread() {
    let mut canvas = RgbImage::from_pixel(1, 1, image::Rgb([200, 100, 50]));
    saturate(&mut canvas, SATURATION);
    let [r, g, b] = canvas.get_pixel(0, 0).0;
    assert!(r > 200 && b < 50);
    assert!(i32::from(r) - i32::from(b) > 150);
    let _ = g;
}

#[test]
fn contrast_pivots_on_mean() {
    let mut canvas = RgbImage::new(2, 1);
    canvas.put_pixel(0, 0, image::Rgb([100, 100, 100]));
    canvas.put_pixel(1, 0, image::Rgb([200, 200, 200]));
    assert_eq!(mean_luma(&canvas), 150.0);
    contrast(&mut canvas, 1.1);
    assert_eq!(canvas.get_pixel(0, 0).0, [95, 95, 95]);
    assert_eq!(canvas.get_pixel(1, 0).0, [205, 205, 205]);
}

#[test]
fn boost_clamps_to_channel_range() {
    let mut canvas = RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 255]));
    color_boost(&mut canvas);
    let px = canvas.get_pixel(0, 0).0;
    assert_eq!(px[0], 255);
    assert_eq!(px[1], 0);
}

#[test]
fn empty_canvas_has_zero_mean() {
    assert_eq!(mean_luma(&RgbImage::new(0, 0)), 0.0);
}
