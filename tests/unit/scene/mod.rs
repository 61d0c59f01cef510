use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn background_keeps_dimensions_and_is_seeded() {
    let mut a = RgbImage::new(320, 180);
    let mut b = RgbImage::new(320, 180);
    let params = BackgroundParams::default();
    render_background(&mut a, &params, &mut SmallRng::seed_from_u64(11)).unwrap();
    render_background(&mut b, &params, &mut SmallRng::seed_from_u64(11)).unwrap();
    assert_eq!(a.dimensions(), (320, 180));
    assert_eq!(a, b);
}

#[test]
fn top_left_is_sky() {
    let mut canvas = RgbImage::new(320, 180);
    render_background(
        &mut canvas,
        &BackgroundParams::default(),
        &mut SmallRng::seed_from_u64(1),
    )
    .unwrap();
    assert_eq!(canvas.get_pixel(0, 0).0, sky::sky_row_color(0, 180));
}

#[test]
fn tiny_canvases_render_without_error() {
    for (w, h) in [(1, 1), (2, 3), (7, 5)] {
        let mut canvas = RgbImage::new(w, h);
        render_background(
            &mut canvas,
            &BackgroundParams::default(),
            &mut SmallRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(canvas.dimensions(), (w, h));
    }
}

#[test]
fn overrides_move_the_sun() {
    let params = BackgroundParams {
        sun: Some(Sun {
            center_x: 40,
            center_y: 40,
            radius: 20,
        }),
        horizon: Some(170),
        palms: 0,
    };
    let mut canvas = RgbImage::new(320, 180);
    render_background(&mut canvas, &params, &mut SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(canvas.get_pixel(40, 40).0[0], 255);
}
