use super::*;
use crate::raster::text::TextPainter;

fn renderer(theme: Theme, height: u32) -> GoalRenderer {
    GoalRenderer::with_painter(theme, height, TextPainter::bitmap_only())
}

fn dark_canvas(w: u32, h: u32) -> RgbImage {
    RgbImage::from_pixel(w, h, image::Rgb([10, 10, 10]))
}

#[test]
fn half_done_goal_fills_half_the_track() {
    let mut canvas = dark_canvas(800, 600);
    let mut r = renderer(Theme::Vaporwave, 600);
    let g = r
        .render_goal(&mut canvas, &Goal::new("Read", 5.0, 10.0), 50.0, 100.0, 700.0, 0)
        .unwrap();
    assert_eq!(g.progress, 0.5);
    assert_eq!(g.fill_width, (g.track.width() * 0.5).floor() as u32);
    assert!(g.slot_height > g.track.y1 - 100.0);

    let y = ((g.track.y0 + g.track.y1) / 2.0) as u32;
    let inside = canvas.get_pixel(g.track.x0 as u32 + g.fill_width - 4, y).0;
    let beyond = canvas.get_pixel(g.track.x0 as u32 + g.fill_width + 20, y).0;
    assert!(inside[0] > 150, "fill {inside:?}");
    assert!(beyond[0] < 120, "track {beyond:?}");
}

#[test]
fn zero_or_negative_target_draws_empty_bar() {
    let mut canvas = dark_canvas(400, 300);
    let mut r = renderer(Theme::Vaporwave, 300);
    for target in [0.0, -10.0] {
        let g = r
            .render_goal(&mut canvas, &Goal::new("x", 5.0, target), 10.0, 10.0, 380.0, 1)
            .unwrap();
        assert_eq!(g.progress, 0.0);
        assert_eq!(g.fill_width, 0);
    }
}

#[test]
fn overfull_goal_is_clamped_to_track() {
    let mut canvas = dark_canvas(400, 300);
    let mut r = renderer(Theme::Vaporwave, 300);
    let g = r
        .render_goal(&mut canvas, &Goal::new("x", 500.0, 10.0), 10.0, 10.0, 380.0, 2)
        .unwrap();
    assert_eq!(g.progress, 1.0);
    assert_eq!(f64::from(g.fill_width), g.track.width());
}

#[test]
fn goals_past_the_canvas_are_clipped_not_errors() {
    let mut canvas = dark_canvas(60, 40);
    let mut r = renderer(Theme::Vaporwave, 40);
    r.render_goal(&mut canvas, &Goal::new("far", 1.0, 2.0), 30.0, 30.0, 500.0, 3)
        .unwrap();
}

#[test]
fn brightness_ramp_darkens_left_edge() {
    let mut layer = Layer::from_fn(10, 1, |_, _| [200, 100, 50, 255]);
    apply_brightness_ramp(&mut layer, 0, 10);
    assert_eq!(layer.pixel(0, 0), [130, 65, 33, 255]);
    assert_eq!(layer.pixel(9, 0), [200, 100, 50, 255]);
    assert!(layer.pixel(4, 0)[0] < layer.pixel(5, 0)[0]);
}

#[test]
fn minimal_goal_uses_flat_colors() {
    let mut canvas = RgbImage::from_pixel(800, 400, image::Rgb(palette::minimal::BACKGROUND));
    let mut r = renderer(Theme::Minimal, 400);
    let g = r
        .render_goal(&mut canvas, &Goal::new("Run", 25.0, 100.0), 100.0, 200.0, 600.0, 4)
        .unwrap();
    assert_eq!(g.track, Rect::new(100.0, 240.0, 630.0, 248.0));
    assert_eq!(g.fill_width, 132);
    assert_eq!(canvas.get_pixel(110, 244).0, palette::minimal::PRIMARY);
    assert_eq!(canvas.get_pixel(500, 244).0, palette::minimal::GREY);
}

#[test]
fn title_is_centered_and_drawn() {
    let mut canvas = dark_canvas(400, 300);
    let mut r = renderer(Theme::Vaporwave, 300);
    let bottom = r.render_title(&mut canvas, "GOALS", 18.0).unwrap();
    assert!(bottom > 18.0);
    let lit = (0..400).any(|x| (18..bottom as u32).any(|y| canvas.get_pixel(x, y).0[0] > 200));
    assert!(lit);
    assert!(canvas.get_pixel(2, 20).0[0] < 40);
}

#[test]
fn minimal_title_has_underline() {
    let mut canvas = RgbImage::from_pixel(600, 300, image::Rgb(palette::minimal::BACKGROUND));
    let mut r = renderer(Theme::Minimal, 300);
    let underline_y = r.render_title(&mut canvas, "GOALS", 80.0).unwrap();
    assert_eq!(underline_y, 80.0 + 48.0 + 10.0);
    assert_eq!(
        canvas.get_pixel(300, underline_y as u32).0,
        palette::minimal::PRIMARY
    );
}
