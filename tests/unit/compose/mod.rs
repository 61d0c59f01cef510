use super::*;
use crate::config::model::Goal;
use crate::effects::pipeline::EffectFlags;
use crate::foundation::core::Resolution;

fn config(w: u32, h: u32, goals: Vec<Goal>) -> GoalsConfig {
    GoalsConfig {
        title: "2026 GOALS".to_string(),
        resolution: Resolution::new(w, h).unwrap(),
        goals,
        seed: Some(1),
        ..GoalsConfig::default()
    }
}

fn bitmap() -> Composer {
    Composer::new().with_text(TextSource::Bitmap)
}

#[test]
fn output_matches_resolution() {
    let wp = bitmap().render(&config(320, 200, vec![])).unwrap();
    assert_eq!(wp.image.dimensions(), (320, 200));
    assert!(wp.placed.is_empty());
    assert!(wp.skipped.is_empty());
}

#[test]
fn seeded_renders_are_reproducible() {
    let cfg = config(200, 150, vec![Goal::new("a", 1.0, 3.0)]);
    let a = bitmap().render(&cfg).unwrap();
    let b = bitmap().render(&cfg).unwrap();
    assert_eq!(a.image, b.image);
}

#[test]
fn goals_below_half_height_are_skipped() {
    let goals = (0..8).map(|i| Goal::new(format!("g{i}"), 1.0, 2.0)).collect();
    let wp = bitmap().render(&config(640, 360, goals)).unwrap();
    // start 64, spacing 45: slots at 64, 109, 154 fit under 180.
    assert_eq!(wp.placed.len(), 3);
    assert_eq!(wp.skipped, vec![3, 4, 5, 6, 7]);
    assert_eq!(wp.placed[2].index, 2);
}

#[test]
fn minimal_theme_has_flat_background_and_no_effects() {
    let goals = vec![Goal::new("Run", 1.0, 4.0), Goal::new("Swim", 2.0, 4.0)];
    let mut cfg = config(400, 400, goals);
    cfg.theme = Theme::Minimal;
    let wp = bitmap().render(&cfg).unwrap();
    assert_eq!(wp.image.get_pixel(0, 0).0, palette::minimal::BACKGROUND);
    assert_eq!(wp.image.get_pixel(399, 399).0, palette::minimal::BACKGROUND);
    // Slot 1 starts at 300 and would end on the bottom edge.
    assert_eq!(wp.placed.len(), 1);
    assert_eq!(wp.skipped, vec![1]);
    assert_eq!(wp.placed[0].geometry.track.x0, 60.0);
}

#[test]
fn effects_change_the_vaporwave_image() {
    let mut plain = config(160, 120, vec![]);
    plain.effects = EffectFlags::none();
    let fx = config(160, 120, vec![]);
    let a = bitmap().render(&plain).unwrap();
    let b = bitmap().render(&fx).unwrap();
    assert_ne!(a.image, b.image);
}

#[test]
fn png_encoding_round_trips_dimensions() {
    let img = RgbImage::from_pixel(5, 3, image::Rgb([1, 2, 3]));
    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded, img);
}

#[test]
fn invalid_resolution_is_rejected_before_rendering() {
    let mut cfg = config(10, 10, vec![]);
    cfg.resolution.width = 0;
    assert!(matches!(
        bitmap().render(&cfg),
        Err(GoalwaveError::Validation(_))
    ));
}
