use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::theme::palette::SILHOUETTE;

#[test]
fn trunk_leans_toward_the_mirrored_side() {
    let left = trunk_points(100, 500, 300, false);
    let right = trunk_points(100, 500, 300, true);
    assert_eq!(left.len(), 200);
    assert_eq!(left[0], Point::new(100.0, 500.0));
    assert!(left.last().unwrap().x > 100.0);
    assert!(right.last().unwrap().x < 100.0);
    assert_eq!(left.last().unwrap().y, 301.0);
}

#[test]
fn mirrored_fronds_reflect_angles() {
    for i in 0..FRONDS {
        let a = frond_angle(i, false);
        let b = frond_angle(i, true);
        assert!((a + b - PI).abs() < 1e-12);
    }
}

#[test]
fn fronds_droop_below_a_straight_line() {
    let pts = frond_points(Point::new(0.0, 0.0), 0.0, 100.0);
    assert_eq!(pts.len(), 16);
    let tip = pts.last().unwrap();
    assert!((tip.x - 100.0).abs() < 1e-9);
    assert!((tip.y - 40.0).abs() < 1e-9);
}

#[test]
fn segment_width_tapers_to_one() {
    assert_eq!(frond_segment_width(1.0 / 15.0), 2.0);
    assert_eq!(frond_segment_width(1.0), 1.0);
}

#[test]
fn palms_are_seeded_and_silhouetted() {
    let mut a = RgbImage::from_pixel(400, 300, image::Rgb([200, 200, 200]));
    let mut b = a.clone();
    draw_palms(&mut a, 4, SILHOUETTE, &mut SmallRng::seed_from_u64(3)).unwrap();
    draw_palms(&mut b, 4, SILHOUETTE, &mut SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);

    // Trunk base of the first palm.
    let base = a.get_pixel(32, 193).0;
    assert_eq!(base, SILHOUETTE);
    assert_eq!(a.get_pixel(200, 290).0, [200, 200, 200]);
}

#[test]
fn zero_palms_leave_canvas_untouched() {
    let mut canvas = RgbImage::from_pixel(50, 40, image::Rgb([9, 9, 9]));
    let before = canvas.clone();
    draw_palms(&mut canvas, 0, SILHOUETTE, &mut SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(canvas, before);
}

#[test]
fn tiny_canvas_is_tolerated() {
    let mut canvas = RgbImage::new(2, 2);
    draw_palms(&mut canvas, 4, SILHOUETTE, &mut SmallRng::seed_from_u64(1)).unwrap();
}
