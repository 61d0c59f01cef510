use super::*;

#[test]
fn full_hd_vaporwave_fits_four_goals() {
    let l = SlotLayout::new(Theme::Vaporwave, Resolution::default());
    assert_eq!(l.goal_start, 194.0);
    assert_eq!(l.goal_spacing, 90.0);
    assert_eq!(l.slot_width, 700.0);
    assert_eq!(l.slot_x, 610.0);
    let fitting = (0..10).take_while(|i| l.fits(l.slot_y(*i))).count();
    assert_eq!(fitting, 4);
}

#[test]
fn small_canvas_scales_down_but_not_below_half() {
    let l = SlotLayout::new(Theme::Vaporwave, Resolution::new(800, 300).unwrap());
    assert_eq!(l.goal_spacing, 45.0);
    assert_eq!(l.slot_width, 350.0);
}

#[test]
fn narrow_canvas_keeps_margins() {
    let l = SlotLayout::new(Theme::Vaporwave, Resolution::new(400, 1080).unwrap());
    assert_eq!(l.slot_width, 280.0);
    assert_eq!(l.slot_x, 60.0);
}

#[test]
fn minimal_layout_matches_flat_design() {
    let l = SlotLayout::new(Theme::Minimal, Resolution::new(1920, 1080).unwrap());
    assert_eq!(l.slot_width, 600.0);
    assert_eq!(l.slot_x, 660.0);
    assert_eq!(l.slot_y(2), 400.0);
    assert!(l.fits(879.0));
    assert!(!l.fits(980.0));

    let tiny = SlotLayout::new(Theme::Minimal, Resolution::new(100, 100).unwrap());
    assert_eq!(tiny.slot_width, 0.0);
    assert!(!tiny.fits(tiny.slot_y(0)));
}
