use super::*;

#[test]
fn goal_colors_cycle() {
    assert_eq!(goal_color(0), goal_color(GOAL_COLORS.len()));
    assert_eq!(goal_color(1), goal_color(GOAL_COLORS.len() + 1));
    assert_ne!(goal_color(0), goal_color(1));
}

#[test]
fn named_lookup_matches_constants() {
    assert_eq!(Palette::named("cyan"), Some(Palette::CYAN));
    assert_eq!(Palette::named("hot_pink"), Some(Palette::HOT_PINK));
    assert_eq!(Palette::named("chartreuse"), None);
}

#[test]
fn palette_names_are_unique() {
    for (i, (a, _)) in PALETTE_TABLE.iter().enumerate() {
        for (b, _) in &PALETTE_TABLE[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
