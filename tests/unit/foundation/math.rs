use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
}

#[test]
fn lerp_truncates_and_hits_endpoints() {
    assert_eq!(lerp_trunc_u8(0, 255, 0.0), 0);
    assert_eq!(lerp_trunc_u8(0, 255, 1.0), 255);
    assert_eq!(lerp_trunc_u8(0, 10, 0.55), 5);
    assert_eq!(lerp_trunc_u8(200, 100, 0.5), 150);
}

#[test]
fn clamp_u8_saturates() {
    assert_eq!(clamp_u8(-3.0), 0);
    assert_eq!(clamp_u8(300.0), 255);
    assert_eq!(clamp_u8(12.4), 12);
}

#[test]
fn luma_of_white_is_full() {
    assert!((luma601(255, 255, 255) - 255.0).abs() < 0.01);
}
