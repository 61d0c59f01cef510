use super::*;

#[test]
fn png_signature_is_required() {
    assert!(check_png(b"\x89PNG\r\n\x1a\n....").is_ok());
    assert!(matches!(
        check_png(b"{\"error\":\"boom\"}"),
        Err(GoalwaveError::Serde(_))
    ));
    assert!(check_png(b"").is_err());
}

#[test]
fn unreachable_host_is_an_io_error() {
    let err = fetch_png("http://127.0.0.1:1/wallpaper.png", Duration::from_secs(2)).unwrap_err();
    assert!(matches!(err, GoalwaveError::Io(_)), "{err}");
}

#[test]
fn malformed_url_is_an_io_error() {
    assert!(matches!(
        fetch_png("not a url", Duration::from_secs(1)),
        Err(GoalwaveError::Io(_))
    ));
}
