use super::*;

fn programs(cmds: &[WallpaperCommand]) -> Vec<&str> {
    cmds.iter().map(|c| c.program.as_str()).collect()
}

fn img() -> &'static Path {
    Path::new("/home/me/.local/share/wallpapers/goals_wallpaper.png")
}

#[test]
fn gnome_sets_light_and_dark_uris() {
    let cmds = candidate_commands(Platform::Linux, "ubuntu:gnome", "wayland", img());
    assert_eq!(programs(&cmds), ["gsettings", "gsettings"]);
    assert_eq!(cmds[0].args[2], "picture-uri");
    assert_eq!(cmds[1].args[2], "picture-uri-dark");
    assert_eq!(
        cmds[0].args[3],
        "file:///home/me/.local/share/wallpapers/goals_wallpaper.png"
    );
}

#[test]
fn kde_and_xfce_use_their_own_tools() {
    let kde = candidate_commands(Platform::Linux, "kde", "x11", img());
    assert_eq!(programs(&kde), ["plasma-apply-wallpaperimage"]);
    let xfce = candidate_commands(Platform::Linux, "xfce", "x11", img());
    assert_eq!(programs(&xfce), ["xfconf-query"]);
    assert_eq!(xfce[0].args.last().unwrap(), &img().display().to_string());
}

#[test]
fn wayland_tries_hyprpaper_then_swaybg() {
    let cmds = candidate_commands(Platform::Linux, "hyprland", "wayland", img());
    assert_eq!(programs(&cmds), ["hyprctl", "pkill", "swaybg"]);
    assert!(!cmds[1].applies);
    assert!(cmds[2].applies);

    let generic = candidate_commands(Platform::Linux, "", "wayland", img());
    assert_eq!(programs(&generic), ["hyprctl", "pkill", "swaybg"]);
}

#[test]
fn sway_on_x11_session_uses_swaymsg() {
    let cmds = candidate_commands(Platform::Linux, "sway", "x11", img());
    assert_eq!(programs(&cmds), ["swaymsg"]);
    assert!(cmds[0].args[0].starts_with("output * bg /home/me"));
}

#[test]
fn unknown_desktop_falls_back_to_feh_and_nitrogen() {
    let cmds = candidate_commands(Platform::Linux, "i3", "x11", img());
    assert_eq!(programs(&cmds), ["feh", "nitrogen"]);
}

#[test]
fn macos_and_windows_have_one_command() {
    let mac = candidate_commands(Platform::MacOs, "", "", Path::new("/tmp/a \"b\".png"));
    assert_eq!(programs(&mac), ["osascript"]);
    assert!(mac[0].args[1].contains("POSIX file \"/tmp/a \\\"b\\\".png\""));

    let win = candidate_commands(Platform::Windows, "", "", Path::new("C:\\it's.png"));
    assert_eq!(programs(&win), ["powershell"]);
    assert!(win[0].args[3].contains("'C:\\it''s.png'"));

    assert!(candidate_commands(Platform::Other, "", "", img()).is_empty());
}

#[test]
fn hyprpaper_config_preloads_the_image() {
    assert_eq!(
        hyprpaper_config(Path::new("/w.png")),
        "preload = /w.png\nwallpaper = ,/w.png\n"
    );
}

#[test]
fn missing_programs_are_skipped() {
    let cmds = vec![
        WallpaperCommand::new("goalwave-definitely-missing-tool", &[]),
        WallpaperCommand::new("goalwave-another-missing-tool", &["x"]),
    ];
    assert_eq!(run_candidates(&cmds, Duration::from_secs(1)), None);
}

#[cfg(unix)]
#[test]
fn first_successful_applying_command_wins() {
    let cmds = vec![
        WallpaperCommand::new("false", &[]),
        WallpaperCommand::prep("true", &[]),
        WallpaperCommand::new("sh", &["-c", "exit 0"]),
        WallpaperCommand::new("true", &[]),
    ];
    assert_eq!(run_candidates(&cmds, Duration::from_secs(5)), Some("sh".to_string()));
}

#[cfg(unix)]
#[test]
fn slow_commands_time_out() {
    let cmd = WallpaperCommand::new("sleep", &["5"]);
    let started = Instant::now();
    let outcome = run_command(&cmd, Duration::from_millis(100));
    assert!(matches!(outcome, Outcome::Failed(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn set_wallpaper_rejects_missing_file() {
    let err = set_wallpaper(Path::new("/nonexistent/goalwave/wall.png")).unwrap_err();
    assert!(matches!(err, GoalwaveError::Io(_)));
}

#[test]
fn bitmap_copy_sits_next_to_the_png() {
    let dir = std::env::temp_dir().join("goalwave-bitmap-copy");
    std::fs::create_dir_all(&dir).unwrap();
    let png = dir.join("wall.png");
    let src = image::RgbImage::from_pixel(7, 5, image::Rgb([255, 113, 206]));
    src.save(&png).unwrap();

    let bmp = bitmap_copy(&png).unwrap();
    assert_eq!(bmp, dir.join("wall.bmp"));
    let decoded = image::open(&bmp).unwrap().to_rgb8();
    assert_eq!(decoded, src);
}

#[test]
fn bitmap_copy_rejects_undecodable_input() {
    let dir = std::env::temp_dir().join("goalwave-bitmap-copy-bad");
    std::fs::create_dir_all(&dir).unwrap();
    let bogus = dir.join("wall.png");
    std::fs::write(&bogus, b"not an image").unwrap();
    assert!(matches!(bitmap_copy(&bogus), Err(GoalwaveError::Io(_))));
}
