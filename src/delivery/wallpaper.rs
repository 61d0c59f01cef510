use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::foundation::error::{GoalwaveError, GoalwaveResult};

/// Per-command limit before the child is killed and the next candidate is tried.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Operating system family used to pick wallpaper commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Linux and the BSDs: desktop-environment specific tools.
    Linux,
    /// `osascript` via Finder.
    MacOs,
    /// PowerShell calling `SystemParametersInfo`.
    Windows,
    /// No known mechanism.
    Other,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Self::Linux,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

/// One external command that may apply the wallpaper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallpaperCommand {
    /// Executable looked up on `PATH`.
    pub program: String,
    /// Arguments, passed verbatim.
    pub args: Vec<String>,
    /// `false` for preparatory steps whose success does not mean the wallpaper is set.
    pub applies: bool,
}

impl WallpaperCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            applies: true,
        }
    }

    fn prep(program: &str, args: &[&str]) -> Self {
        Self {
            applies: false,
            ..Self::new(program, args)
        }
    }
}

/// Ordered commands to try for `platform`.
///
/// `desktop` and `session` are the lowercased `XDG_CURRENT_DESKTOP` and `XDG_SESSION_TYPE`
/// values; they only matter on Linux.
pub fn candidate_commands(
    platform: Platform,
    desktop: &str,
    session: &str,
    path: &Path,
) -> Vec<WallpaperCommand> {
    let p = path.to_string_lossy();
    match platform {
        Platform::Linux => linux_commands(desktop, session, &p),
        Platform::MacOs => {
            let script = format!(
                "tell application \"Finder\" to set desktop picture to POSIX file \"{}\"",
                applescript_escape(&p)
            );
            vec![WallpaperCommand::new("osascript", &["-e", script.as_str()])]
        }
        Platform::Windows => {
            let script = format!(
                "{WIN32_SETTER}; \
                 if ([GoalwaveWallpaper]::SystemParametersInfo(20, 0, '{}', 3) -eq 0) {{ exit 1 }}",
                p.replace('\'', "''")
            );
            vec![WallpaperCommand::new(
                "powershell",
                &["-NoProfile", "-NonInteractive", "-Command", script.as_str()],
            )]
        }
        Platform::Other => Vec::new(),
    }
}

fn linux_commands(desktop: &str, session: &str, p: &str) -> Vec<WallpaperCommand> {
    let uri = format!("file://{p}");
    let mut out = Vec::new();
    if desktop.contains("gnome") || desktop.contains("unity") {
        for key in ["picture-uri", "picture-uri-dark"] {
            out.push(WallpaperCommand::new(
                "gsettings",
                &["set", "org.gnome.desktop.background", key, uri.as_str()],
            ));
        }
    } else if desktop.contains("kde") || desktop.contains("plasma") {
        out.push(WallpaperCommand::new("plasma-apply-wallpaperimage", &[p]));
    } else if desktop.contains("xfce") {
        out.push(WallpaperCommand::new(
            "xfconf-query",
            &[
                "-c",
                "xfce4-desktop",
                "-p",
                "/backdrop/screen0/monitor0/workspace0/last-image",
                "-s",
                p,
            ],
        ));
    } else if desktop.contains("hyprland") || session == "wayland" {
        out.push(WallpaperCommand::new("hyprctl", &["hyprpaper", "reload"]));
        out.push(WallpaperCommand::prep("pkill", &["swaybg"]));
        out.push(WallpaperCommand::new("swaybg", &["-i", p, "-m", "fill"]));
    } else if desktop.contains("sway") {
        let arg = format!("output * bg {p} fill");
        out.push(WallpaperCommand::new("swaymsg", &[arg.as_str()]));
    }

    if out.is_empty() {
        out.push(WallpaperCommand::new("feh", &["--bg-fill", p]));
        out.push(WallpaperCommand::new("nitrogen", &["--set-zoom-fill", p]));
    }
    out
}

const WIN32_SETTER: &str = "Add-Type -TypeDefinition 'using System.Runtime.InteropServices; \
     public class GoalwaveWallpaper { \
     [DllImport(\"user32.dll\", CharSet = CharSet.Unicode)] \
     public static extern int SystemParametersInfo(int a, int b, string c, int d); }'";

fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Write a BMP copy of `path` beside it for the Windows desktop setter.
pub(crate) fn bitmap_copy(path: &Path) -> GoalwaveResult<PathBuf> {
    let img = image::open(path).map_err(|e| {
        GoalwaveError::io(format!("failed to decode '{}': {e}", path.display()))
    })?;
    let bmp = path.with_extension("bmp");
    img.to_rgb8()
        .save_with_format(&bmp, image::ImageFormat::Bmp)
        .map_err(|e| GoalwaveError::io(format!("failed to write '{}': {e}", bmp.display())))?;
    Ok(bmp)
}

/// Contents written to `~/.config/hypr/hyprpaper.conf` before reloading hyprpaper.
pub(crate) fn hyprpaper_config(path: &Path) -> String {
    let p = path.display();
    format!("preload = {p}\nwallpaper = ,{p}\n")
}

fn hyprpaper_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config/hypr/hyprpaper.conf"))
}

fn env_lower(key: &str) -> String {
    std::env::var(key).unwrap_or_default().to_lowercase()
}

/// How a single candidate ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Succeeded,
    Failed(String),
}

/// Run `cmd`, killing it after `timeout`.
pub(crate) fn run_command(cmd: &WallpaperCommand, timeout: Duration) -> Outcome {
    let mut child = match Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(c) => c,
        Err(e) => return Outcome::Failed(format!("spawn failed: {e}")),
    };

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => return Outcome::Succeeded,
            Ok(Some(status)) => return Outcome::Failed(format!("exited with {status}")),
            Ok(None) if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Outcome::Failed(format!("timed out after {timeout:?}"));
            }
            Ok(None) => std::thread::sleep(POLL_INTERVAL),
            Err(e) => return Outcome::Failed(format!("wait failed: {e}")),
        }
    }
}

/// Try `commands` in order; returns the program that applied the wallpaper.
pub(crate) fn run_candidates(commands: &[WallpaperCommand], timeout: Duration) -> Option<String> {
    for cmd in commands {
        match run_command(cmd, timeout) {
            Outcome::Succeeded if cmd.applies => {
                tracing::info!(program = %cmd.program, "wallpaper set");
                return Some(cmd.program.clone());
            }
            Outcome::Succeeded => {}
            Outcome::Failed(reason) => {
                tracing::debug!(program = %cmd.program, %reason, "wallpaper command failed");
            }
        }
    }
    None
}

/// Apply `path` as the desktop wallpaper with the first command that works.
///
/// Returns `Ok(None)` when every candidate failed; only an unusable path is an error.
#[tracing::instrument]
pub fn set_wallpaper(path: &Path) -> GoalwaveResult<Option<String>> {
    let path = std::path::absolute(path).map_err(|e| {
        GoalwaveError::io(format!("cannot resolve wallpaper path '{}': {e}", path.display()))
    })?;
    if !path.is_file() {
        return Err(GoalwaveError::io(format!(
            "wallpaper image '{}' does not exist",
            path.display()
        )));
    }

    let platform = Platform::current();
    let desktop = env_lower("XDG_CURRENT_DESKTOP");
    let session = env_lower("XDG_SESSION_TYPE");

    if platform == Platform::Linux
        && (desktop.contains("hyprland") || session == "wayland")
        && let Some(conf) = hyprpaper_config_path()
        && (conf.exists() || desktop.contains("hyprland"))
    {
        write_hyprpaper_config(&conf, &path);
    }

    let target = if platform == Platform::Windows {
        bitmap_copy(&path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "bmp conversion failed, using the png");
            path.clone()
        })
    } else {
        path.clone()
    };

    let commands = candidate_commands(platform, &desktop, &session, &target);
    let applied = run_candidates(&commands, COMMAND_TIMEOUT);
    if applied.is_none() {
        tracing::warn!(
            path = %path.display(),
            ?platform,
            desktop = %desktop,
            "could not set the wallpaper automatically"
        );
    }
    Ok(applied)
}

fn write_hyprpaper_config(conf: &Path, image: &Path) {
    let result = conf
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| std::fs::write(conf, hyprpaper_config(image)));
    if let Err(e) = result {
        tracing::debug!(path = %conf.display(), error = %e, "hyprpaper config not updated");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/delivery/wallpaper.rs"]
mod tests;
