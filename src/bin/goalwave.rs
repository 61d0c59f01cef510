use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use goalwave::{Composer, EffectFlags, GoalsConfig, Resolution};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "goalwave", version, about = "Vaporwave goal-tracker wallpapers")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render (or fetch) the wallpaper, write it, and apply it.
    Generate(GenerateArgs),
    /// Apply an existing image as the wallpaper.
    Set(SetArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Goals JSON; a built-in sample is used when the file does not exist.
    #[arg(long, default_value = "goals.json")]
    goals: PathBuf,

    /// Output PNG path [default: ~/.local/share/wallpapers/goals_wallpaper.png].
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fetch the PNG from this URL instead of rendering; falls back to local rendering.
    #[arg(long)]
    api: Option<String>,

    /// Override the configured width.
    #[arg(long, requires = "height", value_parser = clap::value_parser!(u32).range(1..=16_384))]
    width: Option<u32>,

    /// Override the configured height.
    #[arg(long, requires = "width", value_parser = clap::value_parser!(u32).range(1..=16_384))]
    height: Option<u32>,

    /// Seed for noise, glitch and palm jitter.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable glitch strips.
    #[arg(long, default_value_t = false, conflicts_with = "no_effects")]
    glitch: bool,

    /// Disable every post effect.
    #[arg(long, default_value_t = false)]
    no_effects: bool,

    /// Write the image but leave the desktop alone.
    #[arg(long, default_value_t = false)]
    no_set: bool,
}

#[derive(Parser, Debug)]
struct SetArgs {
    /// PNG to apply.
    #[arg(long)]
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Set(args) => cmd_set(&args.image),
    }
}

fn default_output() -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .context("cannot locate the home directory; pass --out")?;
    Ok(PathBuf::from(home).join(".local/share/wallpapers/goals_wallpaper.png"))
}

fn load_config(args: &GenerateArgs) -> anyhow::Result<GoalsConfig> {
    let mut cfg = if args.goals.exists() {
        GoalsConfig::from_path(&args.goals)
            .with_context(|| format!("load goals '{}'", args.goals.display()))?
    } else {
        tracing::warn!(path = %args.goals.display(), "goals file not found, using sample goals");
        GoalsConfig::sample()
    };

    if let (Some(w), Some(h)) = (args.width, args.height) {
        cfg = cfg.with_resolution(Resolution::new(w, h)?);
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.no_effects {
        cfg.effects = EffectFlags::none();
    } else if args.glitch {
        cfg.effects.glitch = true;
    }
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let out = match &args.out {
        Some(p) => p.clone(),
        None => default_output()?,
    };

    let fetched = match &args.api {
        Some(url) => fetch_to(url, &out),
        None => false,
    };
    if !fetched {
        let cfg = load_config(&args)?;
        let wallpaper = Composer::new().render(&cfg).context("render wallpaper")?;
        wallpaper
            .save_png(&out)
            .with_context(|| format!("write png '{}'", out.display()))?;
    }
    eprintln!("wrote {}", out.display());

    if args.no_set {
        return Ok(());
    }
    cmd_set(&out)
}

#[cfg(feature = "fetch")]
fn fetch_to(url: &str, out: &Path) -> bool {
    let result = goalwave::fetch_png(url, goalwave::DEFAULT_FETCH_TIMEOUT).and_then(|bytes| {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                goalwave::GoalwaveError::io(format!("create '{}': {e}", parent.display()))
            })?;
        }
        std::fs::write(out, bytes)
            .map_err(|e| goalwave::GoalwaveError::io(format!("write '{}': {e}", out.display())))
    });
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(%url, error = %e, "fetch failed, rendering locally");
            false
        }
    }
}

#[cfg(not(feature = "fetch"))]
fn fetch_to(url: &str, _out: &Path) -> bool {
    tracing::warn!(%url, "built without the `fetch` feature, rendering locally");
    false
}

fn cmd_set(image: &Path) -> anyhow::Result<()> {
    match goalwave::set_wallpaper(image)? {
        Some(program) => {
            eprintln!("wallpaper set with {program}");
            Ok(())
        }
        None => anyhow::bail!(
            "could not set the wallpaper automatically; set '{}' manually",
            image.display()
        ),
    }
}
