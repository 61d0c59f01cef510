use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::effects::pipeline::EffectFlags;
use crate::foundation::core::Resolution;
use crate::foundation::error::{GoalwaveError, GoalwaveResult};
use crate::theme::Theme;

const DEFAULT_TITLE: &str = "GOALS";
const DEFAULT_GOAL_NAME: &str = "Goal";
const DEFAULT_TARGET: f64 = 100.0;

/// Wallpaper description: what to draw and at which size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GoalsConfig {
    /// Headline drawn at the top of the wallpaper.
    #[serde(default = "default_title")]
    pub title: String,
    /// Output size, `[width, height]` in JSON.
    #[serde(default)]
    pub resolution: Resolution,
    /// Goals in display order.
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Visual style.
    #[serde(default)]
    pub theme: Theme,
    /// Post effects to apply (vaporwave theme only).
    #[serde(default)]
    pub effects: EffectFlags,
    /// Seed for noise, glitch and palm jitter; random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            resolution: Resolution::default(),
            goals: Vec::new(),
            theme: Theme::default(),
            effects: EffectFlags::default(),
            seed: None,
        }
    }
}

impl GoalsConfig {
    /// Parse and validate a JSON goals document.
    pub fn from_json_str(json: &str) -> GoalwaveResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| GoalwaveError::serde(format!("invalid goals JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON goals file.
    pub fn from_path(path: impl AsRef<Path>) -> GoalwaveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GoalwaveError::io(format!("failed to open goals file '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            GoalwaveError::serde(format!("invalid goals JSON in '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Structural checks that the renderer relies on.
    pub fn validate(&self) -> GoalwaveResult<()> {
        self.resolution.validate()
    }

    /// Replace the resolution, keeping everything else.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Built-in example used when no goals file exists.
    pub fn sample() -> Self {
        Self {
            title: "2026 GOALS".to_string(),
            goals: vec![
                Goal::new("Goal 1", 50.0, 100.0),
                Goal::new("Goal 2", 30.0, 100.0),
                Goal::new("Goal 3", 75.0, 100.0),
            ],
            ..Self::default()
        }
    }
}

/// A named `current / target` pair.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Goal {
    /// Label shown above the bar.
    #[serde(default = "default_goal_name", deserialize_with = "lenient_name")]
    pub name: String,
    /// Progress so far; malformed values read as 0.
    #[serde(default, deserialize_with = "lenient_number")]
    pub current: f64,
    /// Value at which the goal is complete; malformed values read as 0.
    #[serde(default = "default_target", deserialize_with = "lenient_number")]
    pub target: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            name: default_goal_name(),
            current: 0.0,
            target: DEFAULT_TARGET,
        }
    }
}

impl Goal {
    /// Create a goal.
    pub fn new(name: impl Into<String>, current: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            current,
            target,
        }
    }

    /// `current / target` clamped to `[0, 1]`; 0 when the target is not positive.
    pub fn progress(&self) -> f64 {
        if !self.current.is_finite() || !self.target.is_finite() || self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_goal_name() -> String {
    DEFAULT_GOAL_NAME.to_string()
}

fn default_target() -> f64 {
    DEFAULT_TARGET
}

fn lenient_number<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let v = serde_json::Value::deserialize(de)?;
    let n = match &v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|n| n.is_finite()).unwrap_or(0.0))
}

fn lenient_name<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let v = serde_json::Value::deserialize(de)?;
    Ok(match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => default_goal_name(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
