use crate::foundation::core::Resolution;
use crate::goals::layout_scale;
use crate::theme::Theme;

/// Vertical slots for the title and goal list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    /// Top edge of the title.
    pub title_y: f64,
    /// Top edge of the first goal slot.
    pub goal_start: f64,
    /// Distance between consecutive slot tops.
    pub goal_spacing: f64,
    /// Left edge shared by every slot.
    pub slot_x: f64,
    /// Width shared by every slot.
    pub slot_width: f64,
    theme: Theme,
    height: f64,
}

impl SlotLayout {
    /// Layout for `theme` on a canvas of `res`.
    pub fn new(theme: Theme, res: Resolution) -> Self {
        let w = f64::from(res.width);
        let h = f64::from(res.height);
        match theme {
            Theme::Vaporwave => {
                let scale = layout_scale(res.height);
                let margin = 60.0 * scale;
                let slot_width = (700.0 * scale).min(w - 2.0 * margin).max(0.0).floor();
                Self {
                    title_y: (h * 0.05).floor(),
                    goal_start: (h * 0.18).floor(),
                    goal_spacing: (90.0 * scale).round(),
                    slot_x: ((w - slot_width) / 2.0).floor(),
                    slot_width,
                    theme,
                    height: h,
                }
            }
            Theme::Minimal => {
                let slot_width = 600f64.min(w - 120.0).max(0.0);
                Self {
                    title_y: 80.0,
                    goal_start: 200.0,
                    goal_spacing: 100.0,
                    slot_x: ((w - slot_width) / 2.0).floor(),
                    slot_width,
                    theme,
                    height: h,
                }
            }
        }
    }

    /// Top edge of slot `index`.
    pub fn slot_y(&self, index: usize) -> f64 {
        self.goal_start + index as f64 * self.goal_spacing
    }

    /// Whether a slot starting at `slot_y` is drawn.
    ///
    /// Vaporwave goals stay above the horizon (top edge at most half the height); minimal goals
    /// need a full 100-row slot inside the canvas.
    pub fn fits(&self, slot_y: f64) -> bool {
        match self.theme {
            Theme::Vaporwave => slot_y <= self.height / 2.0,
            Theme::Minimal => slot_y + self.goal_spacing < self.height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
