//! Goal and title renderers.
//!
//! A [`GoalRenderer`] owns the text contexts of one generation and draws into the caller's
//! canvas. Vaporwave goals get neon labels and a glowing gradient bar; minimal goals are flat.

pub(crate) mod format;
pub(crate) mod neon;

use image::RgbImage;
use kurbo::RoundedRect;

use crate::config::model::Goal;
use crate::foundation::core::{Rect, Rgb8};
use crate::foundation::error::GoalwaveResult;
use crate::raster::layer::{Layer, paint_color, polyline, rect_to_cpu, shape_path, stroke_width};
use crate::raster::text::{FontWeight, TextPainter};
use crate::theme::Theme;
use crate::theme::palette::{self, Palette, STAT_TEXT, TITLE_TEXT, TRACK_FILL, goal_color};

use self::format::{percent_label, stat_line};
use self::neon::{PlacedText, draw_neon, draw_texts};

const FILL_RAMP_START: f64 = 0.65;

/// Where a goal landed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalGeometry {
    /// Full progress track.
    pub track: Rect,
    /// Filled pixels from the left edge of the track.
    pub fill_width: u32,
    /// Clamped progress in `[0, 1]`.
    pub progress: f64,
    /// Vertical extent of the whole slot, name to stat line.
    pub slot_height: f64,
}

/// Sizes inside a goal slot, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GoalMetrics {
    pub(crate) name_size: f32,
    pub(crate) bar_offset: f64,
    pub(crate) bar_height: f64,
    pub(crate) label_room: f64,
    pub(crate) label_gap: f64,
    pub(crate) percent_size: f32,
    pub(crate) stat_gap: f64,
    pub(crate) stat_size: f32,
    pub(crate) glow_radius: u32,
}

impl GoalMetrics {
    pub(crate) fn vaporwave(scale: f64) -> Self {
        Self {
            name_size: (28.0 * scale) as f32,
            bar_offset: (38.0 * scale).round(),
            bar_height: (14.0 * scale).round().max(2.0),
            label_room: (90.0 * scale).round(),
            label_gap: (12.0 * scale).round(),
            percent_size: (20.0 * scale) as f32,
            stat_gap: (8.0 * scale).round(),
            stat_size: (16.0 * scale) as f32,
            glow_radius: ((6.0 * scale).round() as u32).max(1),
        }
    }

    pub(crate) fn minimal() -> Self {
        Self {
            name_size: 24.0,
            bar_offset: 40.0,
            bar_height: 8.0,
            label_room: 70.0,
            label_gap: 10.0,
            percent_size: 18.0,
            stat_gap: 5.0,
            stat_size: 16.0,
            glow_radius: 0,
        }
    }

    /// Track rectangle and fill width for a slot.
    pub(crate) fn bar(
        &self,
        slot_x: f64,
        slot_y: f64,
        slot_width: f64,
        progress: f64,
    ) -> (Rect, u32) {
        let x0 = slot_x.round();
        let y0 = (slot_y + self.bar_offset).round();
        let track_w = (slot_width - self.label_room).floor().max(0.0);
        let track = Rect::new(x0, y0, x0 + track_w, y0 + self.bar_height);
        let fill = (track_w * progress.clamp(0.0, 1.0)).floor() as u32;
        (track, fill)
    }
}

/// Vertical scale relative to a 1080-row canvas, never below one half.
pub fn layout_scale(height: u32) -> f64 {
    (f64::from(height) / 1080.0).max(0.5)
}

/// Draws titles and goals for one generation.
pub struct GoalRenderer {
    theme: Theme,
    metrics: GoalMetrics,
    scale: f64,
    painter: TextPainter,
}

impl GoalRenderer {
    /// Renderer for a canvas `height` rows tall, resolving fonts from the default table.
    pub fn new(theme: Theme, height: u32) -> Self {
        Self::with_painter(theme, height, TextPainter::new())
    }

    pub(crate) fn with_painter(theme: Theme, height: u32, painter: TextPainter) -> Self {
        let scale = match theme {
            Theme::Vaporwave => layout_scale(height),
            Theme::Minimal => 1.0,
        };
        let metrics = match theme {
            Theme::Vaporwave => GoalMetrics::vaporwave(scale),
            Theme::Minimal => GoalMetrics::minimal(),
        };
        Self {
            theme,
            metrics,
            scale,
            painter,
        }
    }

    /// Draw one goal in the slot starting at `(slot_x, slot_y)`.
    #[tracing::instrument(skip(self, canvas, goal), fields(goal = %goal.name))]
    pub fn render_goal(
        &mut self,
        canvas: &mut RgbImage,
        goal: &Goal,
        slot_x: f64,
        slot_y: f64,
        slot_width: f64,
        color_index: usize,
    ) -> GoalwaveResult<GoalGeometry> {
        let progress = goal.progress();
        let (track, fill_width) = self.metrics.bar(slot_x, slot_y, slot_width, progress);
        let color = match self.theme {
            Theme::Vaporwave => goal_color(color_index),
            Theme::Minimal => palette::minimal::PRIMARY,
        };

        let stat_y = track.y1 + self.metrics.stat_gap;
        let stat_h = match self.theme {
            Theme::Vaporwave => {
                self.draw_vaporwave_goal(canvas, goal, track, fill_width, color, slot_y)?
            }
            Theme::Minimal => {
                self.draw_minimal_goal(canvas, goal, track, fill_width, color, slot_y)?
            }
        };

        let geometry = GoalGeometry {
            track,
            fill_width,
            progress,
            slot_height: stat_y + stat_h - slot_y,
        };
        tracing::debug!(progress, fill_width, "goal rendered");
        Ok(geometry)
    }

    fn draw_vaporwave_goal(
        &mut self,
        canvas: &mut RgbImage,
        goal: &Goal,
        track: Rect,
        fill_width: u32,
        color: Rgb8,
        slot_y: f64,
    ) -> GoalwaveResult<f64> {
        let m = self.metrics;
        let (w, h) = canvas.dimensions();
        let progress = goal.progress();

        let pct = percent_label(progress);
        let (_, pct_h) = self.painter.measure(&pct, m.percent_size, FontWeight::Bold)?;
        let pct_x = track.x1 + m.label_gap;
        let pct_y = track.y0 + (track.height() - pct_h) / 2.0;

        let p = &mut self.painter;
        let halo = [
            PlacedText::new(p, &goal.name, m.name_size, FontWeight::Bold, color, track.x0, slot_y)?,
            PlacedText::new(p, &pct, m.percent_size, FontWeight::Bold, color, pct_x, pct_y)?,
        ];
        let stat = PlacedText::new(
            p,
            &stat_line(goal.current, goal.target),
            m.stat_size,
            FontWeight::Regular,
            STAT_TEXT,
            track.x0,
            track.y1 + m.stat_gap,
        )?;
        let stat_h = stat.block.height();
        let core = [
            PlacedText::new(
                p,
                &goal.name,
                m.name_size,
                FontWeight::Bold,
                TITLE_TEXT,
                track.x0,
                slot_y,
            )?,
            PlacedText::new(p, &pct, m.percent_size, FontWeight::Bold, color, pct_x, pct_y)?,
            stat,
        ];

        let radius = track.height() / 2.0;
        let outline = (self.scale * 1.5).max(1.0);
        let track_layer = Layer::paint(w, h, |ctx| {
            let path = shape_path(&RoundedRect::from_rect(track, radius));
            ctx.set_paint(paint_color(TRACK_FILL, 200));
            ctx.fill_path(&path);
            stroke_width(ctx, outline);
            ctx.set_paint(paint_color(color, 150));
            ctx.stroke_path(&path);
            Ok(())
        })?;
        track_layer.composite_onto(canvas, 1.0)?;

        if fill_width > 0 {
            let fill_rect = Rect::new(
                track.x0,
                track.y0,
                track.x0 + f64::from(fill_width),
                track.y1,
            );
            let fill_radius = radius.min(f64::from(fill_width) / 2.0);
            let mut fill = Layer::paint(w, h, |ctx| {
                ctx.set_paint(paint_color(color, 255));
                ctx.fill_path(&shape_path(&RoundedRect::from_rect(fill_rect, fill_radius)));
                Ok(())
            })?;
            apply_brightness_ramp(&mut fill, track.x0 as i64, fill_width);
            fill.blurred(m.glow_radius)?.composite_onto(canvas, 1.0)?;
            fill.composite_onto(canvas, 1.0)?;
        }

        draw_neon(canvas, &halo, &core, m.glow_radius)?;
        Ok(stat_h)
    }

    fn draw_minimal_goal(
        &mut self,
        canvas: &mut RgbImage,
        goal: &Goal,
        track: Rect,
        fill_width: u32,
        color: Rgb8,
        slot_y: f64,
    ) -> GoalwaveResult<f64> {
        let m = self.metrics;
        let (w, h) = canvas.dimensions();
        let text = palette::minimal::TEXT;
        let p = &mut self.painter;

        let stat = PlacedText::new(
            p,
            &stat_line(goal.current, goal.target),
            m.stat_size,
            FontWeight::Regular,
            text,
            track.x0,
            track.y1 + m.stat_gap,
        )?;
        let stat_h = stat.block.height();
        let texts = [
            PlacedText::new(p, &goal.name, m.name_size, FontWeight::Bold, text, track.x0, slot_y)?,
            PlacedText::new(
                p,
                &percent_label(goal.progress()),
                m.percent_size,
                FontWeight::Bold,
                color,
                track.x1 + m.label_gap,
                track.y0 - 8.0,
            )?,
            stat,
        ];

        let bars = Layer::paint(w, h, |ctx| {
            ctx.set_paint(paint_color(palette::minimal::GREY, 255));
            ctx.fill_rect(&rect_to_cpu(track));
            if fill_width > 0 {
                ctx.set_paint(paint_color(color, 255));
                ctx.fill_rect(&rect_to_cpu(Rect::new(
                    track.x0,
                    track.y0,
                    track.x0 + f64::from(fill_width),
                    track.y1,
                )));
            }
            Ok(())
        })?;
        bars.composite_onto(canvas, 1.0)?;
        draw_texts(canvas, &texts)?;
        Ok(stat_h)
    }

    /// Draw the centered headline with its top edge at `y`; returns its bottom edge.
    #[tracing::instrument(skip(self, canvas))]
    pub fn render_title(
        &mut self,
        canvas: &mut RgbImage,
        title: &str,
        y: f64,
    ) -> GoalwaveResult<f64> {
        let (w, h) = canvas.dimensions();
        match self.theme {
            Theme::Vaporwave => {
                let size = (f64::from(h) * 0.06).max(12.0) as f32;
                let (tw, th) = self.painter.measure(title, size, FontWeight::Bold)?;
                let x = ((f64::from(w) - tw) / 2.0).floor();
                let p = &mut self.painter;
                let halo = [PlacedText::new(
                    p,
                    title,
                    size,
                    FontWeight::Bold,
                    Palette::PINK,
                    x,
                    y,
                )?];
                let core = [PlacedText::new(p, title, size, FontWeight::Bold, TITLE_TEXT, x, y)?];
                let radius = ((10.0 * self.scale).round() as u32).max(2);
                draw_neon(canvas, &halo, &core, radius)?;
                Ok(y + th)
            }
            Theme::Minimal => {
                let (tw, th) = self.painter.measure(title, 48.0, FontWeight::Bold)?;
                let x = ((f64::from(w) - tw) / 2.0).floor();
                let text = [PlacedText::new(
                    &mut self.painter,
                    title,
                    48.0,
                    FontWeight::Bold,
                    palette::minimal::TEXT,
                    x,
                    y,
                )?];
                draw_texts(canvas, &text)?;

                let underline_y = y + th + 10.0;
                let underline = Layer::paint(w, h, |ctx| {
                    stroke_width(ctx, 3.0);
                    ctx.set_paint(paint_color(palette::minimal::PRIMARY, 255));
                    ctx.stroke_path(&polyline(&[
                        kurbo::Point::new(x, underline_y),
                        kurbo::Point::new(x + tw, underline_y),
                    ]));
                    Ok(())
                })?;
                underline.composite_onto(canvas, 1.0)?;
                Ok(underline_y)
            }
        }
    }
}

/// Scale the fill's premultiplied color from 65% brightness at its left edge to 100% at its right.
pub(crate) fn apply_brightness_ramp(layer: &mut Layer, x0: i64, fill_width: u32) {
    let w = layer.width() as usize;
    if w == 0 || fill_width == 0 {
        return;
    }
    let span = f64::from(fill_width.saturating_sub(1).max(1));
    for (i, px) in layer.data_mut().chunks_exact_mut(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let x = (i % w) as i64;
        let t = ((x - x0) as f64 / span).clamp(0.0, 1.0);
        let f = FILL_RAMP_START + (1.0 - FILL_RAMP_START) * t;
        for c in &mut px[..3] {
            *c = (f64::from(*c) * f).round() as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/goals/mod.rs"]
mod tests;
