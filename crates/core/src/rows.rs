//! Scroll affordance for horizontally scrolling rows.
//!
//! A [`RowWindow`] is fed the three measurements a browser would report
//! (scroll offset, content width, viewport width) and answers whether the
//! row can move in either direction, and by how much one step moves it.

use serde::Serialize;

use crate::config::RowsConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RowMetrics {
    pub scroll_offset: f64,
    pub content_width: f64,
    pub viewport_width: f64,
}

impl RowMetrics {
    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollAffordance {
    pub can_scroll_backward: bool,
    pub can_scroll_forward: bool,
}

/// Prev/next buttons of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavControls {
    /// Hidden altogether when the row fits without overflow.
    pub visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Backward,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

/// Where a step should take the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub delta: f64,
    pub target: f64,
    pub behavior: ScrollBehavior,
}

/// One page-equivalent step for a viewport of `viewport_width`.
pub fn step_size(viewport_width: f64, config: &RowsConfig) -> f64 {
    (viewport_width * config.step_ratio)
        .floor()
        .max(config.min_step_px)
        .min(config.max_step_px)
}

pub fn affordance(metrics: &RowMetrics, tolerance_px: f64) -> ScrollAffordance {
    let max_offset = metrics.content_width - metrics.viewport_width;
    ScrollAffordance {
        can_scroll_backward: metrics.scroll_offset > tolerance_px,
        can_scroll_forward: metrics.scroll_offset < max_offset - tolerance_px,
    }
}

/// Scroll state of one row.
#[derive(Debug, Clone)]
pub struct RowWindow {
    config: RowsConfig,
    metrics: RowMetrics,
    affordance: ScrollAffordance,
}

impl RowWindow {
    pub fn new(config: RowsConfig) -> Self {
        Self {
            config,
            metrics: RowMetrics::default(),
            affordance: ScrollAffordance::default(),
        }
    }

    /// Replace all measurements at once, e.g. on first layout.
    pub fn measure(&mut self, metrics: RowMetrics) -> ScrollAffordance {
        self.metrics = metrics;
        self.recompute()
    }

    pub fn on_scroll(&mut self, scroll_offset: f64) -> ScrollAffordance {
        self.metrics.scroll_offset = scroll_offset;
        self.recompute()
    }

    pub fn on_resize(&mut self, viewport_width: f64) -> ScrollAffordance {
        self.metrics.viewport_width = viewport_width;
        self.recompute()
    }

    pub fn on_content_resize(&mut self, content_width: f64) -> ScrollAffordance {
        self.metrics.content_width = content_width;
        self.recompute()
    }

    pub fn metrics(&self) -> &RowMetrics {
        &self.metrics
    }

    pub fn affordance(&self) -> ScrollAffordance {
        self.affordance
    }

    pub fn controls(&self) -> NavControls {
        let a = self.affordance;
        NavControls {
            visible: a.can_scroll_backward || a.can_scroll_forward,
            prev_enabled: a.can_scroll_backward,
            next_enabled: a.can_scroll_forward,
        }
    }

    /// Compute a one-step move. Returns `None` when the row cannot move
    /// that way.
    pub fn scroll_step(&self, direction: ScrollDirection) -> Option<ScrollRequest> {
        let allowed = match direction {
            ScrollDirection::Backward => self.affordance.can_scroll_backward,
            ScrollDirection::Forward => self.affordance.can_scroll_forward,
        };
        if !allowed {
            return None;
        }

        let step = step_size(self.metrics.viewport_width, &self.config);
        let signed = match direction {
            ScrollDirection::Backward => -step,
            ScrollDirection::Forward => step,
        };
        let current = self.metrics.scroll_offset;
        let target = (current + signed).clamp(0.0, self.metrics.max_offset());

        Some(ScrollRequest {
            delta: target - current,
            target,
            behavior: ScrollBehavior::Smooth,
        })
    }

    fn recompute(&mut self) -> ScrollAffordance {
        self.affordance = affordance(&self.metrics, self.config.tolerance_px);
        self.affordance
    }
}
