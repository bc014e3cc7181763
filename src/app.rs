use chrono::{Datelike, Local, NaiveDate};

use crate::appearance::Appearance;
use crate::config::Config;
use crate::geometry::Rect;
use crate::item::LayoutMode;
use crate::labels;
use crate::ui::HeaderStrip;

pub struct App {
    pub config: Config,
    pub month: NaiveDate,
    pub layout_mode: LayoutMode,
    pub appearance: Appearance,
    pub strip: HeaderStrip,
    pub should_quit: bool,
    laid_out: Option<(Rect, NaiveDate, LayoutMode)>,
}

impl App {
    #[must_use]
    pub fn new(config: Config, appearance: Appearance) -> Self {
        Self::new_with_date(config, appearance, Local::now().date_naive())
    }

    #[must_use]
    pub fn new_with_date(config: Config, appearance: Appearance, date: NaiveDate) -> Self {
        let strip = HeaderStrip::new(config.cell_size());
        let month = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        Self {
            layout_mode: config.layout,
            strip,
            month,
            appearance,
            config,
            should_quit: false,
            laid_out: None,
        }
    }

    pub fn next_month(&mut self) {
        self.month = labels::shift_month(self.month, 1);
    }

    pub fn prev_month(&mut self) {
        self.month = labels::shift_month(self.month, -1);
    }

    pub fn toggle_layout(&mut self) {
        self.layout_mode = self.layout_mode.toggled();
        tracing::info!(layout_mode = ?self.layout_mode, "layout switched");
    }

    pub fn set_layout(&mut self, layout_mode: LayoutMode) {
        self.layout_mode = layout_mode;
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
        tracing::info!(appearance = ?self.appearance, "appearance switched");
    }

    /// Lays out the header strip when bounds, month or layout changed since the last pass.
    pub fn prepare_strip(&mut self, bounds: Rect) {
        let state = (bounds, self.month, self.layout_mode);
        if self.laid_out == Some(state) {
            return;
        }
        self.strip
            .layout(bounds, self.month, self.layout_mode, &self.config);
        self.laid_out = Some(state);
    }
}
