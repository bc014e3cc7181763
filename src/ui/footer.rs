use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line as RatatuiLine, Span},
};

use crate::app::App;
use crate::appearance::Appearance;
use crate::item::LayoutMode;

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("h/v", "Layout"),
    ("←/→", "Month"),
    ("t", "Theme"),
    ("q", "Quit"),
];

pub fn render_footer(app: &App) -> RatatuiLine<'static> {
    let (label, color) = match app.layout_mode {
        LayoutMode::Horizontal => (" HORIZONTAL ", Color::Cyan),
        LayoutMode::Vertical => (" VERTICAL ", Color::Magenta),
    };

    let mut spans = vec![Span::styled(
        label,
        Style::default().fg(Color::Black).bg(color),
    )];

    for (key, action) in FOOTER_KEYS {
        spans.push(Span::styled(format!("  {key}"), Style::default().fg(Color::Gray)));
        spans.push(Span::styled(format!(" {action}"), Style::default().dim()));
    }

    RatatuiLine::from(spans)
}

pub fn render_status(app: &App) -> RatatuiLine<'static> {
    let appearance = match app.appearance {
        Appearance::Light => "light",
        Appearance::Dark => "dark",
    };
    let stats = app.strip.pool_stats();
    RatatuiLine::from(Span::styled(
        format!(
            " {appearance} · views built {} · reused {}",
            stats.constructed, stats.reused
        ),
        Style::default().fg(Color::DarkGray),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::config::Config;

    #[test]
    fn footer_names_current_layout() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut app = App::new_with_date(Config::default(), Appearance::Dark, date);
        let text = |line: RatatuiLine<'static>| -> String {
            line.spans.iter().map(|s| s.content.to_string()).collect()
        };

        assert!(text(render_footer(&app)).contains("HORIZONTAL"));
        app.toggle_layout();
        assert!(text(render_footer(&app)).contains("VERTICAL"));
    }
}
