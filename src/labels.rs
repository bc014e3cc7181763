use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::item::LayoutMode;
use crate::views::{day_of_week, month_header};

/// Length of the weekday text shown in headers. Accessibility labels always use the full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolStyle {
    VeryShort,
    #[default]
    Short,
    Full,
}

#[must_use]
pub fn weekday_symbol(weekday: Weekday, style: SymbolStyle) -> &'static str {
    let (very_short, short, full) = match weekday {
        Weekday::Mon => ("M", "Mon", "Monday"),
        Weekday::Tue => ("T", "Tue", "Tuesday"),
        Weekday::Wed => ("W", "Wed", "Wednesday"),
        Weekday::Thu => ("T", "Thu", "Thursday"),
        Weekday::Fri => ("F", "Fri", "Friday"),
        Weekday::Sat => ("S", "Sat", "Saturday"),
        Weekday::Sun => ("S", "Sun", "Sunday"),
    };
    match style {
        SymbolStyle::VeryShort => very_short,
        SymbolStyle::Short => short,
        SymbolStyle::Full => full,
    }
}

/// The seven weekdays in display order, starting at `first`.
#[must_use]
pub fn week_starting(first: Weekday) -> [Weekday; 7] {
    let mut days = [first; 7];
    for i in 1..days.len() {
        days[i] = days[i - 1].succ();
    }
    days
}

#[must_use]
pub fn day_of_week_content(
    weekday: Weekday,
    style: SymbolStyle,
    layout_mode: LayoutMode,
) -> day_of_week::Content {
    day_of_week::Content::new(
        weekday_symbol(weekday, style),
        Some(weekday_symbol(weekday, SymbolStyle::Full).to_string()),
        layout_mode,
    )
}

/// Content for the header of the month containing `date`.
#[must_use]
pub fn month_header_content(date: NaiveDate, layout_mode: LayoutMode) -> month_header::Content {
    let title = month_title(date);
    month_header::Content::new(title.clone(), Some(title), layout_mode)
}

#[must_use]
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// First day of the month `offset` months away from `date`'s month.
#[must_use]
pub fn shift_month(date: NaiveDate, offset: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + offset;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
