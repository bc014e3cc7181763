mod helpers;

use std::collections::HashSet;

use ratatui::style::Color;

use monthgrid::geometry::DirectionalEdgeInsets;
use monthgrid::pool::PoolStats;
use monthgrid::style::{AccessibilityTraits, DrawingConfig, Font, FontWeight, TextAlignment};
use monthgrid::theme::ThemeColor;
use monthgrid::views::{
    CalendarItemContent, CalendarItemProperties, CalendarItemView, day_of_week, month_header,
};
use monthgrid::{Accessible, DayOfWeekView, LayoutMode, MonthHeaderView, ReusePool};

fn variants() -> Vec<day_of_week::InvariantViewProperties> {
    let base = day_of_week::InvariantViewProperties::base;
    vec![
        base(),
        day_of_week::InvariantViewProperties {
            background_color: ThemeColor::fixed(Color::Red),
            ..base()
        },
        day_of_week::InvariantViewProperties {
            edge_insets: DirectionalEdgeInsets::new(0.0, 1.0, 0.0, 0.0),
            ..base()
        },
        day_of_week::InvariantViewProperties {
            shape: day_of_week::Shape::Rectangle { corner_radius: 2.0 },
            ..base()
        },
        day_of_week::InvariantViewProperties {
            background_shape_drawing_config: DrawingConfig {
                border_width: 2.0,
                ..DrawingConfig::default()
            },
            ..base()
        },
        day_of_week::InvariantViewProperties {
            font: Font::system(16.0).with_weight(FontWeight::Bold),
            ..base()
        },
        day_of_week::InvariantViewProperties {
            is_accessibility_element: true,
            ..base()
        },
        day_of_week::InvariantViewProperties {
            accessibility_traits: AccessibilityTraits::STATIC_TEXT,
            ..base()
        },
    ]
}

#[test]
fn every_field_participates_in_the_pool_key() {
    let keys = variants();
    let unique: HashSet<_> = keys.iter().cloned().collect();
    assert_eq!(unique.len(), keys.len());

    let mut pool = ReusePool::<DayOfWeekView>::new();
    for key in &keys {
        let view = pool.dequeue(key);
        pool.enqueue(view);
    }
    assert_eq!(pool.key_count(), keys.len());
}

fn header_variants() -> Vec<month_header::InvariantViewProperties> {
    let base = month_header::InvariantViewProperties::base;
    vec![
        base(),
        month_header::InvariantViewProperties {
            background_color: ThemeColor::fixed(Color::Blue),
            ..base()
        },
        month_header::InvariantViewProperties {
            edge_insets: DirectionalEdgeInsets::new(0.0, 0.0, 0.0, 1.0),
            ..base()
        },
        month_header::InvariantViewProperties {
            font: Font::system(22.0).with_weight(FontWeight::Semibold),
            ..base()
        },
        month_header::InvariantViewProperties {
            text_alignment: TextAlignment::Center,
            ..base()
        },
        month_header::InvariantViewProperties {
            text_color: ThemeColor::fixed(Color::Yellow),
            ..base()
        },
        month_header::InvariantViewProperties {
            accessibility_traits: AccessibilityTraits::HEADER | AccessibilityTraits::SELECTED,
            ..base()
        },
    ]
}

#[test]
fn every_header_field_participates_in_the_pool_key() {
    let keys = header_variants();
    let unique: HashSet<_> = keys.iter().cloned().collect();
    assert_eq!(unique.len(), keys.len());

    let mut pool = ReusePool::<MonthHeaderView>::new();
    for key in &keys {
        let view = pool.dequeue(key);
        pool.enqueue(view);
    }
    assert_eq!(pool.key_count(), keys.len());
    assert_eq!(pool.stats().constructed, keys.len());
    assert_eq!(pool.stats().reused, 0);
}

#[test]
fn pooled_view_keeps_its_own_invariants() {
    let mut pool = ReusePool::<DayOfWeekView>::new();
    let announced = day_of_week::InvariantViewProperties {
        is_accessibility_element: true,
        ..day_of_week::InvariantViewProperties::base()
    };

    let view = pool.dequeue(&announced);
    pool.enqueue(view);

    let quiet = pool.dequeue(&day_of_week::InvariantViewProperties::base());
    assert!(!quiet.is_accessibility_element());
    let loud = pool.dequeue(&announced);
    assert!(loud.is_accessibility_element());
    assert_eq!(
        pool.stats(),
        PoolStats {
            constructed: 2,
            reused: 1
        }
    );
}

#[test]
fn mixed_pool_keeps_kinds_apart() {
    let mut pool = ReusePool::<CalendarItemView>::new();
    let day_key =
        CalendarItemProperties::DayOfWeek(day_of_week::InvariantViewProperties::base());
    let header_key =
        CalendarItemProperties::MonthHeader(month_header::InvariantViewProperties::base());

    let day = pool.dequeue_with_content(
        &day_key,
        CalendarItemContent::DayOfWeek(day_of_week::Content::new(
            "S",
            Some("Sunday".to_string()),
            LayoutMode::Vertical,
        )),
    );
    pool.enqueue(day);

    let header = pool.dequeue_with_content(
        &header_key,
        CalendarItemContent::MonthHeader(month_header::Content::new(
            "March 2026",
            None,
            LayoutMode::Vertical,
        )),
    );

    assert_eq!(header.as_month_header().map(|h| h.text()), Some("March 2026"));
    assert!(header.is_accessibility_element());
    assert_eq!(pool.free_count(&day_key), 1);
    assert_eq!(pool.stats().constructed, 2);
}

#[test]
fn reuse_across_scroll_stays_bounded() {
    let mut pool = ReusePool::<DayOfWeekView>::new();
    let key = day_of_week::InvariantViewProperties::base();
    let names = ["S", "M", "T", "W", "T", "F", "S"];

    for month in 0..24 {
        let layout_mode = if month % 2 == 0 {
            LayoutMode::Vertical
        } else {
            LayoutMode::Horizontal
        };
        let row: Vec<_> = names
            .iter()
            .map(|name| {
                pool.dequeue_with_content(&key, day_of_week::Content::new(*name, None, layout_mode))
            })
            .collect();
        assert!(row.iter().all(|v| v.layout_mode() == Some(layout_mode)));
        for view in row {
            pool.enqueue(view);
        }
    }

    assert_eq!(pool.stats().constructed, 7);
    assert_eq!(pool.stats().reused, 7 * 23);
}
