mod helpers;

use helpers::{DrawOp, RecordingCanvas};
use ratatui::layout::Alignment;
use ratatui::style::Color;

use monthgrid::appearance::Appearance;
use monthgrid::geometry::{DirectionalEdgeInsets, LayoutDirection, Rect};
use monthgrid::style::{AccessibilityTraits, TextAlignment};
use monthgrid::theme::{self, ThemeColor};
use monthgrid::views::month_header::{Content, InvariantViewProperties};
use monthgrid::{Accessible, ItemView, LayoutMode, MonthHeaderView};

fn january(layout_mode: LayoutMode) -> Content {
    Content::new("January 2026", Some("January 2026".to_string()), layout_mode)
}

#[test]
fn visibility_tracks_layout_across_toggles() {
    let mut view = MonthHeaderView::construct(InvariantViewProperties::base());

    for layout_mode in [
        LayoutMode::Vertical,
        LayoutMode::Horizontal,
        LayoutMode::Horizontal,
        LayoutMode::Vertical,
        LayoutMode::Vertical,
    ] {
        MonthHeaderView::apply_content(january(layout_mode), &mut view);
        assert_eq!(
            view.is_label_hidden(),
            layout_mode == LayoutMode::Horizontal,
            "after applying {layout_mode:?}"
        );
    }
}

#[test]
fn content_sets_text_and_label() {
    let mut view = MonthHeaderView::construct(InvariantViewProperties::base());
    MonthHeaderView::apply_content(january(LayoutMode::Vertical), &mut view);

    assert_eq!(view.text(), "January 2026");
    assert_eq!(view.accessibility_label(), Some("January 2026"));
    assert_eq!(view.layout_mode(), Some(LayoutMode::Vertical));
}

#[test]
fn base_properties_match_documented_defaults() {
    let properties = InvariantViewProperties::base();
    assert_eq!(properties.background_color, theme::CLEAR);
    assert_eq!(properties.text_alignment, TextAlignment::Natural);
    assert_eq!(properties.accessibility_traits, AccessibilityTraits::HEADER);
    assert_eq!(properties.edge_insets, DirectionalEdgeInsets::ZERO);
}

#[test]
fn hidden_label_is_not_drawn() {
    let mut view = MonthHeaderView::construct(InvariantViewProperties::base());
    MonthHeaderView::apply_content(january(LayoutMode::Horizontal), &mut view);
    view.set_frame(Rect::new(0.0, 0.0, 200.0, 36.0));

    let mut canvas = RecordingCanvas::default();
    view.draw(&mut canvas, Appearance::Dark);

    assert!(canvas.texts().is_empty());
}

#[test]
fn background_covers_whole_frame_ignoring_insets() {
    let properties = InvariantViewProperties {
        background_color: ThemeColor::fixed(Color::Blue),
        edge_insets: DirectionalEdgeInsets::uniform(5.0),
        ..InvariantViewProperties::base()
    };
    let mut view = MonthHeaderView::construct(properties);
    MonthHeaderView::apply_content(january(LayoutMode::Vertical), &mut view);
    view.set_frame(Rect::new(0.0, 10.0, 200.0, 36.0));

    let mut canvas = RecordingCanvas::default();
    view.draw(&mut canvas, Appearance::Light);

    assert_eq!(
        canvas.fills(),
        vec![(Rect::new(0.0, 10.0, 200.0, 36.0), Color::Blue)]
    );
    let Some(DrawOp::Text { rect, .. }) = canvas.ops.last() else {
        panic!("expected label");
    };
    assert_eq!(*rect, Rect::new(5.0, 15.0, 190.0, 26.0));
}

#[test]
fn natural_alignment_flips_for_right_to_left() {
    let mut view = MonthHeaderView::construct(InvariantViewProperties::base());
    MonthHeaderView::apply_content(january(LayoutMode::Vertical), &mut view);
    view.set_frame(Rect::new(0.0, 0.0, 200.0, 36.0));
    view.set_layout_direction(LayoutDirection::RightToLeft);

    let mut canvas = RecordingCanvas::default();
    view.draw(&mut canvas, Appearance::Light);

    let Some(DrawOp::Text { style, .. }) = canvas.ops.last() else {
        panic!("expected label");
    };
    assert_eq!(style.alignment, Alignment::Right);
    assert_eq!(style.color, theme::LABEL.light);
}

#[test]
fn traits_come_from_properties() {
    let properties = InvariantViewProperties {
        accessibility_traits: AccessibilityTraits::HEADER | AccessibilityTraits::STATIC_TEXT,
        ..InvariantViewProperties::base()
    };
    let mut view = MonthHeaderView::construct(properties);
    view.set_accessibility_traits(AccessibilityTraits::empty());

    assert!(view.is_accessibility_element());
    assert!(view.accessibility_traits().contains(AccessibilityTraits::STATIC_TEXT));
}
