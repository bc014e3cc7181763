pub mod day_of_week;
mod layers;
pub mod month_header;

use crate::appearance::Appearance;
use crate::canvas::Canvas;
use crate::geometry::{LayoutDirection, Rect};
use crate::item::{Accessible, ItemView};
use crate::style::AccessibilityTraits;

pub use day_of_week::DayOfWeekView;
pub use month_header::MonthHeaderView;

/// Pool key for hosts that recycle both header kinds from one pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarItemProperties {
    DayOfWeek(day_of_week::InvariantViewProperties),
    MonthHeader(month_header::InvariantViewProperties),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarItemContent {
    DayOfWeek(day_of_week::Content),
    MonthHeader(month_header::Content),
}

/// A header of either kind, carrying the key it was constructed from.
#[derive(Debug, Clone)]
pub struct CalendarItemView {
    properties: CalendarItemProperties,
    view: HeaderView,
}

#[derive(Debug, Clone)]
pub enum HeaderView {
    DayOfWeek(DayOfWeekView),
    MonthHeader(MonthHeaderView),
}

impl CalendarItemView {
    #[must_use]
    pub fn view(&self) -> &HeaderView {
        &self.view
    }

    #[must_use]
    pub fn as_day_of_week(&self) -> Option<&DayOfWeekView> {
        match &self.view {
            HeaderView::DayOfWeek(view) => Some(view),
            HeaderView::MonthHeader(_) => None,
        }
    }

    #[must_use]
    pub fn as_month_header(&self) -> Option<&MonthHeaderView> {
        match &self.view {
            HeaderView::MonthHeader(view) => Some(view),
            HeaderView::DayOfWeek(_) => None,
        }
    }
}

impl ItemView for CalendarItemView {
    type InvariantProperties = CalendarItemProperties;
    type Content = CalendarItemContent;

    fn construct(invariant_properties: CalendarItemProperties) -> Self {
        let view = match &invariant_properties {
            CalendarItemProperties::DayOfWeek(properties) => {
                HeaderView::DayOfWeek(DayOfWeekView::construct(properties.clone()))
            }
            CalendarItemProperties::MonthHeader(properties) => {
                HeaderView::MonthHeader(MonthHeaderView::construct(properties.clone()))
            }
        };
        Self {
            properties: invariant_properties,
            view,
        }
    }

    /// Content of the other kind is a host bug; it is logged and dropped.
    fn apply_content(content: CalendarItemContent, view: &mut Self) {
        match (content, &mut view.view) {
            (CalendarItemContent::DayOfWeek(content), HeaderView::DayOfWeek(view)) => {
                DayOfWeekView::apply_content(content, view);
            }
            (CalendarItemContent::MonthHeader(content), HeaderView::MonthHeader(view)) => {
                MonthHeaderView::apply_content(content, view);
            }
            (content, _) => {
                tracing::warn!(?content, "content kind does not match pooled view, ignoring");
            }
        }
    }

    fn invariant_properties(&self) -> &CalendarItemProperties {
        &self.properties
    }

    fn frame(&self) -> Rect {
        match &self.view {
            HeaderView::DayOfWeek(view) => view.frame(),
            HeaderView::MonthHeader(view) => view.frame(),
        }
    }

    fn set_frame(&mut self, frame: Rect) {
        match &mut self.view {
            HeaderView::DayOfWeek(view) => view.set_frame(frame),
            HeaderView::MonthHeader(view) => view.set_frame(frame),
        }
    }

    fn set_layout_direction(&mut self, direction: LayoutDirection) {
        match &mut self.view {
            HeaderView::DayOfWeek(view) => view.set_layout_direction(direction),
            HeaderView::MonthHeader(view) => view.set_layout_direction(direction),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, appearance: Appearance) {
        match &self.view {
            HeaderView::DayOfWeek(view) => view.draw(canvas, appearance),
            HeaderView::MonthHeader(view) => view.draw(canvas, appearance),
        }
    }
}

impl Accessible for CalendarItemView {
    fn is_accessibility_element(&self) -> bool {
        match &self.view {
            HeaderView::DayOfWeek(view) => view.is_accessibility_element(),
            HeaderView::MonthHeader(view) => view.is_accessibility_element(),
        }
    }

    fn accessibility_traits(&self) -> AccessibilityTraits {
        match &self.view {
            HeaderView::DayOfWeek(view) => view.accessibility_traits(),
            HeaderView::MonthHeader(view) => view.accessibility_traits(),
        }
    }

    fn accessibility_label(&self) -> Option<&str> {
        match &self.view {
            HeaderView::DayOfWeek(view) => view.accessibility_label(),
            HeaderView::MonthHeader(view) => view.accessibility_label(),
        }
    }
}
