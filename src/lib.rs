//! Recyclable header views for a virtualized calendar grid.
//!
//! Views split their configuration into invariant properties, fixed for a view's lifetime and
//! used as the pool key, and content, reapplied on every reuse. See [`item::ItemView`].

pub mod app;
pub mod appearance;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handlers;
pub mod item;
pub mod labels;
pub mod logging;
pub mod pool;
pub mod style;
pub mod theme;
pub mod ui;
pub mod views;

pub use error::{Error, Result};
pub use item::{Accessible, ItemView, LayoutMode};
pub use pool::ReusePool;
pub use views::{CalendarItemView, DayOfWeekView, MonthHeaderView};
