//! Presentation layer for sls: icon cascade, ANSI colors, and table rendering.

pub mod icons;
pub mod render;
pub mod theme;

pub use icons::{Decoration, IconMatcher, IconQuery, IconResolver};
pub use render::{ColumnWidths, render_row, render_single, render_table};
pub use theme::ColorClass;
