//! Catalog Core
//!
//! Foundational value types shared by the theme system and the catalog app:
//!
//! - **Color**: RGBA with every channel normalized to `[0, 1]`
//! - **Geometry**: points, sizes, rectangles and edge insets used by layout
//!
//! # Example
//!
//! ```rust
//! use catalog_core::{Channel, Color};
//!
//! let primary = Color::from_hex(0x6200EE);
//! let dimmed = primary.with_channel(Channel::Alpha, 0.5);
//! assert_eq!(dimmed.to_hex_string(), "#6200ee80");
//! ```

pub mod color;
pub mod geometry;

pub use color::{Channel, Color, ColorParseError};
pub use geometry::{EdgeInsets, Point, Rect, RectEdge, Size};
