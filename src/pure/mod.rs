//! Side effect free data types and logic
pub mod geometry;

#[doc(inline)]
pub use geometry::{Point, Rect, Viewports};
