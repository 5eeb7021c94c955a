//! InkGrid Core Library
//!
//! A fixed-size character grid ("canvas") onto which axis-aligned rectangles
//! are painted, layered, re-filled, and translated. The grid contents are a
//! cache: after every mutation they are re-derived in full by replaying the
//! shape collection in paint order over the background fill.

pub mod canvas;
pub mod error;
pub mod shapes;

pub use canvas::Canvas;
pub use error::{GridError, GridResult};
pub use shapes::{Axis, Rectangle, Shape, ShapeId, ShapeTrait};
