//! Shape definitions for the canvas.

mod rectangle;

pub use rectangle::Rectangle;

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for shapes.
///
/// Ids are assigned at construction and never change; the canvas keys its
/// shape collection by id, so two shapes with identical bounds coexist.
pub type ShapeId = Uuid;

/// Axis of translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl FromStr for Axis {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            other => Err(GridError::InvalidAxis(other.to_string())),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = GridError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            other => Err(GridError::InvalidAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Bounds as a `(start_x, end_x, start_y, end_y)` tuple.
    fn coords(&self) -> (i64, i64, i64, i64);

    /// Get the fill character.
    fn fill(&self) -> char;

    /// Replace the fill character.
    fn change_fill(&mut self, fill: char);
}

/// Enum wrapper for all shape kinds (for serialization).
///
/// Rectangles are the only kind today; new kinds slot in as variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
        }
    }

    pub fn coords(&self) -> (i64, i64, i64, i64) {
        match self {
            Shape::Rectangle(s) => s.coords(),
        }
    }

    pub fn fill(&self) -> char {
        match self {
            Shape::Rectangle(s) => s.fill(),
        }
    }

    pub fn change_fill(&mut self, fill: char) {
        match self {
            Shape::Rectangle(s) => s.change_fill(fill),
        }
    }

    /// Shift both bounds on one axis.
    ///
    /// Restricted to the canvas: moving a shape must repaint the grid to
    /// erase its old footprint, so callers go through
    /// `Canvas::translate_shape`.
    pub(crate) fn translate(&mut self, axis: Axis, delta: i64) {
        match self {
            Shape::Rectangle(s) => s.translate(axis, delta),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}
