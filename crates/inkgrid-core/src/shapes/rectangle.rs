//! Rectangle shape.

use super::{Axis, ShapeId, ShapeTrait};
use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle with a single fill character.
///
/// Bounds are origin-relative canvas coordinates and may be out of range or
/// inverted; the canvas clips them to its grid when painting. End bounds act
/// as exclusive loop limits during painting but are not origin-shifted, so
/// with the default origin `(1, 1)` a rectangle spanning `start..=end`
/// columns has `end_x` equal to its last column (see `Canvas::add_shape`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Leftmost column, inclusive.
    pub start_x: i64,
    /// Rightmost extent, exclusive after the origin shift.
    pub end_x: i64,
    /// Topmost row, inclusive.
    pub start_y: i64,
    /// Bottommost extent, exclusive after the origin shift.
    pub end_y: i64,
    fill: char,
}

impl Rectangle {
    /// Default fill character for new rectangles.
    pub const DEFAULT_FILL: char = '*';

    /// Create a rectangle with the default fill.
    pub fn new(start_x: i64, end_x: i64, start_y: i64, end_y: i64) -> Self {
        Self::with_fill(start_x, end_x, start_y, end_y, Self::DEFAULT_FILL)
    }

    /// Create a rectangle with the given fill character.
    pub fn with_fill(start_x: i64, end_x: i64, start_y: i64, end_y: i64, fill: char) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_x,
            end_x,
            start_y,
            end_y,
            fill,
        }
    }

    /// Create a rectangle from raw string bounds.
    ///
    /// Each bound is coerced to an integer; anything that is not a decimal
    /// integer fails with [`GridError::InvalidBounds`].
    pub fn parse(
        start_x: &str,
        end_x: &str,
        start_y: &str,
        end_y: &str,
        fill: char,
    ) -> GridResult<Self> {
        Ok(Self::with_fill(
            parse_bound(start_x)?,
            parse_bound(end_x)?,
            parse_bound(start_y)?,
            parse_bound(end_y)?,
            fill,
        ))
    }

    /// Shift both bounds on one axis.
    ///
    /// Called only through `Canvas::translate_shape`, which repaints.
    pub(crate) fn translate(&mut self, axis: Axis, delta: i64) {
        match axis {
            Axis::X => {
                self.start_x += delta;
                self.end_x += delta;
            }
            Axis::Y => {
                self.start_y += delta;
                self.end_y += delta;
            }
        }
    }
}

fn parse_bound(raw: &str) -> GridResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| GridError::InvalidBounds(raw.to_string()))
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn coords(&self) -> (i64, i64, i64, i64) {
        (self.start_x, self.end_x, self.start_y, self.end_y)
    }

    fn fill(&self) -> char {
        self.fill
    }

    fn change_fill(&mut self, fill: char) {
        self.fill = fill;
    }
}
