//! Canvas grid and shape bookkeeping.

use crate::error::{GridError, GridResult};
use crate::shapes::{Axis, Shape, ShapeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default background character.
const DEFAULT_BACKGROUND: char = ' ';

/// A fixed-size character grid plus the shapes painted onto it.
///
/// Shapes are keyed by [`ShapeId`] with a separate paint order, back to
/// front. `contents` is a cache: it is always derivable from the background
/// fill, the dimensions, the origin, and the shape collection, and is rebuilt
/// in full after every mutation that can change the visible grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    /// Grid height in rows.
    pub height: usize,
    /// Grid width in columns.
    pub width: usize,
    /// Background character for unpainted cells.
    pub fill_char: char,
    /// Coordinate of the top-left cell; values increase right and down.
    pub origin: (i64, i64),
    /// All shapes on the canvas, keyed by id.
    shapes: HashMap<ShapeId, Shape>,
    /// Paint order, back to front.
    z_order: Vec<ShapeId>,
    /// Rendered grid rows. Rebuilt by `repaint`, never serialized.
    #[serde(skip)]
    contents: Vec<Vec<char>>,
}

impl Canvas {
    /// Create a canvas filled with blanks.
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_fill(height, width, DEFAULT_BACKGROUND)
    }

    /// Create a canvas with the given background character.
    pub fn with_fill(height: usize, width: usize, fill_char: char) -> Self {
        let mut canvas = Self {
            height,
            width,
            fill_char,
            origin: (1, 1),
            shapes: HashMap::new(),
            z_order: Vec::new(),
            contents: Vec::new(),
        };
        canvas.repaint();
        canvas
    }

    /// Move the origin away from the default `(1, 1)` and repaint.
    pub fn with_origin(mut self, origin: (i64, i64)) -> Self {
        self.origin = origin;
        self.repaint();
        self
    }

    /// Add a shape to the canvas and paint its visible footprint.
    ///
    /// The shape is tracked even when it lies fully outside the grid; a
    /// later translation can bring it into view. Re-adding an id that is
    /// already present moves that shape to the front of the paint order.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        log::debug!("add shape {id} at {:?}", shape.coords());
        self.z_order.retain(|&existing| existing != id);
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        self.paint(id);
        id
    }

    /// Remove every shape and repaint to all-background.
    pub fn clear(&mut self) {
        log::debug!("clear canvas ({} shapes dropped)", self.shapes.len());
        self.shapes.clear();
        self.z_order.clear();
        self.repaint();
    }

    /// Move a shape along one axis and repaint the whole grid.
    ///
    /// The full repaint is what erases the shape's old footprint; cells it
    /// uncovered fall back to whatever lies beneath them. Fails with
    /// [`GridError::ShapeNotFound`] before any mutation if the id is
    /// unknown.
    pub fn translate_shape(&mut self, id: ShapeId, axis: Axis, delta: i64) -> GridResult<()> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(GridError::ShapeNotFound(id))?;
        shape.translate(axis, delta);
        log::debug!("translate shape {id} by {delta} along {axis}, now at {:?}", shape.coords());
        self.repaint();
        Ok(())
    }

    /// Re-fill a tracked shape and repaint.
    pub fn change_fill(&mut self, id: ShapeId, fill: char) -> GridResult<()> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(GridError::ShapeNotFound(id))?;
        shape.change_fill(fill);
        self.repaint();
        Ok(())
    }

    /// Get a shape by id.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Shapes in paint order, back to front.
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Check if any shapes are tracked.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of tracked shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// One rendered grid row, if the index is in range.
    pub fn row(&self, y: usize) -> Option<&[char]> {
        self.contents.get(y).map(Vec::as_slice)
    }

    /// Render the grid as text, one `'\n'`-terminated line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for row in &self.contents {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    /// Serialize the canvas to JSON. The contents cache is omitted.
    pub fn to_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a canvas from JSON and rebuild the contents cache.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let mut canvas: Self = serde_json::from_str(json)?;
        canvas.repaint();
        Ok(canvas)
    }

    /// Rebuild `contents` from the background fill, then replay every shape
    /// in paint order. Last writer wins per cell.
    fn repaint(&mut self) {
        self.contents = vec![vec![self.fill_char; self.width]; self.height];
        for id in self.z_order.clone() {
            self.paint(id);
        }
    }

    /// Paint one shape's clipped footprint onto the grid, cell by cell.
    fn paint(&mut self, id: ShapeId) {
        let Some(shape) = self.shapes.get(&id) else {
            return;
        };
        let (start_x, end_x, start_y, end_y) = shape.coords();
        let fill = shape.fill();
        let (origin_x, origin_y) = self.origin;

        // Wholly outside the visible area on at least one axis: track only.
        if start_x > self.width as i64
            || start_y > self.height as i64
            || end_x < origin_x
            || end_y < origin_y
        {
            return;
        }

        // Clamp starts up to the origin and ends down to the grid edges,
        // then shift only the starts to zero-based indices. End bounds are
        // exclusive loop limits and stay unshifted: with origin (1, 1) an
        // end equal to the grid width still covers the last column.
        let x_start = start_x.max(origin_x) - origin_x;
        let y_start = start_y.max(origin_y) - origin_y;
        let x_end = end_x.min(self.width as i64);
        let y_end = end_y.min(self.height as i64);

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.contents[y as usize][x as usize] = fill;
            }
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
