//! Grid-placed groups of bodies.
//!
//! Cells are laid out left to right, top to bottom starting at `(x, y)`. Each
//! body the factory returns is shifted by half its bounds so `(x, y)` is the
//! top-left corner of the arrangement, not the center of the first body.

use serde::Serialize;

use crate::rigid_body::{BodyDescriptor, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CompositeId(pub u32);

/// A group of bodies, laid out before it is added to the world
#[derive(Clone, Debug, Default)]
pub struct Composite {
    pub bodies: Vec<BodyDescriptor>,
}

/// Where the factory is asked to place the next body
#[derive(Clone, Copy, Debug)]
pub struct StackCell {
    pub x: f32,
    pub y: f32,
    pub column: u32,
    pub row: u32,
    /// Bodies placed so far
    pub index: usize,
}

impl Composite {
    /// A full `columns x rows` grid.
    pub fn stack<F>(x: f32, y: f32, columns: u32, rows: u32, column_gap: f32, row_gap: f32, mut make: F) -> Self
    where
        F: FnMut(StackCell) -> BodyDescriptor,
    {
        Self::layout(x, y, columns, rows, column_gap, row_gap, |cell, _| Some(make(cell)))
    }

    /// The centered triangle of a `columns x rows` grid, widest row at the bottom.
    pub fn pyramid<F>(x: f32, y: f32, columns: u32, rows: u32, column_gap: f32, row_gap: f32, mut make: F) -> Self
    where
        F: FnMut(StackCell) -> BodyDescriptor,
    {
        let actual_rows = rows.min((columns + 1) / 2);

        Self::layout(x, y, columns, rows, column_gap, row_gap, |cell, placed| {
            if cell.row > actual_rows {
                return None;
            }
            let row = actual_rows - cell.row;
            let start = row as i64;
            let end = columns as i64 - 1 - row as i64;
            let column = cell.column as i64;
            if column < start || column > end {
                return None;
            }

            let last_width = placed.last().map(|b| b.bounds().width()).unwrap_or(0.0);
            if cell.index == 1 {
                // Re-center the apex once its width is known.
                let shift = if columns % 2 == 1 { 1.0 } else { -1.0 };
                if let Some(apex) = placed.last_mut() {
                    apex.translate(Vec2::new((cell.column as f32 + shift) * last_width, 0.0));
                }
            }

            let x_offset = if placed.is_empty() { 0.0 } else { cell.column as f32 * last_width };
            Some(make(StackCell {
                x: x + x_offset + cell.column as f32 * column_gap,
                row,
                ..cell
            }))
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn layout<F>(x: f32, y: f32, columns: u32, rows: u32, column_gap: f32, row_gap: f32, mut make: F) -> Self
    where
        F: FnMut(StackCell, &mut Vec<BodyDescriptor>) -> Option<BodyDescriptor>,
    {
        let mut composite = Self::default();
        let mut current_y = y;

        for row in 0..rows {
            let mut current_x = x;
            let mut max_height = 0.0f32;

            for column in 0..columns {
                let cell = StackCell {
                    x: current_x,
                    y: current_y,
                    column,
                    row,
                    index: composite.bodies.len(),
                };
                match make(cell, &mut composite.bodies) {
                    Some(mut body) => {
                        let bounds = body.bounds();
                        max_height = max_height.max(bounds.height());
                        body.translate(Vec2::new(bounds.width() * 0.5, bounds.height() * 0.5));
                        current_x = body.bounds().max.x + column_gap;
                        composite.bodies.push(body);
                    }
                    None => current_x += column_gap,
                }
            }

            current_y += max_height + row_gap;
        }

        composite
    }
}
