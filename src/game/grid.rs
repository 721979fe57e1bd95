use super::action::Direction;

/// A cell on the game grid, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by one unit in a direction, without wrapping
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Top-left pixel of this cell for a given cell size
    pub fn to_pixels(&self, cell_size: u32) -> (i32, i32) {
        let size = cell_size as i32;
        (self.x * size, self.y * size)
    }
}

/// Reduce both coordinates into `[0, width) x [0, height)`.
///
/// Exiting one edge re-enters from the opposite edge. `width` and `height`
/// must be positive.
pub fn wrap(cell: Cell, width: i32, height: i32) -> Cell {
    Cell {
        x: cell.x.rem_euclid(width),
        y: cell.y.rem_euclid(height),
    }
}

/// Extents of the toroidal playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn wrap(&self, cell: Cell) -> Cell {
        wrap(cell, self.width, self.height)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}
