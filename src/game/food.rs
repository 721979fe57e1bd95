use std::collections::HashSet;

use rand::Rng;

use super::draw::{ColorTag, Drawable, RenderEvent};
use super::grid::{Cell, Grid};

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn is_at(&self, cell: Cell) -> bool {
        self.position == cell
    }
}

impl Drawable for Food {
    fn render_events(&self) -> Vec<RenderEvent> {
        vec![RenderEvent::draw(self.position, ColorTag::Food)]
    }
}

/// Picks random free cells for food
#[derive(Debug, Clone)]
pub struct FoodPlacer<R> {
    grid: Grid,
    rng: R,
}

impl<R: Rng> FoodPlacer<R> {
    pub fn new(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    /// Draw uniform random cells until one is not in `occupied`.
    ///
    /// # Panics
    ///
    /// Panics if `occupied` covers every cell of the grid. Callers must leave
    /// at least one free cell; the redraw loop would otherwise never end.
    pub fn place<'a, I>(&mut self, occupied: I) -> Cell
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let occupied: HashSet<Cell> = occupied
            .into_iter()
            .copied()
            .filter(|&cell| self.grid.contains(cell))
            .collect();
        assert!(
            occupied.len() < self.grid.cell_count(),
            "no free cell left for food on a {}x{} grid",
            self.grid.width,
            self.grid.height
        );

        loop {
            let cell = Cell::new(
                self.rng.gen_range(0..self.grid.width),
                self.rng.gen_range(0..self.grid.height),
            );
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }
}
