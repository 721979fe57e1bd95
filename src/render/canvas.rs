use crate::game::{Cell, ColorTag, RenderEvent};

/// Retained board image, updated only through [`RenderEvent`]s.
///
/// The engine sends incremental changes each tick, so whatever was painted
/// earlier stays on the canvas until erased or cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    cells: Vec<ColorTag>,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![ColorTag::Background; width.max(0) as usize * height.max(0) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, cell: Cell) -> ColorTag {
        self.index(cell)
            .map(|i| self.cells[i])
            .unwrap_or(ColorTag::Background)
    }

    pub fn apply(&mut self, events: &[RenderEvent]) {
        for event in events {
            match *event {
                RenderEvent::Clear => self.cells.fill(ColorTag::Background),
                RenderEvent::Draw { cell, tag } => self.paint(cell, tag),
                RenderEvent::Erase { cell } => self.paint(cell, ColorTag::Background),
            }
        }
    }

    fn paint(&mut self, cell: Cell, tag: ColorTag) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = tag;
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.x >= self.width || cell.y < 0 || cell.y >= self.height {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, Direction, GameConfig, GameEngine};

    #[test]
    fn test_apply_events() {
        let mut canvas = Canvas::new(4, 3);
        canvas.apply(&[
            RenderEvent::draw(Cell::new(1, 1), ColorTag::Head),
            RenderEvent::draw(Cell::new(3, 2), ColorTag::Food),
        ]);
        assert_eq!(canvas.get(Cell::new(1, 1)), ColorTag::Head);
        assert_eq!(canvas.get(Cell::new(3, 2)), ColorTag::Food);

        canvas.apply(&[RenderEvent::erase(Cell::new(1, 1))]);
        assert_eq!(canvas.get(Cell::new(1, 1)), ColorTag::Background);

        canvas.apply(&[RenderEvent::Clear]);
        assert_eq!(canvas.get(Cell::new(3, 2)), ColorTag::Background);
    }

    #[test]
    fn test_largest_valid_grid() {
        let side = crate::game::MAX_GRID_SIDE;
        let mut canvas = Canvas::new(side, side);
        let corner = Cell::new(side - 1, side - 1);
        canvas.apply(&[RenderEvent::draw(corner, ColorTag::Food)]);
        assert_eq!(canvas.get(corner), ColorTag::Food);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.apply(&[RenderEvent::draw(Cell::new(5, 5), ColorTag::Head)]);
        assert_eq!(canvas, Canvas::new(2, 2));
        assert_eq!(canvas.get(Cell::new(-1, 0)), ColorTag::Background);
    }

    #[test]
    fn test_incremental_events_match_full_frame() {
        let config = GameConfig::small();
        let mut engine = GameEngine::seeded(config.clone(), 5).unwrap();
        let mut canvas = Canvas::new(config.grid_width, config.grid_height);
        canvas.apply(&engine.frame());

        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        for step in 0..400 {
            let action = if step % 7 == 0 {
                Action::Move(turns[(step / 7) % turns.len()])
            } else {
                Action::Continue
            };
            let outcome = engine.tick(action);
            canvas.apply(&outcome.events);

            let mut expected = Canvas::new(config.grid_width, config.grid_height);
            expected.apply(&engine.frame());
            assert_eq!(canvas, expected, "canvas drifted at step {step}");
        }
    }
}
