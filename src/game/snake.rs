use std::collections::VecDeque;

use super::action::Direction;
use super::draw::{ColorTag, Drawable, RenderEvent};
use super::grid::{Cell, Grid};

/// What happened during one [`Snake::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Head cell after the move, already wrapped
    pub new_head: Cell,
    /// Tail cell trimmed this move; `None` when the snake grew instead
    pub last_vacated: Option<Cell>,
    /// The new head landed on another segment of the post-trim body
    pub self_collided: bool,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    segments: VecDeque<Cell>,
    /// Current direction of movement
    direction: Direction,
    /// Target segment count
    length: usize,
    start: Cell,
    grid: Grid,
}

impl Snake {
    /// A one-cell snake at `start` heading right
    pub fn new(start: Cell, grid: Grid) -> Self {
        Self {
            segments: VecDeque::from([start]),
            direction: Direction::Right,
            length: 1,
            start,
            grid,
        }
    }

    /// Build a snake with an explicit body, head first. `length` is set to the
    /// body size and resets return to the grid centre.
    pub fn with_segments(segments: Vec<Cell>, direction: Direction, grid: Grid) -> Self {
        let start = grid.center();
        let segments = if segments.is_empty() {
            VecDeque::from([start])
        } else {
            VecDeque::from(segments)
        };
        Self {
            length: segments.len(),
            segments,
            direction,
            start,
            grid,
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Target segment count
    pub fn length(&self) -> usize {
        self.length
    }

    /// Current segment count
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Food eaten since the last reset
    pub fn score(&self) -> usize {
        self.length - 1
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Change heading. A 180-degree turn is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Move one cell in the current direction, wrapping at the edges.
    ///
    /// The tail is trimmed before self-collision is evaluated, so a cell
    /// vacated this move never counts as occupied.
    pub fn advance(&mut self) -> MoveOutcome {
        let new_head = self.grid.wrap(self.head().stepped(self.direction));
        self.segments.push_front(new_head);

        let last_vacated = if self.segments.len() > self.length {
            self.segments.pop_back()
        } else {
            None
        };

        let self_collided = self.segments.iter().skip(1).any(|&cell| cell == new_head);

        MoveOutcome {
            new_head,
            last_vacated,
            self_collided,
        }
    }

    /// Lengthen by one. Applies at the next advance's trim.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a one-cell snake on the start cell, heading right
    pub fn reset(&mut self) {
        self.length = 1;
        self.segments.clear();
        self.segments.push_back(self.start);
        self.direction = Direction::Right;
    }
}

impl Drawable for Snake {
    fn render_events(&self) -> Vec<RenderEvent> {
        // Tail first so the head wins on shared cells
        let mut events: Vec<RenderEvent> = self
            .segments
            .iter()
            .skip(1)
            .rev()
            .map(|&cell| RenderEvent::draw(cell, ColorTag::Body))
            .collect();
        events.push(RenderEvent::draw(self.head(), ColorTag::Head));
        events
    }
}
