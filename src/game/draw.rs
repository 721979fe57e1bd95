//! Render events emitted by the engine
//!
//! The engine never touches a screen. Each tick it describes what changed as a
//! short list of [`RenderEvent`]s keyed by [`Cell`] and a [`ColorTag`]; a
//! renderer maps tags to real colours.

use super::grid::Cell;

/// Colour role of a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Head,
    Body,
    Food,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    /// Wipe the whole board to background
    Clear,
    /// Paint a cell
    Draw { cell: Cell, tag: ColorTag },
    /// Paint a cell back to background
    Erase { cell: Cell },
}

impl RenderEvent {
    pub fn draw(cell: Cell, tag: ColorTag) -> Self {
        RenderEvent::Draw { cell, tag }
    }

    pub fn erase(cell: Cell) -> Self {
        RenderEvent::Erase { cell }
    }
}

/// Anything that can describe itself as a full set of draw events
pub trait Drawable {
    fn render_events(&self) -> Vec<RenderEvent>;
}
