//! Pure mapping from an authoritative grid to what the player sees.

use crate::config::BOARD_SIZE;
use crate::domain::{CellState, Grid};

/// Whose grid is being drawn. Opponent grids hide ships and accept targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSide {
    Own,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVisual {
    Water,
    Ship,
    Hit,
    Miss,
}

impl CellVisual {
    pub fn glyph(self) -> char {
        match self {
            CellVisual::Water => '.',
            CellVisual::Ship => 'S',
            CellVisual::Hit => 'X',
            CellVisual::Miss => 'o',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub visual: CellVisual,
    /// Set only on opponent cells still shown as water.
    pub targetable: bool,
}

pub type BoardView = [[CellView; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Render a grid. Idempotent and side-effect free: the same grid always maps
/// to the same view.
///
/// The engine is not trusted on the opponent grid. A `Ship` cell there is
/// treated as water for both the visual and the targetable flag; leaving it
/// visible or merely unclickable would leak the placement either way.
pub fn render_grid(grid: &Grid, side: BoardSide) -> BoardView {
    std::array::from_fn(|row| std::array::from_fn(|col| render_cell(grid[row][col], side)))
}

fn render_cell(cell: CellState, side: BoardSide) -> CellView {
    let visual = match (cell, side) {
        (CellState::Ship, BoardSide::Opponent) => CellVisual::Water,
        (CellState::Ship, BoardSide::Own) => CellVisual::Ship,
        (CellState::Water, _) => CellVisual::Water,
        (CellState::Hit, _) => CellVisual::Hit,
        (CellState::Miss, _) => CellVisual::Miss,
    };
    CellView {
        visual,
        targetable: side == BoardSide::Opponent && visual == CellVisual::Water,
    }
}
