#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use color::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod color;
mod error;
mod generator;
mod session;
mod types;

/// Variant configuration: board dimension and how much of the master palette
/// is in play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    grid_size: Coord,
    palette_size: u8,
}

impl GameConfig {
    pub const fn new_unchecked(grid_size: Coord, palette_size: u8) -> Self {
        Self {
            grid_size,
            palette_size,
        }
    }

    pub fn new(grid_size: Coord, palette_size: u8) -> Result<Self> {
        if grid_size < 1 || palette_size < 1 || palette_size as usize > Color::MASTER.len() {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(grid_size, palette_size))
    }

    /// 8x8 reference variant.
    pub const fn small() -> Self {
        Self::new_unchecked(8, 6)
    }

    /// 16x16 reference variant, the default.
    pub const fn classic() -> Self {
        Self::new_unchecked(16, 6)
    }

    /// 24x24 reference variant.
    pub const fn large() -> Self {
        Self::new_unchecked(24, 6)
    }

    /// Same variant with a different board dimension.
    pub fn with_grid_size(self, grid_size: Coord) -> Result<Self> {
        Self::new(grid_size, self.palette_size)
    }

    /// Same variant with a different palette size.
    pub fn with_palette_size(self, palette_size: u8) -> Result<Self> {
        Self::new(self.grid_size, palette_size)
    }

    pub const fn grid_size(&self) -> Coord {
        self.grid_size
    }

    pub const fn palette_size(&self) -> u8 {
        self.palette_size
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }

    /// Turn budget for this variant: `grid_size * 2 * palette_size / 6`,
    /// rounded down. A 1x1 or single-color board can make this zero.
    pub const fn max_turns(&self) -> TurnCount {
        self.grid_size as TurnCount * 2 * self.palette_size as TurnCount / 6
    }

    /// Active palette: leading slice of the master color list.
    pub fn palette(&self) -> &'static [Color] {
        let master: &'static [Color] = &Color::MASTER;
        &master[..self.palette_size as usize]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
