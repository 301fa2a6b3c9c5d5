use alloc::collections::VecDeque;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of colored cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: Array2<Color>,
}

impl Board {
    /// Builds a board from an explicit cell array, for hosts and tests that
    /// need an exact grid. The array must be square with at least one cell.
    pub fn from_cells(cells: Array2<Color>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows < 1 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn color_at(&self, coords: Coord2) -> Result<Color> {
        self.validate_coords(coords).map(|coords| self[coords])
    }

    /// Read-only view of the grid for rendering.
    pub fn cells(&self) -> &Array2<Color> {
        &self.cells
    }

    /// True when every cell matches the anchor cell at `(0, 0)`.
    pub fn is_uniform(&self) -> bool {
        let anchor = self.cells[[0, 0]];
        self.cells.iter().all(|&color| color == anchor)
    }

    /// Recolors the maximal 4-connected region of `target` cells reachable
    /// from `start` to `replacement`.
    ///
    /// Runs on an explicit work list instead of recursing, so call depth does
    /// not grow with region size; recoloring a cell in place doubles as the
    /// visited marker.
    pub fn flood_fill(&mut self, start: Coord2, target: Color, replacement: Color) {
        if target == replacement {
            return;
        }
        let Ok(start) = self.validate_coords(start) else {
            return;
        };
        if self[start] != target {
            return;
        }

        let mut to_visit = VecDeque::from([start]);
        while let Some(coords) = to_visit.pop_front() {
            // duplicates in the queue resolve here once the cell is recolored
            if self[coords] != target {
                continue;
            }
            self[coords] = replacement;
            to_visit.extend(
                self.cells
                    .iter_neighbors(coords)
                    .filter(|&pos| self[pos] == target),
            );
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Color;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use crate::Color::*;

    fn board(rows: &[&[Color]]) -> Board {
        let flat: Vec<Color> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let cells = Array2::from_shape_vec((rows.len(), rows.len()), flat).unwrap();
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn same_color_fill_changes_nothing() {
        let mut b = board(&[&[Red, Green], &[Green, Red]]);
        let before = b.clone();

        b.flood_fill((0, 0), Red, Red);

        assert_eq!(b, before);
    }

    #[test]
    fn recolors_only_the_connected_region() {
        let mut b = board(&[
            &[Red, Red, Blue],
            &[Blue, Red, Blue],
            &[Red, Blue, Red],
        ]);

        b.flood_fill((0, 0), Red, Green);

        let expected = board(&[
            &[Green, Green, Blue],
            &[Blue, Green, Blue],
            &[Red, Blue, Red],
        ]);
        assert_eq!(b, expected);
    }

    #[test]
    fn fill_with_wrong_target_is_a_noop() {
        let mut b = board(&[&[Red, Green], &[Green, Red]]);
        let before = b.clone();

        b.flood_fill((0, 0), Blue, Green);

        assert_eq!(b, before);
    }

    #[test]
    fn fill_from_outside_the_grid_is_a_noop() {
        let mut b = board(&[&[Red, Green], &[Green, Red]]);
        let before = b.clone();

        b.flood_fill((9, 9), Red, Green);

        assert_eq!(b, before);
    }

    #[test]
    fn uniformity_tracks_the_anchor_color() {
        assert!(board(&[&[Blue, Blue], &[Blue, Blue]]).is_uniform());
        assert!(!board(&[&[Blue, Blue], &[Blue, Red]]).is_uniform());
        assert!(board(&[&[Purple]]).is_uniform());
    }

    #[test]
    fn color_at_rejects_out_of_bounds() {
        let b = board(&[&[Red, Green], &[Green, Red]]);

        assert_eq!(b.color_at((1, 1)), Ok(Red));
        assert_eq!(b.color_at((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(b.color_at((0, 2)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn from_cells_rejects_non_square_grids() {
        let cells = Array2::from_elem((2, 3), Red);

        assert_eq!(Board::from_cells(cells), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn filling_a_full_board_touches_every_cell() {
        let mut b = board(&[&[Red, Red], &[Red, Red]]);

        b.flood_fill((0, 0), Red, Orange);

        assert!(b.cells().iter().all(|&color| color == Orange));
    }
}
