use ndarray::Array2;

use super::*;

/// Generation strategy that colors every cell independently and uniformly at
/// random from the active palette.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig) -> Board {
        use rand::prelude::*;

        let palette = config.palette();
        let size = usize::from(config.grid_size());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cells = Array2::from_shape_fn((size, size), |_| {
            palette[rng.random_range(0..palette.len())]
        });
        log::debug!(
            "generated {size}x{size} board with {} colours, seed {}",
            palette.len(),
            self.seed
        );

        Board { cells }
    }
}
