use serde::{Deserialize, Serialize};

use crate::*;

/// The fixed cell every fill originates from.
pub const ANCHOR: Coord2 = (0, 0);

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> OutOfTurns
///
/// Both terminal states only leave through `restart`/`reconfigure`, which
/// rebuild the session from scratch.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    OutOfTurns,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::OutOfTurns)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Result of applying a single move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Flooded,
    Won,
    OutOfTurns,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Flooded => true,
            Won => true,
            OutOfTurns => true,
        }
    }
}

/// One game from a fresh board to a terminal outcome, plus the variant
/// switching that replaces it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    turn: TurnCount,
    max_turns: TurnCount,
    outcome: Outcome,
}

impl GameSession {
    /// Starts a session on a freshly generated board.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let board = RandomBoardGenerator::new(seed).generate(&config);
        Self::from_parts(config, board)
    }

    /// Starts a session over a caller-supplied board. The board must match
    /// `config.grid_size()` and only use colors from the active palette.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self> {
        if board.size() != config.grid_size() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::from_parts(config, board))
    }

    fn from_parts(config: GameConfig, board: Board) -> Self {
        let mut session = Self {
            config,
            board,
            turn: 0,
            max_turns: config.max_turns(),
            outcome: Outcome::InProgress,
        };
        // a board can be born uniform, or born with no turn budget at all
        session.recompute_outcome();
        session
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid_size(&self) -> Coord {
        self.board.size()
    }

    pub fn color_at(&self, coords: Coord2) -> Result<Color> {
        self.board.color_at(coords)
    }

    pub const fn turn(&self) -> TurnCount {
        self.turn
    }

    pub const fn max_turns(&self) -> TurnCount {
        self.max_turns
    }

    /// How many color-changing moves remain.
    pub const fn turns_left(&self) -> TurnCount {
        self.max_turns - self.turn
    }

    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Applies one click at `coords`.
    ///
    /// The clicked cell only supplies the replacement color; the fill itself
    /// always starts at [`ANCHOR`]. Clicks outside the grid, clicks on the
    /// anchor region's own color, and clicks after the game ended are all
    /// tolerated no-ops.
    pub fn apply_move(&mut self, coords: Coord2) -> MoveOutcome {
        if self.outcome.is_finished() {
            return MoveOutcome::NoChange;
        }
        let Ok(coords) = self.board.validate_coords(coords) else {
            return MoveOutcome::NoChange;
        };

        let anchor = self.board[ANCHOR];
        let target = self.board[coords];
        if anchor == target {
            return MoveOutcome::NoChange;
        }

        self.turn += 1;
        self.board.flood_fill(ANCHOR, anchor, target);
        log::debug!(
            "turn {}/{}: flooded {:?} -> {:?}",
            self.turn,
            self.max_turns,
            anchor,
            target
        );

        self.recompute_outcome();
        match self.outcome {
            Outcome::InProgress => MoveOutcome::Flooded,
            Outcome::Won => MoveOutcome::Won,
            Outcome::OutOfTurns => MoveOutcome::OutOfTurns,
        }
    }

    /// Abandons the current board and starts over with the same variant.
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(self.config, seed);
    }

    /// Switches variant; allowed at any point, finished or not.
    pub fn reconfigure(&mut self, config: GameConfig, seed: u64) {
        *self = Self::new(config, seed);
    }

    fn recompute_outcome(&mut self) {
        // a move that wins on the last turn is still a win
        self.outcome = if self.board.is_uniform() {
            Outcome::Won
        } else if self.turn >= self.max_turns {
            Outcome::OutOfTurns
        } else {
            Outcome::InProgress
        };
        if self.outcome.is_finished() {
            log::debug!("game over after {} turns: {:?}", self.turn, self.outcome);
        }
    }
}
