use serde::{Deserialize, Serialize};

/// Cell color drawn from the fixed master palette.
///
/// The active palette of a game is always a prefix of [`Color::MASTER`], so a
/// palette size alone fully describes which colors may appear on a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// All defined colors, in master order.
    pub const MASTER: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Color> {
        if (index as usize) < Self::MASTER.len() {
            Some(Self::MASTER[index as usize])
        } else {
            None
        }
    }

    /// CSS color keyword for this color, for hosts that render to a canvas.
    pub const fn css_name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }
}
