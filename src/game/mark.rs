use std::fmt;

/// Occupant of a board cell: empty, or one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Mark {
    #[default]
    #[serde(rename = " ")]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get the other side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_side(self) -> bool {
        self != Mark::Empty
    }

    /// Single-character symbol used by the textual board view.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mark::Empty => "empty",
            Mark::X => "X",
            Mark::O => "O",
        };
        f.write_str(label)
    }
}
