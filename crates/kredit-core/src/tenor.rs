//! Tenor classes.
//!
//! Repayment duration changes risk exposure, so each class carries its
//! own independent ceiling in a customer's limit record.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tenor {
    One,
    Two,
    Three,
    Four,
}

impl Tenor {
    pub const ALL: [Tenor; 4] = [Tenor::One, Tenor::Two, Tenor::Three, Tenor::Four];

    /// Map a declared tenor class (1..=4) to a [`Tenor`].
    ///
    /// Any other value has no threshold and returns `None`.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Tenor::One),
            2 => Some(Tenor::Two),
            3 => Some(Tenor::Three),
            4 => Some(Tenor::Four),
            _ => None,
        }
    }

    pub fn class(self) -> i64 {
        match self {
            Tenor::One => 1,
            Tenor::Two => 2,
            Tenor::Three => 3,
            Tenor::Four => 4,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tenor {}", self.class())
    }
}
