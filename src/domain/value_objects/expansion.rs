//! Expansion value object - single-open slot for one menu level

use serde::Serialize;

/// Which entry of a menu level is open. At most one entry per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum Expansion {
    #[default]
    Closed,
    OpenAt(usize),
}

impl Expansion {
    pub fn from_index(index: Option<usize>) -> Self {
        match index {
            Some(i) => Expansion::OpenAt(i),
            None => Expansion::Closed,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Expansion::OpenAt(i) => Some(*i),
            Expansion::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Expansion::OpenAt(_))
    }

    pub fn is_open_at(&self, index: usize) -> bool {
        *self == Expansion::OpenAt(index)
    }

    /// Result of a user toggle on `index`: closes it if open, otherwise opens
    /// it in place of whatever was open.
    pub fn toggled(self, index: usize) -> Self {
        if self.is_open_at(index) {
            Expansion::Closed
        } else {
            Expansion::OpenAt(index)
        }
    }
}

impl std::fmt::Display for Expansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expansion::Closed => write!(f, "closed"),
            Expansion::OpenAt(i) => write!(f, "open at {}", i),
        }
    }
}
