use serde::Serialize;

/// Direction of an attendance punch, inferred from its location label.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Entry,
    Exit,
    Unknown,
}

impl Direction {
    /// Classify a location label such as "Office In" or "Gate 2 Out".
    ///
    /// Matching is a case-sensitive substring test. "In" is checked before
    /// "Out", so a label carrying both tokens is an `Entry`.
    pub fn classify(label: &str) -> Self {
        if label.contains("In") {
            Direction::Entry
        } else if label.contains("Out") {
            Direction::Exit
        } else {
            Direction::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Entry => "in",
            Direction::Exit => "out",
            Direction::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Direction::Unknown)
    }
}
