//! Shared primitive IDs and the event category enum.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Monotonic event identifier. `0` is never assigned.
pub type EventId = u64;

/// Sentinel accepted by [`crate::core::store::EventStore::is_date_taken`]
/// meaning "exclude nothing".
pub const NO_EXCLUSION: EventId = 0;

/// Upper bound on inclusions attached to one event.
pub const MAX_INCLUSIONS: usize = 10;

/// Kind of event being booked. Selects the inclusion catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Birthday celebration.
    Birthday,
    /// Wedding or relationship anniversary.
    Anniversary,
    /// Funeral and interment service.
    Burial,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Category; 3] = [Category::Birthday, Category::Anniversary, Category::Burial];

    /// Display name, also the exact text accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Birthday => "Birthday",
            Category::Anniversary => "Anniversary",
            Category::Burial => "Burial",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category name does not match exactly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`; expected Birthday|Anniversary|Burial")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
