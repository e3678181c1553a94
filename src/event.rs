//! Event domain record, draft, patch, and field validation.

use serde::{Deserialize, Serialize};

use crate::types::{Category, EventId, MAX_INCLUSIONS};

/// Rejection of offered field values. Always recoverable by re-entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The inclusion list was empty.
    #[error("at least one inclusion must be selected")]
    NoInclusions,
    /// The inclusion list was longer than [`MAX_INCLUSIONS`].
    #[error("at most {max} inclusions may be selected, got {got}")]
    TooManyInclusions {
        /// Allowed maximum.
        max: usize,
        /// Offered count.
        got: usize,
    },
    /// The same inclusion name appeared twice.
    #[error("inclusion `{0}` is listed more than once")]
    DuplicateInclusion(String),
}

/// Fully materialized, authoritative event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Stable event identifier.
    pub id: EventId,
    /// Reservation name.
    pub title: String,
    /// Booking date, `YYYY-MM-DD`. Unique across the store.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Venue or address.
    pub location: String,
    /// Event kind.
    pub category: Category,
    /// Selected inclusions in the order they were added.
    pub inclusions: Vec<String>,
    /// Free text, may be empty.
    pub description: String,
}

/// Insert payload used to create a new [`EventRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Reservation name.
    pub title: String,
    /// Booking date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Venue or address.
    pub location: String,
    /// Event kind.
    pub category: Category,
    /// Selected inclusions in add order.
    pub inclusions: Vec<String>,
    /// Free text, may be empty.
    pub description: String,
}

impl EventDraft {
    /// Checks required fields and the inclusion list.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("location", &self.location)?;
        validate_inclusions(&self.inclusions)
    }

    pub(crate) fn into_record(self, id: EventId) -> EventRecord {
        EventRecord {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            category: self.category,
            inclusions: self.inclusions,
            description: self.description,
        }
    }
}

/// Sparse patch where each `Some` field overwrites the record value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventPatch {
    /// Optional replacement for the title.
    pub title: Option<String>,
    /// Optional replacement for the date.
    pub date: Option<String>,
    /// Optional replacement for the time.
    pub time: Option<String>,
    /// Optional replacement for the location.
    pub location: Option<String>,
    /// Optional replacement for the category.
    pub category: Option<Category>,
    /// Optional replacement for the whole inclusion list.
    pub inclusions: Option<Vec<String>>,
    /// Optional replacement for the description. `Some("")` clears it.
    pub description: Option<String>,
}

impl EventPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks every field present in the patch.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(v) = &self.title {
            require("title", v)?;
        }
        if let Some(v) = &self.date {
            require("date", v)?;
        }
        if let Some(v) = &self.time {
            require("time", v)?;
        }
        if let Some(v) = &self.location {
            require("location", v)?;
        }
        if let Some(v) = &self.inclusions {
            validate_inclusions(v)?;
        }
        Ok(())
    }

    /// Applies this patch in place to `rec`.
    pub fn apply_to(&self, rec: &mut EventRecord) {
        if let Some(v) = &self.title {
            rec.title = v.clone();
        }
        if let Some(v) = &self.date {
            rec.date = v.clone();
        }
        if let Some(v) = &self.time {
            rec.time = v.clone();
        }
        if let Some(v) = &self.location {
            rec.location = v.clone();
        }
        if let Some(v) = self.category {
            rec.category = v;
        }
        if let Some(v) = &self.inclusions {
            rec.inclusions = v.clone();
        }
        if let Some(v) = &self.description {
            rec.description = v.clone();
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Checks the 1..=[`MAX_INCLUSIONS`] bound and distinctness.
pub fn validate_inclusions(items: &[String]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::NoInclusions);
    }
    if items.len() > MAX_INCLUSIONS {
        return Err(ValidationError::TooManyInclusions {
            max: MAX_INCLUSIONS,
            got: items.len(),
        });
    }
    for (i, item) in items.iter().enumerate() {
        if items[..i].contains(item) {
            return Err(ValidationError::DuplicateInclusion(item.clone()));
        }
    }
    Ok(())
}
