use std::cmp::Ordering;

use hashbrown::HashMap;
use tracing::debug;

use crate::{
    core::indices::DateIndex,
    event::{EventDraft, EventPatch, EventRecord, ValidationError},
    types::EventId,
};

/// Business-rule rejection from [`EventStore`]. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Another event already holds the requested date.
    #[error("an event is already scheduled for {date} (event {holder})")]
    Conflict {
        /// Requested date.
        date: String,
        /// Event currently booked on that date.
        holder: EventId,
    },
    /// No event has this ID.
    #[error("event with ID {0} not found")]
    NotFound(EventId),
    /// Offered field values were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Sole owner of all event records, the date index, and the ID counter.
#[derive(Debug)]
pub struct EventStore {
    records: HashMap<EventId, EventRecord>,
    order: Vec<EventId>,
    by_date: DateIndex,
    next_id: EventId,
}

impl EventStore {
    /// Creates an empty store whose first assigned ID is `1`.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            by_date: DateIndex::new(),
            next_id: 1,
        }
    }

    /// Books a new event under the next sequential ID.
    ///
    /// The counter only advances when the event is inserted, so rejected
    /// drafts do not consume IDs.
    pub fn create(&mut self, draft: EventDraft) -> Result<EventRecord, StoreError> {
        draft.validate()?;
        if let Some(&holder) = self.by_date.get(&draft.date) {
            debug!(date = %draft.date, holder, "create rejected: date taken");
            return Err(StoreError::Conflict {
                date: draft.date,
                holder,
            });
        }

        let id = self.next_id;
        self.next_id += 1;

        let rec = draft.into_record(id);
        self.by_date.insert(rec.date.clone(), id);
        self.order.push(id);
        self.records.insert(id, rec.clone());

        debug!(id, date = %rec.date, category = %rec.category, "event created");
        Ok(rec)
    }

    /// Applies `patch` to the event with `id`.
    ///
    /// Inclusions are stored exactly as given, even when the patch also
    /// changes the category. Reconciling them is the caller's job.
    pub fn update(&mut self, id: EventId, patch: EventPatch) -> Result<EventRecord, StoreError> {
        if !self.records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        patch.validate()?;

        if let Some(date) = &patch.date {
            if let Some(&holder) = self.by_date.get(date) {
                if holder != id {
                    debug!(id, date = %date, holder, "update rejected: date taken");
                    return Err(StoreError::Conflict {
                        date: date.clone(),
                        holder,
                    });
                }
            }
        }

        let rec = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let old_date = rec.date.clone();
        patch.apply_to(rec);

        if rec.date != old_date {
            self.by_date.remove(&old_date);
            self.by_date.insert(rec.date.clone(), id);
        }

        debug!(id, date = %rec.date, "event updated");
        Ok(rec.clone())
    }

    /// Removes the event permanently. Its ID is never handed out again.
    pub fn delete(&mut self, id: EventId) -> Result<(), StoreError> {
        let rec = self.records.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.by_date.remove(&rec.date);
        if let Some(pos) = self.order.iter().position(|x| *x == id) {
            self.order.remove(pos);
        }
        debug!(id, date = %rec.date, "event deleted");
        Ok(())
    }

    /// Direct lookup; `None` when absent.
    pub fn find(&self, id: EventId) -> Option<&EventRecord> {
        self.records.get(&id)
    }

    /// Owned copy of [`Self::find`].
    pub fn get_cloned(&self, id: EventId) -> Option<EventRecord> {
        self.find(id).cloned()
    }

    /// All events ordered by `(date, time)` using plain string comparison.
    ///
    /// The sort is stable over creation order, so exact ties keep the order
    /// in which they were booked.
    pub fn list_sorted(&self) -> Vec<&EventRecord> {
        let mut out: Vec<&EventRecord> = self
            .order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect();
        out.sort_by(|a, b| chronological(a, b));
        out
    }

    /// Owned copy of [`Self::list_sorted`].
    pub fn list_sorted_cloned(&self) -> Vec<EventRecord> {
        self.list_sorted().into_iter().cloned().collect()
    }

    /// True when an event other than `exclude_id` is booked on `date`.
    ///
    /// Pass [`crate::types::NO_EXCLUSION`] to check against every event.
    pub fn is_date_taken(&self, date: &str, exclude_id: EventId) -> bool {
        self.by_date
            .get(date)
            .is_some_and(|holder| *holder != exclude_id)
    }

    /// IDs in creation order.
    pub fn ordered_ids(&self) -> &[EventId] {
        &self.order
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no events are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// ID the next successful [`Self::create`] will assign.
    pub fn next_id(&self) -> EventId {
        self.next_id
    }
}

/// Display order: `date`, then `time`, both as plain strings.
pub fn chronological(a: &EventRecord, b: &EventRecord) -> Ordering {
    a.date
        .as_str()
        .cmp(b.date.as_str())
        .then_with(|| a.time.as_str().cmp(b.time.as_str()))
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
