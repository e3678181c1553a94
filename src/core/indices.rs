use hashbrown::HashMap;

use crate::types::EventId;

/// Booked date to the event holding it. One entry per date.
pub type DateIndex = HashMap<String, EventId>;
