//! Sample bookings shown on first launch.

use crate::{
    core::store::{EventStore, StoreError},
    event::EventDraft,
    types::{Category, EventId},
};

/// Drafts for one event per category, on distinct dates.
pub fn sample_drafts() -> Vec<EventDraft> {
    vec![
        EventDraft {
            title: "Alice's 30th Party".to_string(),
            date: "2024-11-20".to_string(),
            time: "19:00".to_string(),
            location: "The Loft Venue".to_string(),
            category: Category::Birthday,
            inclusions: vec!["BUFFET".to_string(), "CUSTOM CAKE".to_string()],
            description: "Celebration for Alice's 30th birthday.".to_string(),
        },
        EventDraft {
            title: "25th Wedding Milestone".to_string(),
            date: "2025-05-15".to_string(),
            time: "18:00".to_string(),
            location: "Grand Ballroom".to_string(),
            category: Category::Anniversary,
            inclusions: vec!["BALLROOM".to_string(), "PHOTOGRAPHER".to_string()],
            description: "Celebrating the couple's silver wedding anniversary.".to_string(),
        },
        EventDraft {
            title: "John Doe Service".to_string(),
            date: "2024-12-24".to_string(),
            time: "10:30".to_string(),
            location: "Pine Hill Chapel".to_string(),
            category: Category::Burial,
            inclusions: vec!["CASKET SPRAY".to_string(), "HEARSE".to_string()],
            description: "Memorial service for the late John Doe.".to_string(),
        },
    ]
}

/// Books every sample draft through [`EventStore::create`].
pub fn seed_sample_events(store: &mut EventStore) -> Result<Vec<EventId>, StoreError> {
    sample_drafts()
        .into_iter()
        .map(|draft| store.create(draft).map(|rec| rec.id))
        .collect()
}
