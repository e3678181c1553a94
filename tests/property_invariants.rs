use std::collections::BTreeSet;

use proptest::prelude::*;

use eventbook::{
    core::store::{EventStore, StoreError},
    event::{EventDraft, EventPatch},
    types::{Category, EventId, NO_EXCLUSION},
};

#[derive(Debug, Clone)]
enum Action {
    Create { day: u8, hour: u8 },
    MoveDate { target: u8, day: u8 },
    Retime { target: u8, hour: u8 },
    Delete { target: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..40, 0u8..24).prop_map(|(day, hour)| Action::Create { day, hour }),
        (0u8..24, 0u8..40).prop_map(|(target, day)| Action::MoveDate { target, day }),
        (0u8..24, 0u8..24).prop_map(|(target, hour)| Action::Retime { target, hour }),
        (0u8..24).prop_map(|target| Action::Delete { target }),
    ]
}

fn date_for(day: u8) -> String {
    format!("2025-{:02}-{:02}", u32::from(day) / 28 + 1, u32::from(day) % 28 + 1)
}

fn time_for(hour: u8) -> String {
    format!("{hour:02}:00")
}

fn draft_from(day: u8, hour: u8) -> EventDraft {
    EventDraft {
        title: format!("event on {day}"),
        date: date_for(day),
        time: time_for(hour),
        location: "Hall".to_string(),
        category: Category::Birthday,
        inclusions: vec!["BUFFET".to_string()],
        description: String::new(),
    }
}

fn pick(store: &EventStore, target: u8) -> Option<EventId> {
    let ids = store.ordered_ids();
    if ids.is_empty() {
        return None;
    }
    Some(ids[usize::from(target) % ids.len()])
}

fn full_scan_dates(store: &EventStore) -> Vec<String> {
    store
        .ordered_ids()
        .iter()
        .filter_map(|id| store.find(*id))
        .map(|r| r.date.clone())
        .collect()
}

proptest! {
    #[test]
    fn random_sequences_keep_dates_unique_and_ids_monotonic(actions in prop::collection::vec(action_strategy(), 1..200)) {
        let mut store = EventStore::new();
        let mut issued: Vec<EventId> = Vec::new();

        for action in actions {
            match action {
                Action::Create { day, hour } => {
                    let taken = store.is_date_taken(&date_for(day), NO_EXCLUSION);
                    let before = store.len();
                    match store.create(draft_from(day, hour)) {
                        Ok(rec) => {
                            prop_assert!(!taken);
                            prop_assert!(issued.last().is_none_or(|last| rec.id > *last));
                            issued.push(rec.id);
                            prop_assert_eq!(store.find(rec.id), Some(&rec));
                        }
                        Err(StoreError::Conflict { .. }) => {
                            prop_assert!(taken);
                            prop_assert_eq!(store.len(), before);
                        }
                        Err(other) => prop_assert!(false, "unexpected create error: {other:?}"),
                    }
                }
                Action::MoveDate { target, day } => {
                    let Some(id) = pick(&store, target) else { continue };
                    let taken = store.is_date_taken(&date_for(day), id);
                    let result = store.update(id, EventPatch { date: Some(date_for(day)), ..EventPatch::default() });
                    prop_assert_eq!(result.is_err(), taken);
                }
                Action::Retime { target, hour } => {
                    let Some(id) = pick(&store, target) else { continue };
                    let rec = store.update(id, EventPatch { time: Some(time_for(hour)), ..EventPatch::default() });
                    prop_assert!(rec.is_ok());
                }
                Action::Delete { target } => {
                    let Some(id) = pick(&store, target) else { continue };
                    store.delete(id).unwrap();
                    prop_assert!(store.find(id).is_none());
                    prop_assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));
                }
            }

            let dates = full_scan_dates(&store);
            let unique: BTreeSet<&String> = dates.iter().collect();
            prop_assert_eq!(unique.len(), dates.len());

            for day in 0u8..40 {
                let date = date_for(day);
                prop_assert_eq!(store.is_date_taken(&date, NO_EXCLUSION), dates.contains(&date));
            }

            let sorted = store.list_sorted();
            prop_assert_eq!(sorted.len(), store.len());
            for pair in sorted.windows(2) {
                prop_assert!((pair[0].date.as_str(), pair[0].time.as_str()) <= (pair[1].date.as_str(), pair[1].time.as_str()));
            }
        }
    }
}
