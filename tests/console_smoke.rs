use std::io::Cursor;

use eventbook::{
    catalog::InclusionCatalog,
    config::ConsoleConfig,
    console::Console,
    core::store::EventStore,
    seed::seed_sample_events,
    types::Category,
};

fn run_script(store: EventStore, script: &[&str]) -> (EventStore, String) {
    let mut input = script.join("\n");
    input.push('\n');
    let mut out = Vec::new();
    let mut console = Console::new(
        store,
        InclusionCatalog::standard(),
        ConsoleConfig::default(),
        Cursor::new(input.into_bytes()),
        &mut out,
    );
    console.run().expect("console run");
    let store = console.into_store();
    (store, String::from_utf8(out).expect("utf8 output"))
}

fn seeded() -> EventStore {
    let mut store = EventStore::new();
    seed_sample_events(&mut store).expect("seed");
    store
}

#[test]
fn add_event_reprompts_for_taken_date_and_empty_selection() {
    let script = [
        "1",
        "",
        "Grace's Debut",
        "2024-11-20",
        "2025-01-10",
        "17:00",
        "Sky Garden",
        "1",
        "D",
        "2 x 99 20",
        "d",
        "Eighteen roses.",
        "6",
    ];
    let (store, out) = run_script(seeded(), &script);

    assert!(out.contains("[ERROR] Reservation Name is required."));
    assert!(out.contains("[ERROR] A major event is already scheduled for 2024-11-20."));
    assert!(out.contains("[ERROR] You must select at least one inclusion."));
    assert!(out.contains("[ERROR] Invalid input: x."));
    assert!(out.contains("[INFO] Invalid number: 99."));
    assert!(out.contains("[SUCCESS] Event added successfully with ID: 4"));

    let rec = store.find(4).expect("new event");
    assert_eq!(rec.title, "Grace's Debut");
    assert_eq!(rec.date, "2025-01-10");
    assert_eq!(rec.category, Category::Birthday);
    assert_eq!(rec.inclusions, vec!["GARDEN".to_string(), "CUSTOM CAKE".to_string()]);
    assert_eq!(rec.description, "Eighteen roses.");
}

#[test]
fn view_lists_events_in_date_order() {
    let (_, out) = run_script(seeded(), &["2", "6"]);

    let alice = out.find("Alice's 30th Party").expect("alice row");
    let john = out.find("John Doe Service").expect("john row");
    let wedding = out.find("25th Wedding Milestone").expect("wedding row");
    assert!(alice < john && john < wedding);
    assert!(out.contains("Thank you for using the Event Organizer. Goodbye!"));
}

#[test]
fn view_on_empty_store_says_so() {
    let (_, out) = run_script(EventStore::new(), &["2"]);
    assert!(out.contains("No events found."));
}

#[test]
fn update_keeps_blank_fields_and_rejects_taken_date() {
    let script = [
        "3",
        "2",
        "",
        "2024-12-24",
        "2025-05-16",
        "",
        "Crystal Ballroom",
        "",
        "1",
        "D",
        "",
        "6",
    ];
    let (store, out) = run_script(seeded(), &script);

    assert!(out.contains("[ERROR] A major event is already scheduled for 2024-12-24."));
    assert!(out.contains("[SUCCESS] Event ID 2 updated successfully."));

    let rec = store.find(2).expect("event 2");
    assert_eq!(rec.title, "25th Wedding Milestone");
    assert_eq!(rec.date, "2025-05-16");
    assert_eq!(rec.time, "18:00");
    assert_eq!(rec.location, "Crystal Ballroom");
    assert_eq!(rec.category, Category::Anniversary);
    assert_eq!(rec.inclusions, vec!["PHOTOGRAPHER".to_string()]);
    assert!(!store.is_date_taken("2025-05-15", 0));
}

#[test]
fn update_with_new_category_starts_selection_empty() {
    let script = ["3", "3", "", "", "", "", "1", "D", "3", "D", ""];
    let (store, out) = run_script(seeded(), &script);

    assert!(out.contains("CURRENT: None"));
    let rec = store.find(3).expect("event 3");
    assert_eq!(rec.category, Category::Birthday);
    assert_eq!(rec.inclusions, vec!["RESTAURANT".to_string()]);
}

#[test]
fn update_without_changes_reports_nothing_to_do() {
    let script = ["3", "1", "", "", "", "", "", "D", "", "6"];
    let (_, out) = run_script(seeded(), &script);
    assert!(out.contains("[INFO] No changes made to event ID 1."));
}

#[test]
fn update_cancel_and_missing_id() {
    let (_, out) = run_script(seeded(), &["3", "0", "3", "77", "3", "abc", "6"]);
    assert!(out.contains("[INFO] Update operation cancelled."));
    assert!(out.contains("[ERROR] Event with ID 77 not found."));
    assert!(out.contains("[ERROR] Invalid input. Please enter a valid number for the ID."));
}

#[test]
fn delete_requires_yes() {
    let (store, out) = run_script(seeded(), &["4", "1", "no", "4", "1", "YES", "4", "1", "6"]);

    assert!(out.contains("[INFO] Deletion cancelled."));
    assert!(out.contains("[SUCCESS] Event ID 1 deleted."));
    assert!(out.contains("[ERROR] Event with ID 1 not found."));
    assert_eq!(store.len(), 2);
}

#[test]
fn receipt_shows_event_details() {
    let (_, out) = run_script(seeded(), &["5", "3", "6"]);

    assert!(out.contains("HEBS EVENT BOOKING RECEIPT"));
    assert!(out.contains("Reservation    : John Doe Service"));
    assert!(out.contains("  - ( 1) CASKET SPRAY"));
    assert!(out.contains("  - ( 2) HEARSE"));
    assert!(out.contains("  Memorial service for the late John Doe."));
}

#[test]
fn invalid_menu_choice_and_end_of_input_exit_cleanly() {
    let (store, out) = run_script(seeded(), &["9"]);
    assert!(out.contains("[INFO] Invalid choice."));
    assert_eq!(store.len(), 3);
}
