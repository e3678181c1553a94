//! Text layout for the event table and booking receipts.

use std::fmt::Write as _;

use crate::event::EventRecord;

/// Width of the event table rules.
pub const TABLE_WIDTH: usize = 80;

const TITLE_COLUMN: usize = 25;
const LABEL_COLUMN: usize = 15;

/// Header row of the event table.
pub fn table_header() -> String {
    format!(
        "| {:<5} | {:<25} | {:<10} | {:<5} | {:<15} | {:<15} |",
        "ID", "Reservation Name", "Date", "Time", "Location", "Category"
    )
}

/// One event as a table row. Long titles are cut to fit the column.
pub fn table_row(rec: &EventRecord) -> String {
    format!(
        "| {:<5} | {:<25} | {:<10} | {:<5} | {:<15} | {:<15} |",
        rec.id,
        truncate(&rec.title, TITLE_COLUMN),
        rec.date,
        rec.time,
        rec.location,
        rec.category.as_str()
    )
}

/// Full table for already-sorted events, rules included.
pub fn event_table<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(out, "--- ALL SCHEDULED EVENTS ---");
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    let mut events = events.into_iter().peekable();
    if events.peek().is_none() {
        let _ = writeln!(out, "No events found.");
        let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
        return out;
    }

    let _ = writeln!(out, "{}", table_header());
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    for rec in events {
        let _ = writeln!(out, "{}", table_row(rec));
    }
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    out
}

/// Booking receipt framed by rules `width` characters wide.
pub fn receipt(rec: &EventRecord, width: usize) -> String {
    let stars = "*".repeat(width);
    let dashes = "-".repeat(width);
    let mut out = String::new();

    let _ = writeln!(out, "\n{stars}");
    let _ = writeln!(out, "{}", format!("{:^width$}", "HEBS EVENT BOOKING RECEIPT").trim_end());
    let _ = writeln!(out, "{stars}");
    label(&mut out, "Event ID", &rec.id.to_string());
    label(&mut out, "Reservation", &rec.title);
    label(&mut out, "Category", rec.category.as_str());
    let _ = writeln!(out, "{dashes}");
    label(&mut out, "Date", &rec.date);
    label(&mut out, "Time", &rec.time);
    label(&mut out, "Location", &rec.location);
    let _ = writeln!(out, "{dashes}");

    let _ = writeln!(out, "INCLUDED SERVICES (Inclusion):");
    if rec.inclusions.is_empty() {
        let _ = writeln!(out, "  None selected (required for booking).");
    }
    for (i, item) in rec.inclusions.iter().enumerate() {
        let _ = writeln!(out, "  - ({:>2}) {item}", i + 1);
    }
    let _ = writeln!(out, "{dashes}");

    let _ = writeln!(out, "Description:");
    let text = if rec.description.is_empty() {
        "(No description provided)"
    } else {
        rec.description.as_str()
    };
    for line in wrap_words(text, width.saturating_sub(4)) {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "{stars}");
    out
}

/// Greedy word wrap. Words longer than `max` get a line of their own.
pub fn wrap_words(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}

fn label(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "{name:<LABEL_COLUMN$}: {value}");
}
