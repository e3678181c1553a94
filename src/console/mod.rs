//! Interactive menu driving the store and selection sessions.
//!
//! Generic over any `BufRead`/`Write` pair so scripted input can exercise
//! every flow. End of input ends the session cleanly.

/// Table and receipt layout.
pub mod render;

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::{
    catalog::InclusionCatalog,
    config::ConsoleConfig,
    core::store::EventStore,
    event::{EventDraft, EventPatch},
    selection::{SelectionSession, SessionError, ToggleOutcome},
    types::{Category, EventId, MAX_INCLUSIONS, NO_EXCLUSION},
};

const MENU_RULE: usize = 50;

enum IdInput {
    Id(EventId),
    Cancel,
    Blank,
    Invalid,
}

/// Menu loop state: the store plus the I/O pair it talks through.
pub struct Console<'c, R, W> {
    store: EventStore,
    catalog: &'c InclusionCatalog,
    config: ConsoleConfig,
    input: R,
    out: W,
}

impl<'c, R: BufRead, W: Write> Console<'c, R, W> {
    /// Builds a console over an existing store.
    pub fn new(store: EventStore, catalog: &'c InclusionCatalog, config: ConsoleConfig, input: R, out: W) -> Self {
        Self {
            store,
            catalog,
            config,
            input,
            out,
        }
    }

    /// Read access to the store being edited.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Ends the console and returns the store.
    pub fn into_store(self) -> EventStore {
        self.store
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!(events = self.store.len(), "console session started");
        match self.menu_loop() {
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                info!("input closed; leaving console");
                self.out.flush()
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to HEBS Event Organizer")?;
        loop {
            self.display_menu()?;
            let choice = self.prompt("Enter your choice (1-6): ")?;
            match choice.as_str() {
                "1" => self.add_event()?,
                "2" => self.view_events()?,
                "3" => self.update_event()?,
                "4" => self.delete_event()?,
                "5" => self.generate_receipt()?,
                "6" => {
                    writeln!(self.out, "\nThank you for using the Event Organizer. Goodbye!")?;
                    return self.out.flush();
                }
                _ => writeln!(self.out, "\n[INFO] Invalid choice. Please enter a number between 1 and 6.")?,
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "-".repeat(MENU_RULE);
        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "  EVENT ORGANIZER MENU")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "1. Add New Event")?;
        writeln!(self.out, "2. View All Events")?;
        writeln!(self.out, "3. Update Event")?;
        writeln!(self.out, "4. Delete Event")?;
        writeln!(self.out, "5. Generate Receipt")?;
        writeln!(self.out, "6. Exit")?;
        writeln!(self.out, "{rule}")
    }

    fn add_event(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(MENU_RULE))?;
        writeln!(self.out, "--- ADD NEW EVENT ---")?;

        let title = self.prompt_required("1. Enter Reservation Name (Required): ", "Reservation Name")?;

        let mut date = self.prompt("2. Enter Date (YYYY-MM-DD, Required): ")?;
        while date.is_empty() || self.store.is_date_taken(&date, NO_EXCLUSION) {
            date = if date.is_empty() {
                self.prompt("[ERROR] Date is required. Re-enter: ")?
            } else {
                self.prompt(&format!(
                    "[ERROR] A major event is already scheduled for {date}. Please choose another date. Re-enter Date (YYYY-MM-DD): "
                ))?
            };
        }

        let time = self.prompt_required("3. Enter Time (HH:MM, Required): ", "Time")?;
        let location = self.prompt_required("4. Enter Location (Required): ", "Location")?;
        let category = self.choose_category(None)?;
        let session = SelectionSession::new(self.catalog, category, Vec::<String>::new());
        let inclusions = self.choose_inclusions(session)?;

        writeln!(self.out, "7. Enter Description (Optional). Press Enter to skip.")?;
        let description = self.prompt("> ")?;

        let draft = EventDraft {
            title,
            date,
            time,
            location,
            category,
            inclusions,
            description,
        };
        match self.store.create(draft) {
            Ok(rec) => writeln!(self.out, "\n[SUCCESS] Event added successfully with ID: {}", rec.id),
            Err(err) => writeln!(self.out, "\n[ERROR] {err}"),
        }
    }

    fn view_events(&mut self) -> io::Result<()> {
        let table = render::event_table(self.store.list_sorted());
        write!(self.out, "{table}")
    }

    fn update_event(&mut self) -> io::Result<()> {
        self.view_events()?;
        writeln!(self.out, "\n{}", "=".repeat(MENU_RULE))?;
        writeln!(self.out, "--- UPDATE EXISTING EVENT ---")?;

        let Some(id) = self.read_event_id("update", "Update operation cancelled.")? else {
            return Ok(());
        };
        let Some(current) = self.store.get_cloned(id) else {
            return writeln!(self.out, "[ERROR] Event with ID {id} not found.");
        };

        writeln!(self.out, "\nEditing Event ID {id}: '{}'", current.title)?;
        writeln!(self.out, "Leave fields blank to keep the current value.")?;

        let mut patch = EventPatch::default();

        let title = self.prompt(&format!("1. Reservation Name (Current: {}): ", current.title))?;
        if !title.is_empty() {
            patch.title = Some(title);
        }

        loop {
            let date = self.prompt(&format!("2. Date (YYYY-MM-DD, Current: {}): ", current.date))?;
            if date.is_empty() {
                break;
            }
            if self.store.is_date_taken(&date, id) {
                writeln!(
                    self.out,
                    "[ERROR] A major event is already scheduled for {date}. Please choose another date."
                )?;
                continue;
            }
            if date != current.date {
                patch.date = Some(date);
            }
            break;
        }

        let time = self.prompt(&format!("3. Time (HH:MM, Current: {}): ", current.time))?;
        if !time.is_empty() {
            patch.time = Some(time);
        }
        let location = self.prompt(&format!("4. Location (Current: {}): ", current.location))?;
        if !location.is_empty() {
            patch.location = Some(location);
        }

        let category = self.choose_category(Some(current.category))?;
        if category != current.category {
            patch.category = Some(category);
        }

        let session = SelectionSession::resume(self.catalog, current.category, category, &current.inclusions);
        let inclusions = self.choose_inclusions(session)?;
        if inclusions != current.inclusions {
            patch.inclusions = Some(inclusions);
        }

        let shown = if current.description.is_empty() {
            "None".to_string()
        } else {
            current.description.replace('\n', " / ")
        };
        writeln!(self.out, "7. Description (Current: {shown})")?;
        writeln!(self.out, "Enter new description (or just press Enter to keep current):")?;
        let description = self.prompt("> ")?;
        if !description.is_empty() {
            patch.description = Some(description);
        }

        if patch.is_empty() {
            return writeln!(self.out, "\n[INFO] No changes made to event ID {id}.");
        }
        match self.store.update(id, patch) {
            Ok(_) => writeln!(self.out, "\n[SUCCESS] Event ID {id} updated successfully."),
            Err(err) => writeln!(self.out, "\n[ERROR] {err}"),
        }
    }

    fn delete_event(&mut self) -> io::Result<()> {
        self.view_events()?;
        writeln!(self.out, "\n{}", "=".repeat(MENU_RULE))?;
        writeln!(self.out, "--- DELETE EVENT ---")?;

        let Some(id) = self.read_event_id("delete", "Deletion operation cancelled.")? else {
            return Ok(());
        };
        let Some(title) = self.store.find(id).map(|rec| rec.title.clone()) else {
            return writeln!(self.out, "[ERROR] Event with ID {id} not found.");
        };

        let confirm = self.prompt(&format!(
            "Are you sure you want to delete event ID {id} ('{title}')? (yes/no): "
        ))?;
        if !confirm.eq_ignore_ascii_case("yes") {
            return writeln!(self.out, "\n[INFO] Deletion cancelled.");
        }
        match self.store.delete(id) {
            Ok(()) => writeln!(self.out, "\n[SUCCESS] Event ID {id} deleted."),
            Err(err) => writeln!(self.out, "\n[ERROR] {err}"),
        }
    }

    fn generate_receipt(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(self.config.receipt_width))?;
        writeln!(self.out, "--- GENERATE EVENT RECEIPT ---")?;

        let Some(id) = self.read_event_id("generate a receipt for", "Receipt generation cancelled.")? else {
            return Ok(());
        };
        let text = match self.store.find(id) {
            Some(rec) => render::receipt(rec, self.config.receipt_width),
            None => return writeln!(self.out, "[ERROR] Event with ID {id} not found."),
        };
        write!(self.out, "{text}")
    }

    fn choose_category(&mut self, current: Option<Category>) -> io::Result<Category> {
        writeln!(self.out, "\n5. Choose Category:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.out, "   [{}] {category}", i + 1)?;
        }

        let default = current.unwrap_or(Category::Birthday);
        let default_pos = Category::ALL.iter().position(|c| *c == default).unwrap_or(0) + 1;
        let choice = self.prompt(&format!("   Enter category number (Default: {default_pos} - {default}): "))?;
        if choice.is_empty() {
            return Ok(default);
        }

        match choice.parse::<usize>() {
            Ok(n) => match n.checked_sub(1).and_then(|i| Category::ALL.get(i)) {
                Some(category) => Ok(*category),
                None => {
                    writeln!(self.out, "[INFO] Invalid category number. Using default category.")?;
                    Ok(default)
                }
            },
            Err(_) => {
                writeln!(self.out, "[INFO] Invalid input (not a number). Using default category.")?;
                Ok(default)
            }
        }
    }

    fn choose_inclusions(&mut self, mut session: SelectionSession<'_>) -> io::Result<Vec<String>> {
        let rule = "-".repeat(30);
        writeln!(
            self.out,
            "\n6. Choose Inclusions for {} (Select up to {MAX_INCLUSIONS} items):",
            session.category()
        )?;
        writeln!(self.out, "{rule}")?;
        let mut group = "";
        for entry in session.entries() {
            if entry.group != group {
                group = entry.group;
                writeln!(self.out, "   {group}")?;
            }
            let mark = if entry.selected { "[X]" } else { "[ ]" };
            writeln!(self.out, "   {mark} [{:>2}] {}", entry.index, entry.item)?;
        }
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "   CURRENT: {}", current_list(session.selected()))?;
        writeln!(self.out, "   Enter numbers to toggle (e.g., '1 5 10'), or 'D' when Done:")?;

        loop {
            let line = self.prompt("> ")?;
            if line.is_empty() || line.eq_ignore_ascii_case("d") {
                match session.finalize() {
                    Ok(selected) => return Ok(selected),
                    Err(SessionError::Validation(_)) => {
                        writeln!(
                            self.out,
                            "[ERROR] You must select at least one inclusion. Enter selection numbers or 'D' to finish if you have selections."
                        )?;
                        continue;
                    }
                    Err(err) => return Err(io::Error::other(err)),
                }
            }

            let outcomes = session.apply_input(&line).map_err(io::Error::other)?;
            for outcome in outcomes {
                match outcome {
                    ToggleOutcome::Added(item) => writeln!(self.out, "[INFO] Added: {item}")?,
                    ToggleOutcome::Removed(item) => writeln!(self.out, "[INFO] Removed: {item}")?,
                    ToggleOutcome::MaxReached(item) => writeln!(
                        self.out,
                        "[INFO] Maximum {MAX_INCLUSIONS} inclusions reached. Cannot add: {item}"
                    )?,
                    ToggleOutcome::InvalidIndex(token) => writeln!(
                        self.out,
                        "[INFO] Invalid number: {token}. Please enter a number between 1 and {}.",
                        session.item_count()
                    )?,
                    ToggleOutcome::NotANumber(token) => writeln!(
                        self.out,
                        "[ERROR] Invalid input: {token}. Please enter numbers separated by spaces or 'D'."
                    )?,
                }
            }
            writeln!(self.out, "   [Current selections: {}]", current_list(session.selected()))?;
        }
    }

    fn read_event_id(&mut self, action: &str, cancelled: &str) -> io::Result<Option<EventId>> {
        let raw = self.prompt(&format!("Enter the ID of the event to {action} (or 0 to cancel): "))?;
        let parsed = if raw.is_empty() {
            IdInput::Blank
        } else {
            match raw.parse::<EventId>() {
                Ok(0) => IdInput::Cancel,
                Ok(id) => IdInput::Id(id),
                Err(_) => IdInput::Invalid,
            }
        };

        match parsed {
            IdInput::Id(id) => Ok(Some(id)),
            IdInput::Cancel => {
                writeln!(self.out, "[INFO] {cancelled}")?;
                Ok(None)
            }
            IdInput::Blank => Ok(None),
            IdInput::Invalid => {
                writeln!(self.out, "[ERROR] Invalid input. Please enter a valid number for the ID.")?;
                Ok(None)
            }
        }
    }

    fn prompt_required(&mut self, prompt: &str, field: &str) -> io::Result<String> {
        let mut value = self.prompt(prompt)?;
        while value.is_empty() {
            value = self.prompt(&format!("[ERROR] {field} is required. Re-enter: "))?;
        }
        Ok(value)
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }
}

fn current_list(selected: &[String]) -> String {
    if selected.is_empty() {
        "None".to_string()
    } else {
        selected.join(", ")
    }
}
