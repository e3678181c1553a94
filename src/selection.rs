//! Toggle-based inclusion picker bounded to [`MAX_INCLUSIONS`] items.
//!
//! A session is opened against one category's catalog and fixes a 1-based
//! index table for the whole interaction: groups concatenated in catalog
//! order. Index tokens toggle items in and out; the selection keeps the order
//! in which items were added, not catalog order.

use tracing::{debug, trace};

use crate::{
    catalog::InclusionCatalog,
    event::ValidationError,
    types::{Category, MAX_INCLUSIONS},
};

/// Lifecycle of a [`SelectionSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting index tokens.
    Active,
    /// Finalized; the selection has been handed to the caller.
    Completed,
}

/// Per-token diagnostic. Informational only; never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Item appended to the selection.
    Added(String),
    /// Item removed from the selection.
    Removed(String),
    /// Item not added because the selection is full.
    MaxReached(String),
    /// Token parsed as a number that maps to no item.
    InvalidIndex(String),
    /// Token is not a number.
    NotANumber(String),
}

/// Session misuse or a selection that cannot be finalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Input arrived after [`SelectionSession::finalize`] succeeded.
    #[error("selection session is already completed")]
    Completed,
    /// The selection is not acceptable yet.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One row of the rendered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'c> {
    /// 1-based index accepted by [`SelectionSession::toggle`].
    pub index: usize,
    /// Group heading.
    pub group: &'c str,
    /// Item name.
    pub item: &'c str,
    /// Whether the item is currently selected.
    pub selected: bool,
}

/// Working state of one inclusion-editing interaction.
#[derive(Debug, Clone)]
pub struct SelectionSession<'c> {
    catalog: &'c InclusionCatalog,
    category: Category,
    index: Vec<&'c str>,
    selected: Vec<String>,
    state: SessionState,
}

impl<'c> SelectionSession<'c> {
    /// Opens a session for `category` with `initial` already selected.
    ///
    /// Duplicates in `initial` are dropped and at most [`MAX_INCLUSIONS`]
    /// items are kept, first occurrences first.
    pub fn new<I, S>(catalog: &'c InclusionCatalog, category: Category, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for item in initial {
            let item = item.into();
            if selected.len() < MAX_INCLUSIONS && !selected.contains(&item) {
                selected.push(item);
            }
        }

        Self {
            catalog,
            category,
            index: catalog.items_for(category),
            selected,
            state: SessionState::Active,
        }
    }

    /// Opens a session for editing an existing event.
    ///
    /// `current` is carried over only when `category` equals
    /// `previous_category`; otherwise the session starts empty.
    pub fn resume(
        catalog: &'c InclusionCatalog,
        previous_category: Category,
        category: Category,
        current: &[String],
    ) -> Self {
        if previous_category == category {
            Self::new(catalog, category, current.iter().cloned())
        } else {
            Self::new(catalog, category, Vec::<String>::new())
        }
    }

    /// Category whose catalog is active.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current selection in add order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Number of indexable items.
    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    /// Item behind a 1-based index.
    pub fn item_at(&self, index: usize) -> Option<&'c str> {
        index.checked_sub(1).and_then(|i| self.index.get(i).copied())
    }

    /// Catalog rows with their indices and selection marks.
    pub fn entries(&self) -> Vec<CatalogEntry<'c>> {
        let mut out = Vec::with_capacity(self.index.len());
        for group in self.catalog.groups_for(self.category) {
            for item in &group.items {
                out.push(CatalogEntry {
                    index: out.len() + 1,
                    group: group.name.as_str(),
                    item: item.as_str(),
                    selected: self.selected.contains(item),
                });
            }
        }
        out
    }

    /// Processes whitespace-separated index tokens left to right.
    ///
    /// Each token fully applies before the next is read, so the same index
    /// twice in one line is a no-op.
    pub fn apply_input(&mut self, line: &str) -> Result<Vec<ToggleOutcome>, SessionError> {
        self.ensure_active()?;
        let outcomes = line
            .split_whitespace()
            .map(|token| match token.parse::<i64>() {
                Ok(n) => match usize::try_from(n).ok().and_then(|i| self.item_at(i)) {
                    Some(item) => self.toggle_item(item),
                    None => ToggleOutcome::InvalidIndex(token.to_string()),
                },
                Err(_) => ToggleOutcome::NotANumber(token.to_string()),
            })
            .collect();
        Ok(outcomes)
    }

    /// Toggles the item behind a single 1-based index.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome, SessionError> {
        self.ensure_active()?;
        Ok(match self.item_at(index) {
            Some(item) => self.toggle_item(item),
            None => ToggleOutcome::InvalidIndex(index.to_string()),
        })
    }

    /// Accepts the selection and completes the session.
    ///
    /// An empty selection is rejected and the session stays active.
    pub fn finalize(&mut self) -> Result<Vec<String>, SessionError> {
        self.ensure_active()?;
        if self.selected.is_empty() {
            return Err(ValidationError::NoInclusions.into());
        }
        self.state = SessionState::Completed;
        debug!(category = %self.category, count = self.selected.len(), "selection finalized");
        Ok(self.selected.clone())
    }

    fn toggle_item(&mut self, item: &str) -> ToggleOutcome {
        if let Some(pos) = self.selected.iter().position(|s| s == item) {
            let removed = self.selected.remove(pos);
            trace!(item = %removed, "inclusion removed");
            return ToggleOutcome::Removed(removed);
        }
        if self.selected.len() >= MAX_INCLUSIONS {
            return ToggleOutcome::MaxReached(item.to_string());
        }
        self.selected.push(item.to_string());
        trace!(item, "inclusion added");
        ToggleOutcome::Added(item.to_string())
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Completed => Err(SessionError::Completed),
        }
    }
}
