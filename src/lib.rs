//! In-memory event booking with date-conflict checks and category-scoped
//! inclusion selection.
//!
//! # Examples
//!
//! Booking an event with [`core::store::EventStore`]:
//! ```
//! use eventbook::{
//!     core::store::{EventStore, StoreError},
//!     event::EventDraft,
//!     types::Category,
//! };
//!
//! let mut store = EventStore::new();
//! let draft = EventDraft {
//!     title: "Ben's 8th".to_string(),
//!     date: "2025-03-01".to_string(),
//!     time: "14:00".to_string(),
//!     location: "Backyard".to_string(),
//!     category: Category::Birthday,
//!     inclusions: vec!["DJ".to_string()],
//!     description: String::new(),
//! };
//! let rec = store.create(draft.clone()).expect("create");
//! assert_eq!(rec.id, 1);
//!
//! let err = store.create(draft).unwrap_err();
//! assert!(matches!(err, StoreError::Conflict { holder: 1, .. }));
//! ```
//!
//! Picking inclusions with [`selection::SelectionSession`]:
//! ```
//! use eventbook::{catalog::InclusionCatalog, selection::SelectionSession, types::Category};
//!
//! let mut session = SelectionSession::new(InclusionCatalog::standard(), Category::Burial, Vec::<String>::new());
//! session.apply_input("1 3 1").expect("active");
//! assert_eq!(session.finalize().expect("non-empty"), vec!["KIDS".to_string()]);
//! ```
#![deny(missing_docs)]

/// Per-category inclusion catalogs.
pub mod catalog;
/// Console run configuration.
pub mod config;
/// Interactive menu controller and text rendering.
pub mod console;
/// Core in-memory store and index helpers.
pub mod core;
/// Event domain records and patches.
pub mod event;
/// Tracing subscriber setup.
pub mod logging;
/// Sample bookings.
pub mod seed;
/// Inclusion multi-select session.
pub mod selection;
/// Shared primitive types and enums.
pub mod types;
