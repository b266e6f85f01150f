//! # licensecheck-state: Interface View State
//!
//! Holds everything the page renders from: active language, query text,
//! the last result set, whether a search is in flight, and the record open
//! in the detail overlay. Each user action is one method call.
//!
//! ## Search Lifecycle
//!
//! ```text
//! Idle ──submit_search()──▶ Searching ──complete_search()──▶ Idle (results replaced)
//!   │
//!   └── blank query: submit_search() returns None, nothing changes
//! ```
//!
//! Submitting returns a [`PendingSearch`] ticket. Completing with a ticket
//! always overwrites the current results; a late completion of an older
//! ticket wins over an earlier completion of a newer one.
//!
//! ## Detail Selection
//!
//! Only a record in the current result set can be selected. Dismissing the
//! overlay leaves results, query and language untouched.

pub mod view;

pub use view::{PendingSearch, ViewError, ViewState};
