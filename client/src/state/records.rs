//! List state for record collections (sightings, reports, actions).
//!
//! DESIGN
//! ======
//! Deletion is two-phase. `begin_delete` marks a record pending after the
//! user confirms; the record leaves `items` only in `confirm_delete`, once
//! the backend has accepted the call. `fail_delete` rolls the mark back.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::error::ErrorMessage;
use crate::net::types::Record;

/// Category filter for list views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category.is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<ErrorMessage>,
    pub filter: Filter,
    pub pending_delete: Option<i64>,
}

impl<R> Default for RecordList<R> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, filter: Filter::All, pending_delete: None }
    }
}

impl<R: Record> RecordList<R> {
    /// Apply the result of the initial fetch.
    pub fn loaded(&mut self, result: Result<Vec<R>, ErrorMessage>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Records passing the active filter, in backend order.
    pub fn visible(&self) -> Vec<R> {
        self.items
            .iter()
            .filter(|r| self.filter.matches(r.category()))
            .cloned()
            .collect()
    }

    /// Distinct categories with counts, in first-seen order.
    pub fn facets(&self) -> Vec<(String, usize)> {
        let mut facets: Vec<(String, usize)> = Vec::new();
        for category in self.items.iter().filter_map(R::category) {
            match facets.iter_mut().find(|entry| entry.0 == category) {
                Some((_, count)) => *count += 1,
                None => facets.push((category.to_owned(), 1)),
            }
        }
        facets
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending_delete == Some(id)
    }

    /// Mark `id` for deletion. Returns `false` if it is unknown or another
    /// delete is already in flight.
    pub fn begin_delete(&mut self, id: i64) -> bool {
        if self.pending_delete.is_some() || !self.items.iter().any(|r| r.id() == id) {
            return false;
        }
        self.pending_delete = Some(id);
        self.error = None;
        true
    }

    /// Backend accepted the delete: drop the record.
    pub fn confirm_delete(&mut self, id: i64) {
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        self.items.retain(|r| r.id() != id);
    }

    /// Backend refused the delete: keep the record and surface why.
    pub fn fail_delete(&mut self, id: i64, message: ErrorMessage) {
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        self.error = Some(message);
    }
}

/// Whether `viewer` may delete a record submitted by `submitted_by`.
pub fn is_owner(viewer: Option<&str>, submitted_by: Option<&str>) -> bool {
    matches!((viewer, submitted_by), (Some(viewer), Some(author)) if viewer == author)
}
