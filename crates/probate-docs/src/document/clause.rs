//! Explicit clause tables for "exactly one variant" document sections.
//!
//! Every conditional section of a form is described as a table of
//! `(clause id, predicate)` rows plus a fallback id. Selection evaluates each
//! predicate once and always yields exactly one active clause: the single
//! match, the fallback when nothing matches, or the first row when rows
//! overlap (logged as a conflict).

use tracing::{debug, warn};

pub struct Clause<C> {
    pub id: &'static str,
    predicate: fn(&C) -> bool,
}

pub struct ClauseTable<C> {
    group: &'static str,
    clauses: Vec<Clause<C>>,
    fallback: &'static str,
}

impl<C> ClauseTable<C> {
    pub fn new(group: &'static str, fallback: &'static str) -> Self {
        Self {
            group,
            clauses: Vec::new(),
            fallback,
        }
    }

    pub fn clause(mut self, id: &'static str, predicate: fn(&C) -> bool) -> Self {
        self.clauses.push(Clause { id, predicate });
        self
    }

    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Every id the table can produce, fallback included, in table order.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.clauses.iter().map(|clause| clause.id).collect();
        if !ids.contains(&self.fallback) {
            ids.push(self.fallback);
        }
        ids
    }

    /// Ids of every clause whose predicate holds, without resolving conflicts.
    pub fn matching(&self, ctx: &C) -> Vec<&'static str> {
        self.clauses
            .iter()
            .filter(|clause| (clause.predicate)(ctx))
            .map(|clause| clause.id)
            .collect()
    }

    pub fn select(&self, ctx: &C) -> ClauseSelection {
        let matches = self.matching(ctx);
        let (active, fell_back) = match matches.as_slice() {
            [] => (self.fallback, true),
            [only] => (*only, false),
            [first, ..] => {
                warn!(
                    group = self.group,
                    clauses = ?matches,
                    "multiple clauses matched; using the first"
                );
                (*first, false)
            }
        };

        debug!(group = self.group, clause = active, fell_back, "clause selected");

        ClauseSelection {
            group: self.group,
            active,
            fell_back,
        }
    }
}

/// Result of evaluating a clause table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseSelection {
    pub group: &'static str,
    pub active: &'static str,
    pub fell_back: bool,
}

impl ClauseSelection {
    pub fn is(&self, id: &str) -> bool {
        self.active == id
    }
}
