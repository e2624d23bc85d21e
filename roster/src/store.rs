//! Record store: the in-memory roster plus its persistence behavior.
//!
//! Every effective mutation rewrites the data file. A failed write is
//! reported through [`Applied::persist`] while the in-memory change is kept.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::edit;
use crate::core::search::find;
use crate::core::sort::sort_by_criterion;
use crate::core::types::{RemoveOutcome, SortCriterion, SortOutcome, UpdateOutcome};
use crate::io::roster_file::{load_roster, write_roster};
use crate::record::Employee;

/// How the roster was obtained at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No data file yet; starting empty.
    Missing,
    Loaded { count: usize },
    /// Data file could not be used; starting empty.
    Reset { reason: String },
}

/// Outcome of a mutating operation together with its persistence result.
#[derive(Debug)]
pub struct Applied<T> {
    pub outcome: T,
    /// `Ok(())` also when nothing changed and the file was left alone.
    pub persist: Result<()>,
}

impl<T> Applied<T> {
    fn unchanged(outcome: T) -> Self {
        Self {
            outcome,
            persist: Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Employee>,
    load_status: LoadStatus,
}

impl RecordStore {
    /// Load the roster from `path`, falling back to an empty roster on any
    /// failure. Never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (records, load_status) = match load_roster(&path) {
            Ok(Some(records)) => {
                let count = records.len();
                (records, LoadStatus::Loaded { count })
            }
            Ok(None) => (Vec::new(), LoadStatus::Missing),
            Err(err) => {
                let reason = format!("{:#}", err);
                warn!(path = %path.display(), %reason, "roster reset to empty");
                (Vec::new(), LoadStatus::Reset { reason })
            }
        };
        debug!(path = %path.display(), status = ?load_status, "record store opened");
        Self {
            path,
            records,
            load_status,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// All records in collection order. Empty is a valid state.
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn search(&self, query: &str) -> Option<&Employee> {
        find(&self.records, query)
    }

    pub fn add(&mut self, employee: Employee) -> Applied<()> {
        debug!(id = employee.id, "adding employee");
        edit::add(&mut self.records, employee);
        self.applied(())
    }

    pub fn remove(&mut self, id: i32) -> Applied<RemoveOutcome> {
        match edit::remove_by_id(&mut self.records, id) {
            RemoveOutcome::NotFound => Applied::unchanged(RemoveOutcome::NotFound),
            removed => {
                debug!(id, outcome = ?removed, "removed employees");
                self.applied(removed)
            }
        }
    }

    pub fn update(&mut self, id: i32, department: &str, salary: f64) -> Applied<UpdateOutcome> {
        match edit::update(&mut self.records, id, department, salary) {
            UpdateOutcome::NotFound => Applied::unchanged(UpdateOutcome::NotFound),
            UpdateOutcome::Updated => {
                debug!(id, "updated employee");
                self.applied(UpdateOutcome::Updated)
            }
        }
    }

    /// Sort by the criterion named in `criterion`; unknown names leave the
    /// order untouched.
    pub fn sort(&mut self, criterion: &str) -> Applied<SortOutcome> {
        match criterion.parse::<SortCriterion>() {
            Ok(parsed) => {
                sort_by_criterion(&mut self.records, parsed);
                debug!(criterion = %parsed, "sorted roster");
                self.applied(SortOutcome::Sorted(parsed))
            }
            Err(invalid) => Applied::unchanged(SortOutcome::InvalidCriterion(invalid)),
        }
    }

    /// Rewrite the data file from the in-memory roster.
    pub fn persist(&self) -> Result<()> {
        write_roster(&self.path, &self.records)
    }

    fn applied<T>(&self, outcome: T) -> Applied<T> {
        let persist = self.persist();
        if let Err(err) = &persist {
            let error = format!("{:#}", err);
            warn!(path = %self.path.display(), %error, "failed to save roster");
        }
        Applied { outcome, persist }
    }
}
