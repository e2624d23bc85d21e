//! In-place mutations of the roster.
//!
//! Ids are caller-supplied and not required to be unique: removal drops every
//! match, update touches only the first.

use crate::core::types::{RemoveOutcome, UpdateOutcome};
use crate::record::Employee;

/// Append to the end of the roster.
pub fn add(records: &mut Vec<Employee>, employee: Employee) {
    records.push(employee);
}

/// Remove every record with `id`, preserving the order of the rest.
pub fn remove_by_id(records: &mut Vec<Employee>, id: i32) -> RemoveOutcome {
    let before = records.len();
    records.retain(|employee| employee.id != id);
    match before - records.len() {
        0 => RemoveOutcome::NotFound,
        removed => RemoveOutcome::Removed(removed),
    }
}

/// Overwrite department and salary of the first record with `id`.
///
/// Id and name never change after creation.
pub fn update(
    records: &mut [Employee],
    id: i32,
    department: &str,
    salary: f64,
) -> UpdateOutcome {
    let Some(employee) = records.iter_mut().find(|employee| employee.id == id) else {
        return UpdateOutcome::NotFound;
    };
    employee.department = department.to_string();
    employee.salary = salary;
    UpdateOutcome::Updated
}
