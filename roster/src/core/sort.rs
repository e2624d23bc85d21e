//! Stable reordering of the roster by a single field.

use std::cmp::Ordering;

use crate::core::types::SortCriterion;
use crate::record::Employee;

/// Sort in place, keeping equal keys in their current relative order.
///
/// Text fields compare byte-wise (case-sensitive); salary is ascending under
/// IEEE total ordering.
pub fn sort_by_criterion(records: &mut [Employee], criterion: SortCriterion) {
    records.sort_by(|a, b| compare(a, b, criterion));
}

fn compare(a: &Employee, b: &Employee, criterion: SortCriterion) -> Ordering {
    match criterion {
        SortCriterion::Name => a.name.cmp(&b.name),
        SortCriterion::Salary => a.salary.total_cmp(&b.salary),
        SortCriterion::Department => a.department.cmp(&b.department),
    }
}
