//! Test-only helpers for constructing roster records.

use crate::record::Employee;

/// Build an employee record from literal fields.
pub fn employee(id: i32, name: &str, department: &str, salary: f64) -> Employee {
    Employee::new(id, name, department, salary)
}

/// Ids of `records` in collection order.
pub fn ids(records: &[Employee]) -> Vec<i32> {
    records.iter().map(|employee| employee.id).collect()
}

/// A small roster with distinct names, departments, and salaries.
pub fn sample_roster() -> Vec<Employee> {
    vec![
        employee(3, "Carol", "Sales", 50000.0),
        employee(1, "alice", "Eng", 30000.0),
        employee(2, "Bob", "Ops", 40000.0),
    ]
}
