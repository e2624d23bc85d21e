use std::fmt;

use serde::{Deserialize, Serialize};

/// One employee on the roster.
///
/// Field order is the on-disk order: id, name, department, salary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Department: {}, Salary: ${:.2}",
            self.id, self.name, self.department, self.salary
        )
    }
}
