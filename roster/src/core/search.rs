//! Lookup of a single record by name or id.

use crate::record::Employee;

/// First record whose name equals `query` ignoring case, or whose id in
/// decimal form equals `query` exactly. Collection order decides ties.
pub fn find<'a>(records: &'a [Employee], query: &str) -> Option<&'a Employee> {
    let folded = query.to_lowercase();
    records.iter().find(|employee| {
        employee.name.to_lowercase() == folded || employee.id.to_string() == query
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::employee;

    fn roster() -> Vec<Employee> {
        vec![
            employee(3, "alice", "Eng", 50000.0),
            employee(7, "Bob", "Ops", 30000.0),
            employee(8, "ALICE", "Sales", 40000.0),
        ]
    }

    #[test]
    fn name_match_ignores_case_and_returns_first() {
        let records = roster();
        let found = find(&records, "Alice").expect("found");
        assert_eq!(found.id, 3);
        assert_eq!(find(&records, "bob").map(|e| e.id), Some(7));
    }

    #[test]
    fn id_match_uses_decimal_form() {
        let records = roster();
        assert_eq!(find(&records, "7").map(|e| e.name.as_str()), Some("Bob"));
        assert!(find(&records, "07").is_none());
        assert!(find(&records, "9").is_none());
    }

    #[test]
    fn name_or_id_match_takes_earliest_record() {
        let records = vec![
            employee(1, "8", "Eng", 1.0),
            employee(8, "Zed", "Eng", 1.0),
        ];
        assert_eq!(find(&records, "8").map(|e| e.id), Some(1));
    }

    #[test]
    fn empty_roster_finds_nothing() {
        assert!(find(&[], "alice").is_none());
    }
}
