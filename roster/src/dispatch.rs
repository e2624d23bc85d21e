//! Interactive menu loop over a [`RecordStore`].
//!
//! Waits for a selection, collects the fields that operation needs, runs it
//! against the store, prints the result, and repeats until exit or end of
//! input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::types::{RemoveOutcome, SortOutcome, UpdateOutcome};
use crate::io::console::Console;
use crate::record::Employee;
use crate::store::{LoadStatus, RecordStore};

const MENU: [&str; 8] = [
    "Employee Management System",
    "1. Add Employee",
    "2. Remove Employee",
    "3. View All Employees",
    "4. Search Employee",
    "5. Update Employee",
    "6. Sort Employees",
    "7. Exit",
];

pub const NOT_FOUND: &str = "Employee not found!";
pub const EMPTY_ROSTER: &str = "No employees found!";
pub const INVALID_CHOICE: &str = "Invalid choice! Try again.";

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Search,
    Update,
    Sort,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(MenuChoice::Add),
            Ok(2) => Ok(MenuChoice::Remove),
            Ok(3) => Ok(MenuChoice::List),
            Ok(4) => Ok(MenuChoice::Search),
            Ok(5) => Ok(MenuChoice::Update),
            Ok(6) => Ok(MenuChoice::Sort),
            Ok(7) => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Lines printed for "view all": every record, or a single empty-roster note.
pub fn list_lines(records: &[Employee]) -> Vec<String> {
    if records.is_empty() {
        return vec![EMPTY_ROSTER.to_string()];
    }
    records.iter().map(ToString::to_string).collect()
}

/// Run the menu loop until the user exits or input ends.
///
/// Only console I/O errors escape; store outcomes are printed.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut RecordStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let mut session = Session { store, console };
    session.report_load_status()?;
    loop {
        if session.step()? == Flow::Exit {
            info!("session finished");
            return Ok(());
        }
    }
}

struct Session<'a, R, W> {
    store: &'a mut RecordStore,
    console: &'a mut Console<R, W>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn report_load_status(&mut self) -> Result<()> {
        if let LoadStatus::Reset { reason } = self.store.load_status() {
            let line = format!(
                "Could not read saved employee data ({}); starting with an empty roster.",
                reason
            );
            self.console.say(line)?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        self.console.say("")?;
        for line in MENU {
            self.console.say(line)?;
        }
        let Some(selection) = self.console.prompt_line("Choose an option: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(choice) = selection.parse::<MenuChoice>() else {
            self.console.say(INVALID_CHOICE)?;
            return Ok(Flow::Continue);
        };
        debug!(?choice, "menu selection");
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::List => self.list(),
            MenuChoice::Search => self.search(),
            MenuChoice::Update => self.update(),
            MenuChoice::Sort => self.sort(),
            MenuChoice::Exit => {
                self.console.say("Exiting... Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(id) = self.console.prompt_number::<i32>("Enter Employee ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.console.prompt_line("Enter Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(department) = self.console.prompt_line("Enter Department: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(salary) = self.console.prompt_amount("Enter Salary: ")? else {
            return Ok(Flow::Exit);
        };
        let applied = self.store.add(Employee::new(id, name, department, salary));
        self.console.say("Employee added successfully!")?;
        self.report_persist(&applied.persist)?;
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(id) = self
            .console
            .prompt_number::<i32>("Enter Employee ID to Remove: ")?
        else {
            return Ok(Flow::Exit);
        };
        let applied = self.store.remove(id);
        match applied.outcome {
            RemoveOutcome::Removed(1) => self.console.say("Employee removed successfully!")?,
            RemoveOutcome::Removed(count) => self
                .console
                .say(format!("{} employees removed successfully!", count))?,
            RemoveOutcome::NotFound => self.console.say(NOT_FOUND)?,
        }
        self.report_persist(&applied.persist)?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        for line in list_lines(self.store.list()) {
            self.console.say(line)?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.console.prompt_line("Enter Employee Name or ID: ")? else {
            return Ok(Flow::Exit);
        };
        match self.store.search(&query) {
            Some(found) => {
                let line = format!("Employee Found: {}", found);
                self.console.say(line)?;
            }
            None => self.console.say(NOT_FOUND)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(id) = self
            .console
            .prompt_number::<i32>("Enter Employee ID to Update: ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(department) = self.console.prompt_line("Enter New Department: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(salary) = self.console.prompt_amount("Enter New Salary: ")? else {
            return Ok(Flow::Exit);
        };
        let applied = self.store.update(id, &department, salary);
        match applied.outcome {
            UpdateOutcome::Updated => self.console.say("Employee updated successfully!")?,
            UpdateOutcome::NotFound => self.console.say(NOT_FOUND)?,
        }
        self.report_persist(&applied.persist)?;
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> Result<Flow> {
        let Some(criterion) = self
            .console
            .prompt_line("Sort by (name/salary/department): ")?
        else {
            return Ok(Flow::Exit);
        };
        let applied = self.store.sort(&criterion);
        match &applied.outcome {
            SortOutcome::Sorted(by) => {
                let line = format!("Employees sorted by {}!", by);
                self.console.say(line)?;
            }
            SortOutcome::InvalidCriterion(_) => self.console.say("Invalid sorting criteria!")?,
        }
        self.report_persist(&applied.persist)?;
        Ok(Flow::Continue)
    }

    fn report_persist(&mut self, persist: &Result<()>) -> Result<()> {
        if let Err(err) = persist {
            self.console
                .say(format!("Error saving employee data: {:#}", err))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{employee, ids, sample_roster};
    use std::io::Cursor;
    use std::path::Path;

    fn run(store: &mut RecordStore, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_session(store, &mut console).expect("session");
        String::from_utf8(console.output().clone()).expect("utf8")
    }

    fn seeded(dir: &Path) -> RecordStore {
        let path = dir.join("employees.json");
        crate::io::roster_file::write_roster(&path, &sample_roster()).expect("seed");
        RecordStore::open(path)
    }

    #[test]
    fn menu_choice_parses_one_through_seven() {
        assert_eq!("1".parse(), Ok(MenuChoice::Add));
        assert_eq!(" 7 ".parse(), Ok(MenuChoice::Exit));
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn add_then_list_prints_record() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = RecordStore::open(temp.path().join("employees.json"));
        let out = run(&mut store, "3\n1\n5\nJane Roe\nEng\n72000\n3\n7\n");
        assert!(out.contains(EMPTY_ROSTER));
        assert!(out.contains("Employee added successfully!"));
        assert!(out.contains("ID: 5, Name: Jane Roe, Department: Eng, Salary: $72000.00"));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
        assert_eq!(store.list(), &[employee(5, "Jane Roe", "Eng", 72000.0)]);
    }

    #[test]
    fn invalid_selection_reports_and_continues() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = RecordStore::open(temp.path().join("employees.json"));
        let out = run(&mut store, "9\nhello\n7\n");
        assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn non_numeric_id_reprompts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = seeded(temp.path());
        let out = run(&mut store, "2\nabc\n2\n7\n");
        assert!(out.contains(crate::io::console::INVALID_NUMBER));
        assert!(out.contains("Employee removed successfully!"));
        assert_eq!(ids(store.list()), vec![3, 1]);
    }

    #[test]
    fn remove_missing_id_reports_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = seeded(temp.path());
        let out = run(&mut store, "2\n42\n7\n");
        assert!(out.contains(NOT_FOUND));
        assert_eq!(ids(store.list()), vec![3, 1, 2]);
    }

    #[test]
    fn search_by_name_and_id() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = seeded(temp.path());
        let out = run(&mut store, "4\nALICE\n4\n2\n4\nnobody\n7\n");
        assert!(out.contains("Employee Found: ID: 1, Name: alice"));
        assert!(out.contains("Employee Found: ID: 2, Name: Bob"));
        assert!(out.contains(NOT_FOUND));
    }

    #[test]
    fn update_and_sort_flow() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = seeded(temp.path());
        let out = run(&mut store, "5\n3\nEng\n99999\n6\nsalary\n6\nage\n7\n");
        assert!(out.contains("Employee updated successfully!"));
        assert!(out.contains("Employees sorted by salary!"));
        assert!(out.contains("Invalid sorting criteria!"));
        assert_eq!(ids(store.list()), vec![1, 2, 3]);
        assert_eq!(store.list()[2], employee(3, "Carol", "Eng", 99999.0));
    }

    #[test]
    fn end_of_input_mid_operation_ends_session() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = RecordStore::open(temp.path().join("employees.json"));
        let out = run(&mut store, "1\n5\nJane\n");
        assert!(!out.contains("Goodbye"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn reset_roster_is_announced_at_startup() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("employees.json");
        std::fs::write(&path, "{broken").expect("write");
        let mut store = RecordStore::open(path);
        let out = run(&mut store, "7\n");
        assert!(out.starts_with("Could not read saved employee data"));
    }

    #[test]
    fn invalid_utf8_name_is_stored_lossily() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut store = RecordStore::open(temp.path().join("employees.json"));
        let input = b"1\n5\nJos\xe9\nEng\n1\n3\n7\n".to_vec();
        let mut console = Console::new(Cursor::new(input), Vec::new());
        run_session(&mut store, &mut console).expect("session");
        let out = String::from_utf8(console.output().clone()).expect("utf8");
        assert!(out.contains("Employee added successfully!"));
        assert!(out.contains("Goodbye"));
        assert_eq!(store.list(), &[employee(5, "Jos\u{FFFD}", "Eng", 1.0)]);
    }

    #[test]
    fn failed_save_is_reported_and_session_continues() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("employees.json");
        std::fs::create_dir(&path).expect("mkdir");
        let mut store = RecordStore::open(path);
        let out = run(&mut store, "1\n5\nJane\nEng\n10\n3\n7\n");
        assert!(out.contains("Employee added successfully!"));
        assert!(out.contains("Error saving employee data: "));
        assert!(out.contains("ID: 5, Name: Jane, Department: Eng, Salary: $10.00"));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn list_lines_for_empty_roster() {
        assert_eq!(list_lines(&[]), vec![EMPTY_ROSTER.to_string()]);
    }
}
