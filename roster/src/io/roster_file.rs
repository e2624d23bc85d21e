//! Roster data file load/save with schema validation.
//!
//! On-disk layout (version 1), pretty-printed JSON with a trailing newline:
//!
//! ```json
//! {
//!   "version": 1,
//!   "employees": [
//!     { "id": 1, "name": "Alice", "department": "Eng", "salary": 50000.0 }
//!   ]
//! }
//! ```

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::Employee;

/// Current on-disk format version.
pub const ROSTER_VERSION: u64 = 1;

/// JSON Schema for [`ROSTER_VERSION`].
pub const ROSTER_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/roster/v1.schema.json"
));

#[derive(Debug, Serialize)]
struct RosterDocumentRef<'a> {
    version: u64,
    employees: &'a [Employee],
}

#[derive(Debug, Deserialize)]
struct RosterDocument {
    employees: Vec<Employee>,
}

/// Load the roster from disk.
///
/// Returns `Ok(None)` when the file does not exist. Unreadable, malformed,
/// wrong-version, or schema-invalid content is an error.
pub fn load_roster(path: &Path) -> Result<Option<Vec<Employee>>> {
    debug!(path = %path.display(), "loading roster");
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "roster file absent");
            return Ok(None);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read roster {}", path.display()));
        }
    };
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse roster {}", path.display()))?;
    check_version(&value)?;
    validate_schema(&value)?;
    let document: RosterDocument = serde_json::from_value(value)
        .with_context(|| format!("deserialize roster {}", path.display()))?;
    debug!(count = document.employees.len(), "roster loaded");
    Ok(Some(document.employees))
}

/// Atomically overwrite the roster file (temp file + rename).
pub fn write_roster(path: &Path, employees: &[Employee]) -> Result<()> {
    debug!(path = %path.display(), count = employees.len(), "writing roster");
    if let Some(bad) = employees.iter().find(|employee| !employee.salary.is_finite()) {
        bail!("salary for id {} is not a finite number", bad.id);
    }
    let document = RosterDocumentRef {
        version: ROSTER_VERSION,
        employees,
    };
    let mut buf = serde_json::to_string_pretty(&document).context("serialize roster json")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn check_version(value: &Value) -> Result<()> {
    match value.get("version").and_then(Value::as_u64) {
        Some(ROSTER_VERSION) => Ok(()),
        Some(other) => bail!("unsupported roster version {}", other),
        None => bail!("roster is missing a numeric version"),
    }
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(ROSTER_SCHEMA).context("parse roster schema")?;
    let compiled =
        validator_for(&schema).map_err(|err| anyhow!("invalid roster schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(value)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("roster schema validation failed: {}", messages.join("; "));
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("roster path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = temp_path(path)?;
    let written = fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp roster {}", tmp_path.display()))
        .and_then(|()| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("replace roster {}", path.display()))
        });
    if written.is_err() {
        discard_temp(&tmp_path);
    }
    written
}

/// Best-effort removal of a leftover temp file after a failed save.
fn discard_temp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => debug!(path = %tmp_path.display(), "removed temp roster"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            warn!(path = %tmp_path.display(), error = %err, "failed to remove temp roster");
        }
    }
}

/// Sibling of `path` with `.tmp` appended to the file name.
fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .with_context(|| format!("roster path has no file name {}", path.display()))?;
    let mut tmp_name = OsString::from(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
