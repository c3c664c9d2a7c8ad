use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

use super::helpers::{eq_ignore_case, persist};

/// Remove every record whose name matches case-insensitively. Unlike
/// update, which touches only the first match, delete sweeps them all.
pub fn run<S: RecordStore>(
    employees: &mut Vec<Employee>,
    store: &mut S,
    name: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut removed = Vec::new();
    employees.retain(|e| {
        if eq_ignore_case(e.name(), name) {
            removed.push(e.clone());
            false
        } else {
            true
        }
    });

    if removed.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "Employee '{}' not found.",
            name
        )));
        return Ok(result);
    }

    if let Some(warning) = persist(store, employees) {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Employee '{}' deleted successfully.",
        name
    )));
    result.affected_employees = removed;

    Ok(result)
}
