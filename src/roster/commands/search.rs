use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;

use super::helpers::contains_ignore_case;

/// Substring match on name, case-insensitive. "ann" finds "Anna Lee" but
/// not "Diana Prince".
pub fn run(employees: &[Employee], term: &str) -> Result<CmdResult> {
    let matches: Vec<Employee> = employees
        .iter()
        .filter(|e| contains_ignore_case(e.name(), term))
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_employees(matches);
    if result.listed_employees.is_empty() {
        result.add_message(CmdMessage::info("No matching employees found."));
    }
    Ok(result)
}
