use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

use super::helpers::persist;

/// What the collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest salary first.
    Salary,
    /// Position name ascending, case-insensitive.
    Position,
}

impl SortKey {
    /// Criteria are matched case-insensitively; anything other than
    /// "salary" or "position" is unknown.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "salary" => Some(SortKey::Salary),
            "position" => Some(SortKey::Position),
            _ => None,
        }
    }
}

/// Reorder the collection, persist the new order, and hand it back for
/// display. An unknown criterion changes nothing and writes nothing.
pub fn run<S: RecordStore>(
    employees: &mut Vec<Employee>,
    store: &mut S,
    criterion: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let key = match SortKey::parse(criterion) {
        Some(key) => key,
        None => {
            result.add_message(CmdMessage::error(
                "Invalid sorting criterion. Use 'salary' or 'position'.",
            ));
            return Ok(result);
        }
    };

    match key {
        SortKey::Salary => employees.sort_by(|a, b| b.salary().total_cmp(&a.salary())),
        SortKey::Position => employees.sort_by_key(|e| e.position().to_lowercase()),
    }

    if let Some(warning) = persist(store, employees) {
        result.add_message(warning);
    }
    Ok(result.with_listed_employees(employees.clone()))
}
