use crate::commands::{CmdMessage, CmdResult, EmployeeUpdate};
use crate::error::Result;
use crate::model::{Employee, InvalidField};
use crate::store::RecordStore;

use super::helpers::{eq_ignore_case, persist};

/// Update the first record whose name matches case-insensitively.
///
/// All-or-nothing: changes are staged on a copy of the record and committed
/// only when every supplied field is accepted, so a rejected value leaves
/// the stored record untouched.
pub fn run<S: RecordStore>(
    employees: &mut Vec<Employee>,
    store: &mut S,
    name: &str,
    update: EmployeeUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let index = match employees.iter().position(|e| eq_ignore_case(e.name(), name)) {
        Some(index) => index,
        None => {
            result.add_message(CmdMessage::error(format!(
                "Employee '{}' not found.",
                name
            )));
            return Ok(result);
        }
    };

    let mut updated = employees[index].clone();
    if let Some(age) = update.age {
        if !updated.set_age(age).is_accepted() {
            result.add_message(CmdMessage::error(format!(
                "Update aborted: {}",
                InvalidField::Age(age)
            )));
            return Ok(result);
        }
    }
    if let Some(position) = update.position {
        updated.set_position(position);
    }
    if let Some(salary) = update.salary {
        if !updated.set_salary(salary).is_accepted() {
            result.add_message(CmdMessage::error(format!(
                "Update aborted: {}",
                InvalidField::Salary(salary)
            )));
            return Ok(result);
        }
    }
    if let Some(department) = update.department {
        updated.set_department(department);
    }
    if let Some(location) = update.location {
        updated.set_location(location);
    }

    employees[index] = updated.clone();
    if let Some(warning) = persist(store, employees) {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Employee '{}' updated successfully!",
        name
    )));
    result.affected_employees.push(updated);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn updates_only_the_first_match() {
        let mut employees = vec![
            fixtures::employee("Jane Roe", "Designer"),
            fixtures::employee("Jane Roe", "Architect"),
        ];
        let mut store = InMemoryStore::new();
        let update = EmployeeUpdate {
            age: Some(41),
            ..EmployeeUpdate::default()
        };

        run(&mut employees, &mut store, "JANE ROE", update).unwrap();

        assert_eq!(employees[0].age(), 41);
        assert_eq!(employees[1].age(), 30);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn blank_fields_keep_current_values() {
        let mut employees = vec![fixtures::employee("Jane Roe", "Designer")];
        let mut store = InMemoryStore::new();
        let update = EmployeeUpdate {
            location: Some("Oslo".to_string()),
            ..EmployeeUpdate::default()
        };

        run(&mut employees, &mut store, "Jane Roe", update).unwrap();

        assert_eq!(employees[0].location(), "Oslo");
        assert_eq!(employees[0].age(), 30);
        assert_eq!(employees[0].position(), "Designer");
        assert_eq!(employees[0].salary(), 50000.0);
    }

    #[test]
    fn rejected_value_changes_nothing() {
        let mut employees = vec![fixtures::employee("Jane Roe", "Designer")];
        let mut store = InMemoryStore::new();
        let before = employees[0].clone();
        // Position would be accepted, but the negative salary aborts the
        // whole update.
        let update = EmployeeUpdate {
            position: Some("Architect".to_string()),
            salary: Some(-5.0),
            ..EmployeeUpdate::default()
        };

        let result = run(&mut employees, &mut store, "Jane Roe", update).unwrap();

        assert_eq!(employees[0], before);
        assert_eq!(store.saves(), 0);
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }

    #[test]
    fn unknown_name_reports_not_found() {
        let mut employees = vec![fixtures::employee("Jane Roe", "Designer")];
        let mut store = InMemoryStore::new();

        let result = run(
            &mut employees,
            &mut store,
            "Nobody",
            EmployeeUpdate::default(),
        )
        .unwrap();

        assert_eq!(store.saves(), 0);
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("not found"));
    }
}
