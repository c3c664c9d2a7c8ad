use crate::commands::{CmdMessage, CmdResult, NewEmployee};
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

use super::helpers::{eq_ignore_case, persist};

pub fn run<S: RecordStore>(
    employees: &mut Vec<Employee>,
    store: &mut S,
    input: NewEmployee,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let duplicate = employees.iter().any(|e| {
        eq_ignore_case(e.name(), &input.name) && eq_ignore_case(e.position(), &input.position)
    });
    if duplicate {
        result.add_message(CmdMessage::error(
            "Error: Employee with the same name and position already exists.",
        ));
        return Ok(result);
    }

    let employee = match Employee::new(
        input.name,
        input.age,
        input.position,
        input.salary,
        input.department,
        input.location,
    ) {
        Ok(employee) => employee,
        Err(reason) => {
            result.add_message(CmdMessage::error(format!(
                "Invalid employee record: {}",
                reason
            )));
            return Ok(result);
        }
    };

    employees.push(employee.clone());
    if let Some(warning) = persist(store, employees) {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Employee '{}' added successfully!",
        employee.name()
    )));
    result.affected_employees.push(employee);

    Ok(result)
}
