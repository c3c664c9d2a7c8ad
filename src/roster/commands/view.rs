use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;

pub fn run(employees: &[Employee]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_employees(employees.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn lists_all_records_in_collection_order() {
        let employees = vec![
            fixtures::employee("Bob Smith", "Project Manager"),
            fixtures::employee("Alice Johnson", "Software Engineer"),
        ];

        let result = run(&employees).unwrap();

        let names: Vec<&str> = result.listed_employees.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Bob Smith", "Alice Johnson"]);
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let result = run(&[]).unwrap();
        assert!(result.listed_employees.is_empty());
    }
}
