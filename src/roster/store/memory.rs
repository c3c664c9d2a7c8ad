use super::RecordStore;
use crate::error::Result;
use crate::model::Employee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Employee>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Employee>) -> Self {
        Self { records, saves: 0 }
    }

    /// The last saved snapshot.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// How many times `save` has been called. Lets tests assert that an
    /// aborted operation wrote nothing.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.records = employees.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Employee;

    pub fn employee(name: &str, position: &str) -> Employee {
        salaried(name, position, 50000.0)
    }

    pub fn salaried(name: &str, position: &str, salary: f64) -> Employee {
        Employee::new(name, 30, position, salary, "Engineering", "Berlin")
            .expect("fixture employee is valid")
    }
}
