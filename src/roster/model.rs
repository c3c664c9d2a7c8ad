use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidField {
    #[error("age must be a positive whole number (got {0})")]
    Age(u32),

    #[error("salary must be a non-negative number (got {0})")]
    Salary(f64),
}

/// Outcome of a validating setter. A rejected value leaves the previous
/// value in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SetOutcome {
    Accepted,
    Rejected,
}

impl SetOutcome {
    pub fn is_accepted(self) -> bool {
        self == SetOutcome::Accepted
    }
}

/// One employee record.
///
/// Name, position, department, and location are free text (empty allowed).
/// Age must be strictly positive and salary non-negative and finite; these
/// rules hold everywhere a value can enter (construction, deserialization,
/// and the setters). Records have no identifier: lookups go by
/// case-insensitive name.
///
/// The serialized form is a flat object with keys in declaration order:
/// name, age, position, salary, department, location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEmployee")]
pub struct Employee {
    name: String,
    age: u32,
    position: String,
    salary: f64,
    department: String,
    location: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        position: impl Into<String>,
        salary: f64,
        department: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, InvalidField> {
        if age == 0 {
            return Err(InvalidField::Age(age));
        }
        if !(salary.is_finite() && salary >= 0.0) {
            return Err(InvalidField::Salary(salary));
        }
        Ok(Self {
            name: name.into(),
            age,
            position: position.into(),
            salary,
            department: department.into(),
            location: location.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        self.position = position.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Apply a new age. Zero is rejected and the previous age kept.
    pub fn set_age(&mut self, age: u32) -> SetOutcome {
        if age == 0 {
            return SetOutcome::Rejected;
        }
        self.age = age;
        SetOutcome::Accepted
    }

    /// Apply a new salary. Negative or non-finite values are rejected and
    /// the previous salary kept.
    pub fn set_salary(&mut self, salary: f64) -> SetOutcome {
        if !(salary.is_finite() && salary >= 0.0) {
            return SetOutcome::Rejected;
        }
        self.salary = salary;
        SetOutcome::Accepted
    }
}

/// Unvalidated mirror of [`Employee`]. Deserialization funnels through this
/// so loaded records pass the same checks as constructed ones.
#[derive(Deserialize)]
struct RawEmployee {
    name: String,
    age: u32,
    position: String,
    salary: f64,
    department: String,
    location: String,
}

impl TryFrom<RawEmployee> for Employee {
    type Error = InvalidField;

    fn try_from(raw: RawEmployee) -> Result<Self, Self::Error> {
        Employee::new(
            raw.name,
            raw.age,
            raw.position,
            raw.salary,
            raw.department,
            raw.location,
        )
    }
}

/// The records a brand-new (or unreadable) store is seeded with.
pub fn default_employees() -> Vec<Employee> {
    vec![
        Employee {
            name: "Alice Johnson".to_string(),
            age: 30,
            position: "Software Engineer".to_string(),
            salary: 80000.0,
            department: "IT".to_string(),
            location: "New York".to_string(),
        },
        Employee {
            name: "Bob Smith".to_string(),
            age: 40,
            position: "Project Manager".to_string(),
            salary: 95000.0,
            department: "Management".to_string(),
            location: "San Francisco".to_string(),
        },
        Employee {
            name: "Charlie Brown".to_string(),
            age: 28,
            position: "Data Analyst".to_string(),
            salary: 70000.0,
            department: "Finance".to_string(),
            location: "Chicago".to_string(),
        },
        Employee {
            name: "Diana Prince".to_string(),
            age: 35,
            position: "HR Specialist".to_string(),
            salary: 65000.0,
            department: "Human Resources".to_string(),
            location: "Seattle".to_string(),
        },
    ]
}
