use crate::model::Employee;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employees: Vec<Employee>,
    pub listed_employees: Vec<Employee>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_employees(mut self, employees: Vec<Employee>) -> Self {
        self.affected_employees = employees;
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }
}

/// Field values for a new record. Numeric fields arrive already parsed; the
/// UI owns turning raw text into numbers.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: u32,
    pub position: String,
    pub salary: f64,
    pub department: String,
    pub location: String,
}

/// Per-field replacements for an update. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub age: Option<u32>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub department: Option<String>,
    pub location: Option<String>,
}
