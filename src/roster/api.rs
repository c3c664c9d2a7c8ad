//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all roster operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the resident employee collection for the process lifetime
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over RecordStore
//!
//! `RosterApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use std::io;

use crate::commands;
use crate::error::{Result, RosterError};
use crate::model::{default_employees, Employee};
use crate::store::RecordStore;

/// The main API facade for roster operations.
///
/// Holds the in-memory collection loaded at [`RosterApi::open`] and mirrors
/// it to the store on every mutation.
pub struct RosterApi<S: RecordStore> {
    store: S,
    employees: Vec<Employee>,
}

impl<S: RecordStore> RosterApi<S> {
    /// Load the collection from `store`, then seed the default records if it
    /// came back empty.
    ///
    /// Construction never fails: missing or unreadable backing data falls
    /// back to an empty collection, with an explanatory message for the UI.
    pub fn open(store: S) -> (Self, Vec<commands::CmdMessage>) {
        let mut messages = Vec::new();

        let employees = match store.load() {
            Ok(employees) => employees,
            Err(RosterError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                messages.push(commands::CmdMessage::info(
                    "Employee data not found. Initializing default records.",
                ));
                Vec::new()
            }
            Err(e) => {
                messages.push(commands::CmdMessage::warning(format!(
                    "Error reading employee data: {}. Starting fresh.",
                    e
                )));
                Vec::new()
            }
        };

        let mut api = Self { store, employees };
        if api.employees.is_empty() {
            api.employees = default_employees();
            if let Some(warning) = commands::helpers::persist(&mut api.store, &api.employees) {
                messages.push(warning);
            }
        }

        (api, messages)
    }

    pub fn add_employee(&mut self, input: commands::NewEmployee) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.employees, &mut self.store, input)
    }

    pub fn view_employees(&self) -> Result<commands::CmdResult> {
        commands::view::run(&self.employees)
    }

    pub fn update_employee(
        &mut self,
        name: &str,
        update: commands::EmployeeUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.employees, &mut self.store, name, update)
    }

    pub fn delete_employees(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.employees, &mut self.store, name)
    }

    pub fn search_employees(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.employees, term)
    }

    pub fn sort_employees(&mut self, criterion: &str) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.employees, &mut self.store, criterion)
    }

    /// The resident collection, in storage order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

pub use commands::{CmdMessage, CmdResult, EmployeeUpdate, MessageLevel, NewEmployee};
