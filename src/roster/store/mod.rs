//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The
//! [`RecordStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole collection
//!   is one pretty-printed JSON array, four-space indented, at a path the
//!   caller injects.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence; counts writes so tests can assert an aborted operation
//!   never saved.
//!
//! ## Persistence Model
//!
//! Deliberately whole-collection: `load` reads the entire backing file,
//! `save` rewrites it. There is no incremental write, no transaction log,
//! and no atomic rename, so a crash mid-save can truncate the file. A
//! single process and a single session are assumed; concurrent external
//! modification is last-writer-wins.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for employee persistence.
pub trait RecordStore {
    /// Read the full collection from the backing store, in stored order.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace the backing store's content with `employees`.
    fn save(&mut self, employees: &[Employee]) -> Result<()>;
}
