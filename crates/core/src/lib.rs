//! `eduspot-core`: shared building blocks for the console.
//!
//! This crate contains identifiers, the record traits every collection is
//! built on, and the error taxonomy. It has no IO and no async.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{DepartmentScoped, Entity, Record};
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, DepartmentId, RecordId, StudentId, TeacherId};
