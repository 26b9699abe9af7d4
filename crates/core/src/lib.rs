//! Shared domain types for the MADS backend.
//!
//! Holds the error taxonomy, common type aliases, and the server-side
//! form validation shared by the contact and job application endpoints.

pub mod error;
pub mod forms;
pub mod types;
