//! External service clients.
//!
//! - [`sheets`] - one-way form submission forwarding to the spreadsheet
//!   web-app collaborator

pub mod sheets;

pub use sheets::{FormSubmission, SheetsClient};
