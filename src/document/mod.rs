//! Document parsing and data structures module
//!
//! This module turns a .docx file into the ordered, normalized section
//! structure the rest of the pipeline consumes.

pub(crate) mod io;
pub(crate) mod loader;
pub mod models;
pub(crate) mod parsing;
pub(crate) mod position;

pub use loader::parse_document;
pub use models::*;
