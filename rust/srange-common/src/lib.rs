//! Core definitions (error type and result helpers), relied upon by all srange crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
