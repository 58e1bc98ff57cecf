//! Command-line front end for the `tabula` binary (not part of the lib API).

pub mod args;
pub mod input;
