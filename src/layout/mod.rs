//! Fixed-form layout: geometry table plus the header and table engines.

pub mod config;
pub mod header;
pub mod table;
