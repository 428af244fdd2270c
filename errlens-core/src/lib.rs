//! errlens-core: errors, configuration, and tracing shared by the errlens
//! analysis engine and its command-line front end.

pub mod config;
pub mod errors;
pub mod tracing;
