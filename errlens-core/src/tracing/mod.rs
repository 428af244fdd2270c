//! Observability for errlens.
//! `tracing` crate with `EnvFilter`; every event goes to stderr.

pub mod setup;

pub use setup::init_tracing;
