//! Use cases.
//!
//! The pipeline orchestrates the command, search, response and delivery
//! modules. It depends on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod pipeline;
