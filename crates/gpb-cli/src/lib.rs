//! # gpb-cli — Gantry Engine for Paintbox Command-Line Interface
//!
//! Thin clap front-end over the configuration package: load an engine
//! manifest, compile its `configuration:` section, and check or resolve
//! a settings document against it.
//!
//! ## Subcommands
//!
//! - `validate` — check a settings document, reporting every violation
//! - `resolve` — validate and print the resolved settings table as JSON
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no business logic here.
//! - The exit status is the contract: zero on success, non-zero on any
//!   violation, with the aggregated report on stderr.

pub mod input;
pub mod resolve;
pub mod validate;
