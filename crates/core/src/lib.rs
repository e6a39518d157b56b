//! symaudit-core
//!
//! Core library for auditing a binary's imported symbols against an
//! authorized/banned function policy.
//!
//! Everything with decision logic lives here: extracting undefined symbols
//! from an `nm` dump, attributing them to libraries through their version
//! suffix, parsing rule documents and applying the wildcard / per-library /
//! per-function precedence. Frontends only parse arguments and print.

pub mod analysis;
pub mod config;
pub mod model;
pub mod policy;
pub mod services;

pub use config::AuditConfig;
pub use model::{ClassifiedSymbol, SymbolTable, UNKNOWN_LIBRARY};
pub use policy::{Policy, PolicySet, Verdict};
pub use services::{AuditError, AuditReport, AuditRunner, RunOutcome};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
