//! Symbol sources and the audit pipeline that drives them.

pub mod audit;
pub mod backends;
pub mod source;

pub use audit::{AuditError, AuditReport, AuditRunner, RunOutcome, RunStage};
pub use source::{SourceError, StaticSource, SymbolSource};
