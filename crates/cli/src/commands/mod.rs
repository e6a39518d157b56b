pub mod audit;
pub mod report;

pub use audit::*;
pub use report::*;
