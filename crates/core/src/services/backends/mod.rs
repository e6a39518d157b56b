pub mod nm;

pub use nm::NmSource;
