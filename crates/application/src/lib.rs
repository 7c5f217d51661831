//! Application layer - Use cases composing the domain transformations with ports

pub mod extract;
pub mod udt;

pub use extract::TagExtractor;
pub use udt::{BuildSummary, UdtBuilder};
