pub mod builder;

pub use builder::{BuildSummary, UdtBuilder};
