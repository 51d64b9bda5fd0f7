//! Source specifications and normalization

pub mod git_source;

pub use git_source::{GitSource, Pin, SourceOptions};
