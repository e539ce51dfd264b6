//! Analysis pipeline: rules, aggregation and the composing engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::ContentAnalyzer;
pub use scoring::AggregateStats;
