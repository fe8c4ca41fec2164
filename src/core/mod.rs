pub mod chronoforge;
pub mod engine;
