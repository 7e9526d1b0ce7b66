pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod filter;
pub mod glyphs;
pub mod loader;
pub mod progress;
// cmd and reports belong to the binary (main.rs).
