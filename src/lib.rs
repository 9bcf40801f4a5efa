// src/lib.rs

// 1. Literal Unions (The "Vocabulary")
// declared first so the macros are in scope for every module below
#[macro_use]
pub mod literal;

// 2. Errors
pub mod error;

// 3. Data Structures (The "Nouns")
// explicit 'pub' makes them available to main.rs
pub mod models;

// 4. Shape Discovery (The "Catalog")
pub mod catalog;

// 5. Loading (The "Plumbing")
pub mod payload;

// 6. Settings
pub mod config;

pub use catalog::{CheckPolicy, Conformance, Domain, ShapeCatalog};
pub use error::{Error, Result};
