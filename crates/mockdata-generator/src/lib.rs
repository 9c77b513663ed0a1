//! Placeholder resolution engine for jsonforge.
//!
//! This crate provides the `DataGenerator` which resolves a parsed
//! template into concrete mock JSON. The generator uses a seeded RNG to
//! ensure reproducibility across runs with the same seed.
//!
//! # Architecture
//!
//! ```text
//! Template (JSON5 source)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! │  - index stack  │
//! └────────┬────────┘
//!          │
//!          ▼
//!    serde_json::Value (repeat blocks expanded, placeholders resolved)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockdata_generator::DataGenerator;
//! use template_core::Template;
//!
//! let template = Template::from_str(r#"
//! {
//!   users: [
//!     '{{repeat(1, 3)}}',
//!     {
//!       id: '{{objectId()}}',
//!       name: '{{firstName()}} {{surname()}}',
//!       age: '{{integer(20, 40)}}'
//!     }
//!   ]
//! }
//! "#).unwrap();
//!
//! let mut generator = DataGenerator::new(template, 42);
//! let doc = generator.generate().unwrap();
//! assert!(doc["users"].is_array());
//! ```
//!
//! # Generator functions
//!
//! The following placeholder functions are supported:
//!
//! - `repeat(n)` / `repeat(min, max)` - array cardinality marker (consumed at parse time)
//! - `index(start?)` - repetition index within the nearest repeat block
//! - `objectId` - 24-char hex id
//! - `guid` - UUID v4
//! - `bool` - random boolean
//! - `integer(min?, max?)` - random integer
//! - `floating(min?, max?, decimals?, format?)` - random float, optionally formatted
//! - `date(min?, max?, format?)` - random instant between two `new Date(...)` bounds
//! - `firstName` / `surname` - person names
//! - `company` - company name
//! - `email` - email address
//! - `country` - country name
//! - `lorem(count?, units?)` - lorem ipsum words/sentences/paragraphs

pub mod error;
pub mod format;
pub mod functions;
pub mod generator;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::DataGenerator;
