//! Core types for the jsonforge template engine.
//!
//! This crate provides the template data model and the parsers that turn
//! a JSON5-like template document into it:
//!
//! - [`Template`] / [`TemplateNode`] - Parsed template tree
//! - [`TemplateString`] - String leaves split into literal and call segments
//! - [`GeneratorCall`] / [`Argument`] - Parsed `{{funcName(args)}}` placeholders
//! - [`Repeat`] - Cardinality bounds consumed from `{{repeat(min, max)}}` markers
//! - [`ParseError`] - Position-carrying parse errors
//!
//! # Architecture
//!
//! ```text
//! template-core (this crate)
//!    │
//!    └─── mockdata-generator  (resolves templates into concrete JSON)
//! ```
//!
//! # Example
//!
//! ```rust
//! use template_core::{Template, TemplateNode};
//!
//! let template = Template::from_str(r#"
//! {
//!   users: [
//!     '{{repeat(1, 3)}}',
//!     { name: '{{firstName()}} {{surname()}}' }
//!   ]
//! }
//! "#).unwrap();
//!
//! assert!(matches!(template.root(), TemplateNode::Object(_)));
//! ```

pub mod error;
pub mod parser;
pub mod placeholder;
pub mod template;

// Re-exports for convenience
pub use error::ParseError;
pub use template::{
    Argument, DateExpr, GeneratorCall, Repeat, Segment, Template, TemplateNode, TemplateString,
};
