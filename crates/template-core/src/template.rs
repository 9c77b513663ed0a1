//! Template data model.
//!
//! A parsed template is a tree of [`TemplateNode`]s. String leaves are
//! [`TemplateString`]s: sequences of literal text and generator calls.
//! Arrays whose first element was a `{{repeat(...)}}` marker carry a
//! [`Repeat`] describing how many times the remaining element templates
//! are to be cloned at generation time.

use crate::error::ParseError;
use crate::parser;
use std::fs;
use std::path::Path;

/// A parsed template document.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    root: TemplateNode,
}

impl Template {
    /// Parse a template from a JSON5-like source string.
    pub fn from_str(source: &str) -> Result<Self, ParseError> {
        let root = parser::parse_document(source)?;
        Ok(Self { root })
    }

    /// Load and parse a template file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// The root node of the template.
    pub fn root(&self) -> &TemplateNode {
        &self.root
    }
}

/// A single node in the template tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateNode {
    /// Object with insertion-ordered members
    Object(Vec<(String, TemplateNode)>),

    /// Array, optionally headed by a repeat marker
    Array {
        /// Repeat marker consumed from the first element, if present
        repeat: Option<Repeat>,
        /// Element templates (excluding the marker)
        elements: Vec<TemplateNode>,
    },

    /// String leaf, possibly containing generator calls
    Text(TemplateString),

    /// Integer literal
    Integer(i64),

    /// Floating-point literal
    Float(f64),

    /// Boolean literal
    Bool(bool),

    /// Null literal
    Null,
}

/// Cardinality bounds consumed from a `{{repeat(min, max)}}` marker.
///
/// The single-argument form `{{repeat(n)}}` parses as `min == max == n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    /// Minimum number of repetitions (inclusive)
    pub min: u32,
    /// Maximum number of repetitions (inclusive)
    pub max: u32,
}

/// A string leaf split into literal and placeholder segments.
///
/// `"{{firstName()}} {{surname()}}"` becomes two call segments separated
/// by a literal `" "`. A plain string is a single literal segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateString {
    /// Ordered segments of the string
    pub segments: Vec<Segment>,
}

impl TemplateString {
    /// Create a template string holding only literal text.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Literal(text.into())],
        }
    }

    /// The single generator call, if this string is exactly one call
    /// with no surrounding literal text.
    ///
    /// Such strings resolve to the call's native type (boolean, number,
    /// ...); everything else resolves to a concatenated string.
    pub fn as_single_call(&self) -> Option<&GeneratorCall> {
        match self.segments.as_slice() {
            [Segment::Call(call)] => Some(call),
            _ => None,
        }
    }

    /// The literal text, if this string contains no generator calls.
    pub fn as_literal(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [Segment::Literal(text)] => Some(text),
            [] => Some(""),
            _ => None,
        }
    }

    /// Whether any segment is a call to the named function.
    pub fn calls_function(&self, name: &str) -> bool {
        self.segments.iter().any(|segment| match segment {
            Segment::Call(call) => call.name == name,
            Segment::Literal(_) => false,
        })
    }
}

/// One segment of a [`TemplateString`].
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text copied through unchanged
    Literal(String),
    /// A `{{...}}` generator call
    Call(GeneratorCall),
}

/// A parsed `{{funcName(arg, ...)}}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorCall {
    /// Function name (e.g. `firstName`, `integer`)
    pub name: String,
    /// Literal arguments
    pub args: Vec<Argument>,
}

impl GeneratorCall {
    /// Create a call with no arguments.
    pub fn nullary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// A literal argument inside a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Integer literal
    Int(i64),
    /// Floating-point literal
    Float(f64),
    /// Quoted string literal
    Str(String),
    /// Boolean literal
    Bool(bool),
    /// A `new Date(...)` expression
    Date(DateExpr),
}

/// A `new Date(...)` argument expression.
///
/// Follows JS `Date` constructor semantics: `new Date()` is the current
/// instant, and in the component form the month is 0-based
/// (`new Date(2017, 0, 1)` is 2017-01-01).
#[derive(Debug, Clone, PartialEq)]
pub enum DateExpr {
    /// `new Date()` — the current instant at generation time
    Now,
    /// `new Date(year, month, day, hour, minute, second)` with trailing
    /// components optional
    Components(Vec<i64>),
}
