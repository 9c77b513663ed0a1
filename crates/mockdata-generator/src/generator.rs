//! Main generator resolving templates into concrete JSON.

use crate::error::GeneratorError;
use crate::functions::generate_call;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use template_core::{Segment, Template, TemplateNode};

/// Data generator that resolves a template into mock JSON documents.
///
/// The generator uses a seeded random number generator to ensure
/// reproducible results across runs with the same seed and template.
pub struct DataGenerator {
    /// Template defining the document shape and placeholders
    template: Template,
    /// Seed the RNG was created from
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Stack of repetition indices for nested repeat blocks
    indices: Vec<u64>,
}

impl DataGenerator {
    /// Create a new generator for the given template and seed.
    pub fn new(template: Template, seed: u64) -> Self {
        Self {
            template,
            seed,
            rng: StdRng::seed_from_u64(seed),
            indices: Vec::new(),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a reference to the template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Resolve the template into a document.
    ///
    /// Calling this repeatedly continues the random stream, so a second
    /// call produces a different (but still seed-determined) document.
    pub fn generate(&mut self) -> Result<Value, GeneratorError> {
        let mut ctx = Context {
            rng: &mut self.rng,
            indices: &mut self.indices,
        };
        ctx.resolve(self.template.root())
    }
}

struct Context<'a> {
    rng: &'a mut StdRng,
    indices: &'a mut Vec<u64>,
}

impl Context<'_> {
    fn resolve(&mut self, node: &TemplateNode) -> Result<Value, GeneratorError> {
        match node {
            TemplateNode::Object(members) => {
                let mut map = Map::with_capacity(members.len());
                for (key, value) in members {
                    map.insert(key.clone(), self.resolve(value)?);
                }
                Ok(Value::Object(map))
            }

            TemplateNode::Array { repeat, elements } => match repeat {
                Some(repeat) => {
                    let count = self.rng.random_range(repeat.min..=repeat.max);
                    let mut items = Vec::with_capacity(count as usize * elements.len());
                    for index in 0..count {
                        self.indices.push(u64::from(index));
                        for element in elements {
                            match self.resolve(element) {
                                Ok(item) => items.push(item),
                                Err(err) => {
                                    self.indices.pop();
                                    return Err(err);
                                }
                            }
                        }
                        self.indices.pop();
                    }
                    Ok(Value::Array(items))
                }
                None => {
                    let mut items = Vec::with_capacity(elements.len());
                    for element in elements {
                        items.push(self.resolve(element)?);
                    }
                    Ok(Value::Array(items))
                }
            },

            TemplateNode::Text(text) => {
                // A lone call keeps its native type; mixed content
                // renders to a concatenated string.
                if let Some(call) = text.as_single_call() {
                    return generate_call(call, self.rng, self.indices);
                }

                let mut rendered = String::new();
                for segment in &text.segments {
                    match segment {
                        Segment::Literal(literal) => rendered.push_str(literal),
                        Segment::Call(call) => {
                            let value = generate_call(call, self.rng, self.indices)?;
                            push_rendered(&mut rendered, &value);
                        }
                    }
                }
                Ok(Value::String(rendered))
            }

            TemplateNode::Integer(value) => Ok(Value::from(*value)),
            TemplateNode::Float(value) => Ok(Value::from(*value)),
            TemplateNode::Bool(value) => Ok(Value::Bool(*value)),
            TemplateNode::Null => Ok(Value::Null),
        }
    }
}

/// Render a resolved value into string context (mixed template strings).
fn push_rendered(out: &mut String, value: &Value) {
    match value {
        Value::String(text) => out.push_str(text),
        other => out.push_str(&other.to_string()),
    }
}
