//! Lorem ipsum text generator.

use crate::error::GeneratorError;
use crate::functions::{at_most, int_arg, str_arg};
use fake::faker::lorem::raw::{Paragraphs, Sentences, Words};
use fake::locales::EN;
use fake::Fake;
use rand::Rng;
use serde_json::Value;
use template_core::Argument;

/// `lorem(count = 1, units = "words")` — lorem ipsum filler text.
///
/// Units: `words` (space-joined), `sentences` (space-joined), or
/// `paragraphs` (newline-joined).
pub fn lorem<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    at_most("lorem", args, 2)?;
    let count = int_arg("lorem", args, 0)?.unwrap_or(1);
    let units = str_arg("lorem", args, 1)?.unwrap_or("words");

    let count = usize::try_from(count).map_err(|_| {
        GeneratorError::bad_arguments("lorem", format!("count ({count}) must be non-negative"))
    })?;

    let text = match units {
        "words" => {
            let words: Vec<String> = Words(EN, count..count + 1).fake_with_rng(rng);
            words.join(" ")
        }
        "sentences" => {
            let sentences: Vec<String> = Sentences(EN, count..count + 1).fake_with_rng(rng);
            sentences.join(" ")
        }
        "paragraphs" => {
            let paragraphs: Vec<String> = Paragraphs(EN, count..count + 1).fake_with_rng(rng);
            paragraphs.join("\n")
        }
        other => {
            return Err(GeneratorError::bad_arguments(
                "lorem",
                format!("units must be 'words', 'sentences', or 'paragraphs', found '{other}'"),
            ))
        }
    };

    Ok(Value::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_word() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(1), Argument::Str("words".to_string())];

        let value = lorem(&mut rng, &args).unwrap();
        let text = value.as_str().expect("string value");
        assert!(!text.is_empty());
        assert!(!text.contains(' '));
    }

    #[test]
    fn test_word_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(5), Argument::Str("words".to_string())];

        let value = lorem(&mut rng, &args).unwrap();
        let text = value.as_str().expect("string value");
        assert_eq!(text.split(' ').count(), 5);
    }

    #[test]
    fn test_default_is_one_word() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = lorem(&mut rng, &[]).unwrap();
        assert!(!value.as_str().expect("string value").contains(' '));
    }

    #[test]
    fn test_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(2), Argument::Str("sentences".to_string())];

        let value = lorem(&mut rng, &args).unwrap();
        assert!(!value.as_str().expect("string value").is_empty());
    }

    #[test]
    fn test_unknown_units_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(1), Argument::Str("bogus".to_string())];

        let result = lorem(&mut rng, &args);
        assert!(matches!(result, Err(GeneratorError::BadArguments { .. })));
    }
}
