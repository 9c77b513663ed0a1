//! Generator functions for placeholder calls.
//!
//! This module dispatches each parsed `{{funcName(args)}}` call to the
//! function that produces its value. Functions are grouped by value
//! family; each takes the engine RNG so output stays deterministic for
//! a given seed.

pub mod datetime;
pub mod identifier;
pub mod lorem;
pub mod numeric;
pub mod person;

use crate::error::GeneratorError;
use rand::Rng;
use serde_json::Value;
use template_core::{Argument, DateExpr, GeneratorCall};

/// Resolve a single generator call into a JSON value.
///
/// `indices` is the stack of repetition indices of the enclosing repeat
/// blocks, innermost last; `index()` reads it.
pub fn generate_call<R: Rng>(
    call: &GeneratorCall,
    rng: &mut R,
    indices: &[u64],
) -> Result<Value, GeneratorError> {
    match call.name.as_str() {
        "country" => person::country(rng, &call.args),
        "firstName" => person::first_name(rng, &call.args),
        "surname" => person::surname(rng, &call.args),
        "company" => person::company(rng, &call.args),
        "email" => person::email(rng, &call.args),
        "objectId" => identifier::object_id(rng, &call.args),
        "guid" => identifier::guid(rng, &call.args),
        "bool" => numeric::boolean(rng, &call.args),
        "integer" => numeric::integer(rng, &call.args),
        "floating" => numeric::floating(rng, &call.args),
        "date" => datetime::date(rng, &call.args),
        "lorem" => lorem::lorem(rng, &call.args),
        "index" => index(&call.args, indices),
        name => Err(GeneratorError::UnknownFunction(name.to_string())),
    }
}

/// `index(start = 0)` — repetition index within the nearest repeat block.
fn index(args: &[Argument], indices: &[u64]) -> Result<Value, GeneratorError> {
    at_most("index", args, 1)?;
    let start = int_arg("index", args, 0)?.unwrap_or(0);
    let current = indices
        .last()
        .copied()
        .ok_or(GeneratorError::IndexOutsideRepeat)?;
    Ok(Value::from(start.wrapping_add(current as i64)))
}

// ============================================================================
// Argument helpers
// ============================================================================

pub(crate) fn ensure_no_args(
    function: &'static str,
    args: &[Argument],
) -> Result<(), GeneratorError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::bad_arguments(
            function,
            format!("takes no arguments, found {}", args.len()),
        ))
    }
}

pub(crate) fn at_most(
    function: &'static str,
    args: &[Argument],
    count: usize,
) -> Result<(), GeneratorError> {
    if args.len() <= count {
        Ok(())
    } else {
        Err(GeneratorError::bad_arguments(
            function,
            format!("takes at most {count} arguments, found {}", args.len()),
        ))
    }
}

/// Integer argument at `idx`, or `None` when absent.
pub(crate) fn int_arg(
    function: &'static str,
    args: &[Argument],
    idx: usize,
) -> Result<Option<i64>, GeneratorError> {
    match args.get(idx) {
        None => Ok(None),
        Some(Argument::Int(value)) => Ok(Some(*value)),
        Some(other) => Err(GeneratorError::bad_arguments(
            function,
            format!("argument {} must be an integer, found {other:?}", idx + 1),
        )),
    }
}

/// Numeric argument at `idx` widened to f64, or `None` when absent.
pub(crate) fn float_arg(
    function: &'static str,
    args: &[Argument],
    idx: usize,
) -> Result<Option<f64>, GeneratorError> {
    match args.get(idx) {
        None => Ok(None),
        Some(Argument::Int(value)) => Ok(Some(*value as f64)),
        Some(Argument::Float(value)) => Ok(Some(*value)),
        Some(other) => Err(GeneratorError::bad_arguments(
            function,
            format!("argument {} must be a number, found {other:?}", idx + 1),
        )),
    }
}

/// String argument at `idx`, or `None` when absent.
pub(crate) fn str_arg<'a>(
    function: &'static str,
    args: &'a [Argument],
    idx: usize,
) -> Result<Option<&'a str>, GeneratorError> {
    match args.get(idx) {
        None => Ok(None),
        Some(Argument::Str(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(GeneratorError::bad_arguments(
            function,
            format!("argument {} must be a string, found {other:?}", idx + 1),
        )),
    }
}

/// `new Date(...)` argument at `idx`, or `None` when absent.
pub(crate) fn date_arg<'a>(
    function: &'static str,
    args: &'a [Argument],
    idx: usize,
) -> Result<Option<&'a DateExpr>, GeneratorError> {
    match args.get(idx) {
        None => Ok(None),
        Some(Argument::Date(expr)) => Ok(Some(expr)),
        Some(other) => Err(GeneratorError::bad_arguments(
            function,
            format!(
                "argument {} must be a 'new Date(...)' expression, found {other:?}",
                idx + 1
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unknown_function() {
        let mut rng = StdRng::seed_from_u64(42);
        let call = GeneratorCall::nullary("frobnicate");

        let result = generate_call(&call, &mut rng, &[]);
        assert!(matches!(result, Err(GeneratorError::UnknownFunction(name)) if name == "frobnicate"));
    }

    #[test]
    fn test_index_inside_repeat() {
        let call = GeneratorCall::nullary("index");
        let mut rng = StdRng::seed_from_u64(42);

        let value = generate_call(&call, &mut rng, &[0, 7]).unwrap();
        assert_eq!(value, Value::from(7));
    }

    #[test]
    fn test_index_with_start_offset() {
        let call = GeneratorCall {
            name: "index".to_string(),
            args: vec![Argument::Int(100)],
        };
        let mut rng = StdRng::seed_from_u64(42);

        let value = generate_call(&call, &mut rng, &[3]).unwrap();
        assert_eq!(value, Value::from(103));
    }

    #[test]
    fn test_index_outside_repeat() {
        let call = GeneratorCall::nullary("index");
        let mut rng = StdRng::seed_from_u64(42);

        let result = generate_call(&call, &mut rng, &[]);
        assert!(matches!(result, Err(GeneratorError::IndexOutsideRepeat)));
    }

    #[test]
    fn test_arity_check() {
        let call = GeneratorCall {
            name: "bool".to_string(),
            args: vec![Argument::Int(1)],
        };
        let mut rng = StdRng::seed_from_u64(42);

        let result = generate_call(&call, &mut rng, &[]);
        assert!(matches!(result, Err(GeneratorError::BadArguments { .. })));
    }
}
