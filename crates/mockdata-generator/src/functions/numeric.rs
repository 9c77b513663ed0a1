//! Boolean and numeric value generators.

use crate::error::GeneratorError;
use crate::format::format_number;
use crate::functions::{at_most, ensure_no_args, float_arg, int_arg, str_arg};
use rand::Rng;
use serde_json::Value;
use template_core::Argument;

/// `bool()` — random boolean, even odds.
pub fn boolean<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("bool", args)?;
    Ok(Value::Bool(rng.random_bool(0.5)))
}

/// `integer(min = 0, max = 100)` — random integer, bounds inclusive.
pub fn integer<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    at_most("integer", args, 2)?;
    let min = int_arg("integer", args, 0)?.unwrap_or(0);
    let max = int_arg("integer", args, 1)?.unwrap_or(100);
    if min > max {
        return Err(GeneratorError::bad_arguments(
            "integer",
            format!("min ({min}) is greater than max ({max})"),
        ));
    }
    Ok(Value::from(rng.random_range(min..=max)))
}

/// `floating(min = 0, max = 1000, decimals = 2, format?)` — random float.
///
/// Without a format string the result is a JSON number rounded to
/// `decimals` places; with one (e.g. `"$0,0.00"`) it is a formatted
/// string.
pub fn floating<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    at_most("floating", args, 4)?;
    let min = float_arg("floating", args, 0)?.unwrap_or(0.0);
    let max = float_arg("floating", args, 1)?.unwrap_or(1000.0);
    let decimals = int_arg("floating", args, 2)?.unwrap_or(2);
    let format = str_arg("floating", args, 3)?;

    if min > max {
        return Err(GeneratorError::bad_arguments(
            "floating",
            format!("min ({min}) is greater than max ({max})"),
        ));
    }
    if !(0..=15).contains(&decimals) {
        return Err(GeneratorError::bad_arguments(
            "floating",
            format!("decimals ({decimals}) must be between 0 and 15"),
        ));
    }

    let value = rng.random_range(min..=max);

    match format {
        Some(format) => {
            let rendered = format_number(value, format)
                .map_err(|reason| GeneratorError::bad_arguments("floating", reason))?;
            Ok(Value::String(rendered))
        }
        None => {
            let factor = 10f64.powi(decimals as i32);
            let rounded = (value * factor).round() / factor;
            Ok(Value::from(rounded))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_integer_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(20), Argument::Int(40)];

        for _ in 0..100 {
            let value = integer(&mut rng, &args).unwrap();
            let n = value.as_i64().expect("integer value");
            assert!((20..=40).contains(&n));
        }
    }

    #[test]
    fn test_integer_defaults() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = integer(&mut rng, &[]).unwrap();
        let n = value.as_i64().expect("integer value");
        assert!((0..=100).contains(&n));
    }

    #[test]
    fn test_integer_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(40), Argument::Int(20)];

        let result = integer(&mut rng, &args);
        assert!(matches!(result, Err(GeneratorError::BadArguments { .. })));
    }

    #[test]
    fn test_floating_range_and_rounding() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(50), Argument::Int(4000), Argument::Int(2)];

        for _ in 0..100 {
            let value = floating(&mut rng, &args).unwrap();
            let f = value.as_f64().expect("float value");
            assert!((50.0..=4000.0).contains(&f));
            // At most 2 decimal places survive the rounding
            assert!((f * 100.0 - (f * 100.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_floating_with_format_is_string() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [
            Argument::Int(50),
            Argument::Int(4000),
            Argument::Int(2),
            Argument::Str("$0,0.00".to_string()),
        ];

        let value = floating(&mut rng, &args).unwrap();
        let text = value.as_str().expect("formatted string");
        assert!(text.starts_with('$'));
        assert_eq!(text.rsplit('.').next().map(str::len), Some(2));
    }

    #[test]
    fn test_bool_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            boolean(&mut rng1, &[]).unwrap(),
            boolean(&mut rng2, &[]).unwrap()
        );
    }
}
