//! Name, company, email, and country generators.
//!
//! Values are drawn from the `fake` crate's EN-locale pools, driven by
//! the engine RNG so a seed reproduces the same people.

use crate::error::GeneratorError;
use crate::functions::ensure_no_args;
use fake::faker::address::raw::CountryName;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::Rng;
use serde_json::Value;
use template_core::Argument;

/// `country()` — random country name.
pub fn country<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("country", args)?;
    let name: String = CountryName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

/// `firstName()` — random given name.
pub fn first_name<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("firstName", args)?;
    let name: String = FirstName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

/// `surname()` — random family name.
pub fn surname<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("surname", args)?;
    let name: String = LastName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

/// `company()` — random company name.
pub fn company<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("company", args)?;
    let name: String = CompanyName(EN).fake_with_rng(rng);
    Ok(Value::String(name))
}

/// `email()` — random address in an example domain.
pub fn email<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("email", args)?;
    let address: String = SafeEmail(EN).fake_with_rng(rng);
    Ok(Value::String(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_non_empty(value: &Value) {
        assert!(!value.as_str().expect("string value").is_empty());
    }

    #[test]
    fn test_names_are_non_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_non_empty(&country(&mut rng, &[]).unwrap());
        assert_non_empty(&first_name(&mut rng, &[]).unwrap());
        assert_non_empty(&surname(&mut rng, &[]).unwrap());
        assert_non_empty(&company(&mut rng, &[]).unwrap());
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = email(&mut rng, &[]).unwrap();
        assert!(value.as_str().expect("string value").contains('@'));
    }

    #[test]
    fn test_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            first_name(&mut rng1, &[]).unwrap(),
            first_name(&mut rng2, &[]).unwrap()
        );
    }

    #[test]
    fn test_rejects_arguments() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = [Argument::Int(3)];

        let result = country(&mut rng, &args);
        assert!(matches!(result, Err(GeneratorError::BadArguments { .. })));
    }
}
