//! Identifier generators: objectId and guid.

use crate::error::GeneratorError;
use crate::functions::ensure_no_args;
use rand::Rng;
use serde_json::Value;
use template_core::Argument;
use uuid::Uuid;

/// `objectId()` — 24-character lowercase hex id in MongoDB ObjectId shape.
///
/// All 12 bytes come from the engine RNG so ids are reproducible for a
/// given seed.
pub fn object_id<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("objectId", args)?;

    let mut bytes = [0u8; 12];
    rng.fill(&mut bytes);

    let mut hex = String::with_capacity(24);
    for byte in bytes {
        hex.push_str(&format!("{byte:02x}"));
    }
    Ok(Value::String(hex))
}

/// `guid()` — RFC 4122 v4 UUID drawn from the engine RNG.
pub fn guid<R: Rng>(rng: &mut R, args: &[Argument]) -> Result<Value, GeneratorError> {
    ensure_no_args("guid", args)?;

    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Ok(Value::String(Uuid::from_bytes(bytes).to_string()))
}
