//! End-to-end generation over the countries/users template.
//!
//! Exercises the full pipeline: JSON5 parsing, repeat expansion, and
//! every generator function the template names.

use mockdata_generator::DataGenerator;
use serde_json::Value;
use template_core::Template;

const COUNTRIES_TEMPLATE: &str = include_str!("fixtures/countries.json5");

fn generate(seed: u64) -> Value {
    let template = Template::from_str(COUNTRIES_TEMPLATE).expect("fixture template parses");
    let mut generator = DataGenerator::new(template, seed);
    generator.generate().expect("fixture template resolves")
}

fn assert_hex_id(value: &Value) {
    let id = value.as_str().expect("id string");
    assert_eq!(id.len(), 24, "ObjectId-shaped id: {id}");
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

fn assert_full_name(value: &Value) {
    let name = value.as_str().expect("name string");
    assert!(name.contains(' '), "first + last name: {name}");
}

#[test]
fn generates_countries_with_bounded_cardinalities() {
    let doc = generate(42);

    let countries = doc["countries"].as_array().expect("countries array");
    assert!(
        (2..=3).contains(&countries.len()),
        "repeat(2, 3) bound violated: {}",
        countries.len()
    );

    for country in countries {
        assert!(!country["name"].as_str().expect("country name").is_empty());

        let users = country["users"].as_array().expect("users array");
        assert!((1..=3).contains(&users.len()));

        for user in users {
            assert_hex_id(&user["id"]);
            assert!(user["isActive"].is_boolean());
            assert_full_name(&user["name"]);
            assert!(!user["company"].as_str().expect("company").is_empty());
            assert!(user["email"].as_str().expect("email").contains('@'));

            let age = user["age"].as_i64().expect("age number");
            assert!((20..=40).contains(&age), "age out of range: {age}");

            let tags = user["tags"].as_array().expect("tags array");
            assert!(tags.len() <= 2);
            for tag in tags {
                let word = tag.as_str().expect("tag string");
                assert!(!word.is_empty() && !word.contains(' '));
            }

            let friends = user["friends"].as_array().expect("friends array");
            assert!(friends.len() <= 3);
            for friend in friends {
                assert_hex_id(&friend["id"]);
                assert_full_name(&friend["name"]);
            }
        }
    }
}

#[test]
fn balance_is_currency_formatted() {
    let doc = generate(42);

    for country in doc["countries"].as_array().expect("countries") {
        for user in country["users"].as_array().expect("users") {
            let balance = user["balance"].as_str().expect("balance string");
            let numeric: f64 = balance
                .strip_prefix('$')
                .expect("currency prefix")
                .replace(',', "")
                .parse()
                .expect("numeric balance");
            assert!((50.0..=4000.0).contains(&numeric), "balance: {balance}");
            assert_eq!(balance.rsplit('.').next().map(str::len), Some(2));
        }
    }
}

#[test]
fn registered_matches_requested_format() {
    let doc = generate(42);

    for country in doc["countries"].as_array().expect("countries") {
        for user in country["users"].as_array().expect("users") {
            // "YYYY-MM-ddThh:mm:ss Z" => e.g. "2019-04-02T11:47:03 +00:00"
            let registered = user["registered"].as_str().expect("registered string");
            assert_eq!(&registered[4..5], "-");
            assert_eq!(&registered[10..11], "T");
            assert!(registered.ends_with(" +00:00"), "format: {registered}");

            let year: i32 = registered[..4].parse().expect("year");
            assert!(year >= 2017, "lower bound is 2017-01-01: {registered}");
        }
    }
}

#[test]
fn output_field_order_matches_template() {
    let doc = generate(42);

    let user = &doc["countries"][0]["users"][0];
    let keys: Vec<&str> = user
        .as_object()
        .expect("user object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "isActive",
            "balance",
            "age",
            "name",
            "company",
            "email",
            "registered",
            "tags",
            "friends"
        ]
    );
}

#[test]
fn same_seed_reproduces_the_document() {
    assert_eq!(generate(42), generate(42));
}

#[test]
fn different_seeds_produce_different_documents() {
    assert_ne!(generate(42), generate(1042));
}
