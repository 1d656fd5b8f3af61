//! Combinators example for tessera-validator

use tessera_validator::prelude::*;

struct Signup {
    username: String,
    email: String,
    age: Option<u32>,
    accepted_terms: bool,
}

fn main() -> Result<(), PatternError> {
    let username = not_empty::<String>().and(map_value(
        |name: &String| name.chars().count(),
        less_than_or_equals(20_usize),
    ));

    let signup = accumulate((
        named_field("username", |s: &Signup| &s.username, username),
        named_field("email", |s: &Signup| &s.email, email()),
        named_field(
            "age",
            |s: &Signup| &s.age,
            greater_than_or_equals(18_u32).optional(),
        ),
        named_field(
            "terms",
            |s: &Signup| &s.accepted_terms,
            is_true().with_message("the terms must be accepted"),
        ),
    ));

    let good = Signup {
        username: "alice".into(),
        email: "alice@example.com".into(),
        age: None,
        accepted_terms: true,
    };
    let bad = Signup {
        username: String::new(),
        email: "alice.example.com".into(),
        age: Some(16),
        accepted_terms: false,
    };

    println!("Validating a complete signup:\n");
    match signup.validate(&good) {
        Ok(()) => println!("✓ signup is valid"),
        Err(e) => println!("✗ {e}"),
    }

    println!("\nValidating a broken signup (every failure is reported):\n");
    match signup.validate(&bad) {
        Ok(()) => println!("✓ signup is valid"),
        Err(e) => println!("{e}"),
    }

    // Alternatives: the first passing branch wins
    let contact = email().or(Pattern::new(r"\+\d{6,15}")?);
    for input in ["+31612345678", "call me"] {
        match contact.validate(input) {
            Ok(()) => println!("\n✓ '{input}' is a reachable contact"),
            Err(e) => println!("\n✗ '{input}': {e}"),
        }
    }

    println!("\nCombinators are working correctly!");
    Ok(())
}
