//! Basic usage example for tessera-validator

use tessera_validator::prelude::*;

fn main() {
    // A leaf validator
    let adult = greater_than_or_equals(18_u32);

    for age in [42, 17] {
        match adult.validate(&age) {
            Ok(()) => println!("✓ {age} is valid"),
            Err(e) => println!("✗ {age} is invalid: {e}"),
        }
    }

    // Built-in string validators
    let address = email();
    for input in ["blob@example.com", "blob.example.com"] {
        match address.validate(input) {
            Ok(()) => println!("✓ '{input}' is a valid email"),
            Err(e) => println!("✗ {e}"),
        }
    }

    // Every validator can run in async code too
    let result = futures::executor::block_on(adult.validate_async(&20));
    println!("async check of 20: {result:?}");

    println!("\ntessera-validator is working correctly!");
}
