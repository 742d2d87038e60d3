//! Form validation example - collecting every problem in a signup payload
//!
//! Run with: cargo run --example signup_form

use proviso::predicate::{any_char, len_min, PredicateExt};
use proviso::{rules, validate_all, Named, Rule, ValidationResult};
use regex::Regex;

// Raw input, as it arrives from the outside world
struct SignupForm {
    username: String,
    email: String,
    password: String,
    password_confirm: String,
    age: u32,
    interests: Vec<String>,
}

fn validate_signup(form: &SignupForm) -> ValidationResult {
    let email_shape = Regex::new(r"^\S+@\S+\.\S+$").unwrap();

    // A one-off rule composed from predicates
    let strong_password = Rule::new(
        "must be at least 8 characters with a digit",
        PredicateExt::<str>::and(len_min(8), any_char(|c: char| c.is_ascii_digit())),
    );

    validate_all(|v| {
        v.must(&form.username.as_str().named("username"), rules::string::not_blank());
        v.must(
            &form.username.as_str().named("username"),
            rules::string::length_between(3, 20),
        );
        v.must(
            &form.email.as_str().named("email"),
            rules::string::matches(email_shape),
        );
        v.must(&form.password.as_str().named("password"), strong_password);
        v.ensure(
            form.password == form.password_confirm,
            "passwords must match",
        );
        v.must(&form.age.named("age"), rules::ord::at_least(13));
        v.must(&form.age.named("age"), rules::ord::at_most(130));
        v.must(
            &form.interests.as_slice().named("interests"),
            rules::collection::max_size(5),
        );
    })
}

fn main() {
    let bad = SignupForm {
        username: "  ".to_string(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        password_confirm: "different".to_string(),
        age: 12,
        interests: vec![
            "rust".into(),
            "gardening".into(),
            "chess".into(),
            "baking".into(),
            "climbing".into(),
            "astronomy".into(),
        ],
    };

    println!("validating a bad form:");
    match validate_signup(&bad) {
        ValidationResult::Valid => println!("  accepted"),
        ValidationResult::Invalid(violations) => {
            for violation in &violations {
                println!("  - {violation}");
            }
        }
    }

    let good = SignupForm {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "correct horse 9".to_string(),
        password_confirm: "correct horse 9".to_string(),
        age: 36,
        interests: vec!["mathematics".into(), "engines".into()],
    };

    println!("\nvalidating a good form:");
    match validate_signup(&good) {
        ValidationResult::Valid => println!("  accepted"),
        ValidationResult::Invalid(violations) => {
            for violation in &violations {
                println!("  - {violation}");
            }
        }
    }
}
