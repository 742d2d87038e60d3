//! Shows the tracing events emitted while validating
//!
//! Run with: cargo run --example tracing_demo --features tracing

use proviso::{rules, validate_all, validate_first, validate_lazy, Named};

fn main() {
    // TRACE level so the deferred-check registration events show up too.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("collecting every violation");
    let report = validate_all(|v| {
        v.must(&"".named("username"), rules::string::not_blank());
        v.must(&16.named("age"), rules::ord::at_least(18));
    });
    tracing::info!("report: {}", report);

    tracing::info!("stopping at the first violation");
    let outcome = validate_first(|v| {
        v.must(&"".named("username"), rules::string::not_blank())?;
        v.must(&16.named("age"), rules::ord::at_least(18))?;
        Ok(())
    });
    if let Err(failure) = outcome {
        tracing::warn!("rejected: {}", failure);
    }

    tracing::info!("registering deferred checks");
    let checks = validate_lazy(|v| {
        v.must("".named("username"), rules::string::not_blank());
        v.must(16.named("age"), rules::ord::at_least(18));
    });

    tracing::info!("iterating evaluates them");
    for violation in &checks {
        tracing::warn!("deferred violation: {}", violation);
    }
}
