//! The three validation strategies applied to the same input
//!
//! Run with: cargo run --example strategies

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use proviso::{rules, validate_all, validate_first, validate_lazy, Named, ValidationResult};

fn main() {
    let host = "";
    let port: u16 = 80;
    let workers: usize = 0;

    // Aggregating: run everything, report everything.
    println!("collect every violation:");
    let report = validate_all(|v| {
        v.must(&host.named("host"), rules::string::not_blank());
        v.must(&port.named("port"), rules::ord::at_least(1024));
        v.must(&workers.named("workers"), rules::ord::at_least(1));
    });
    for violation in report.violations() {
        println!("  - {violation}");
    }

    // Fail fast: the first violation aborts the block, the rest never run.
    println!("\nstop at the first violation:");
    let outcome = validate_first(|v| {
        v.must(&host.named("host"), rules::string::not_blank())?;
        v.must(&port.named("port"), rules::ord::at_least(1024))?;
        v.must(&workers.named("workers"), rules::ord::at_least(1))?;
        Ok(())
    });
    match outcome {
        Ok(()) => println!("  accepted"),
        Err(failure) => {
            println!("  - {}", failure.violation());
            // The typed error converts into a report when one is wanted.
            let report: ValidationResult = failure.into();
            println!("  as a report: {report}");
        }
    }

    // Lazy: register now, evaluate on every traversal.
    println!("\ndefer evaluation until iteration:");
    let ready = Arc::new(AtomicBool::new(false));
    let checks = validate_lazy(|v| {
        v.must(host.named("host"), rules::string::not_blank());
        let ready = Arc::clone(&ready);
        v.ensure(move || ready.load(Ordering::SeqCst), "service must be ready");
    });
    println!("  registered {} checks, none evaluated yet", checks.len());

    println!("  first traversal:");
    for violation in &checks {
        println!("    - {violation}");
    }

    // The readiness check observes state at evaluation time, so flipping the
    // flag changes what the next traversal reports.
    ready.store(true, Ordering::SeqCst);
    println!("  after the service comes up:");
    for violation in &checks {
        println!("    - {violation}");
    }
}
