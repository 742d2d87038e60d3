//! The three validation strategies exercised through the public API

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proviso::{
    rules, validate_all, validate_first, validate_lazy, Named, Rule, ValidationResult,
};

struct DeployRequest {
    service: String,
    image_tag: String,
    replicas: u32,
    regions: Vec<String>,
}

impl DeployRequest {
    fn sample() -> Self {
        Self {
            service: "billing".to_string(),
            image_tag: "v2.4.1".to_string(),
            replicas: 3,
            regions: vec!["eu-west-1".to_string(), "us-east-2".to_string()],
        }
    }
}

fn validate_request(request: &DeployRequest) -> ValidationResult {
    validate_all(|v| {
        v.must(
            &request.service.as_str().named("service"),
            rules::string::not_blank(),
        );
        v.must(
            &request.service.as_str().named("service"),
            rules::string::max_length(32),
        );
        v.must(
            &request.image_tag.as_str().named("image_tag"),
            rules::string::starts_with("v"),
        );
        v.must(&request.replicas.named("replicas"), rules::ord::between(1, 16));
        v.must(
            &request.regions.as_slice().named("regions"),
            rules::collection::not_empty(),
        );
    })
}

#[test]
fn test_valid_request_passes_every_strategy() {
    let request = DeployRequest::sample();
    assert!(validate_request(&request).is_valid());

    let outcome = validate_first(|v| {
        v.must(
            &request.service.as_str().named("service"),
            rules::string::not_blank(),
        )?;
        v.must(&request.replicas.named("replicas"), rules::ord::between(1, 16))?;
        Ok(())
    });
    assert!(outcome.is_ok());

    let checks = validate_lazy(|v| {
        v.must(request.service.clone().named("service"), rules::string::not_blank());
        v.must(request.replicas.named("replicas"), rules::ord::between(1, 16));
    });
    assert!(checks.is_valid());
}

#[test]
fn test_collect_reports_everything_in_declaration_order() {
    let request = DeployRequest {
        service: " ".to_string(),
        image_tag: "latest".to_string(),
        replicas: 0,
        regions: Vec::new(),
    };

    let report = validate_request(&request);
    let messages: Vec<&str> = report.violations().iter().map(|v| v.message()).collect();
    assert_eq!(
        messages,
        vec![
            "service must not be blank",
            "image_tag must start with \"v\"",
            "replicas must be between 1 and 16",
            "regions must not be empty",
        ],
    );
}

#[test]
fn test_nested_reports_merge_in_call_order() {
    fn validate_region(region: &str) -> ValidationResult {
        validate_all(|v| {
            v.must(&region.named("region"), rules::string::not_blank());
            v.must(&region.named("region"), rules::string::contains("-"));
        })
    }

    let report = validate_all(|v| {
        v.must(&"".named("service"), rules::string::not_blank());
        v.merge(validate_region("euwest1"));
        v.ensure(false, "deploy freeze is in effect");
    });

    let messages: Vec<&str> = report.violations().iter().map(|v| v.message()).collect();
    assert_eq!(
        messages,
        vec![
            "service must not be blank",
            "region must contain \"-\"",
            "deploy freeze is in effect",
        ],
    );
}

#[test]
fn test_fail_fast_reports_first_and_skips_the_rest() {
    let request = DeployRequest {
        service: String::new(),
        image_tag: "latest".to_string(),
        replicas: 0,
        regions: Vec::new(),
    };
    let mut reached_tag_check = false;

    let outcome = validate_first(|v| {
        v.must(
            &request.service.as_str().named("service"),
            rules::string::not_blank(),
        )?;
        reached_tag_check = true;
        v.must(
            &request.image_tag.as_str().named("image_tag"),
            rules::string::starts_with("v"),
        )?;
        Ok(())
    });

    let failure = outcome.unwrap_err();
    assert_eq!(failure.violation().message(), "service must not be blank");
    assert!(!reached_tag_check);
}

#[test]
fn test_fail_fast_failure_converts_into_report() {
    let outcome = validate_first(|v| {
        v.ensure(false, "maintenance window is active")?;
        Ok(())
    });

    let report: ValidationResult = outcome.unwrap_err().into();
    assert_eq!(report.violations().len(), 1);
    assert_eq!(report.violations()[0].message(), "maintenance window is active");
}

#[test]
fn test_fail_fast_agrees_with_collect_on_the_first_violation() {
    let request = DeployRequest {
        service: String::new(),
        image_tag: "x".to_string(),
        replicas: 40,
        regions: Vec::new(),
    };

    let report = validate_request(&request);
    assert_eq!(report.violations().len(), 4);

    let failure = validate_first(|v| {
        v.must(
            &request.service.as_str().named("service"),
            rules::string::not_blank(),
        )?;
        v.must(
            &request.image_tag.as_str().named("image_tag"),
            rules::string::starts_with("v"),
        )?;
        Ok(())
    })
    .unwrap_err();

    assert_eq!(
        failure.violation().message(),
        report.violations()[0].message(),
    );
}

#[test]
fn test_lazy_evaluates_only_when_pulled() {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counted = {
        let evaluations = Arc::clone(&evaluations);
        Rule::new("must be striped", move |_: &u32| {
            evaluations.fetch_add(1, Ordering::SeqCst);
            false
        })
    };

    let checks = validate_lazy(|v| {
        v.must(4u32.named("shards"), counted);
    });
    assert_eq!(evaluations.load(Ordering::SeqCst), 0);

    assert_eq!(checks.first().unwrap().message(), "shards must be striped");
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);

    // A fresh traversal runs the check again.
    assert!(!checks.is_valid());
    assert_eq!(evaluations.load(Ordering::SeqCst), 2);
}

#[test]
fn test_lazy_observes_state_at_evaluation_time() {
    let healthy_replicas = Arc::new(AtomicUsize::new(1));
    let checks = validate_lazy(|v| {
        let healthy = Arc::clone(&healthy_replicas);
        v.ensure(
            move || healthy.load(Ordering::SeqCst) >= 2,
            "quorum requires two healthy replicas",
        );
    });

    assert_eq!(
        checks.first().unwrap().message(),
        "quorum requires two healthy replicas",
    );

    healthy_replicas.store(3, Ordering::SeqCst);
    assert!(checks.is_valid());
}

#[test]
fn test_lazy_reports_the_same_violations_as_collect() {
    let request = DeployRequest {
        service: String::new(),
        image_tag: "x".to_string(),
        replicas: 40,
        regions: Vec::new(),
    };

    let checks = validate_lazy(|v| {
        v.must(request.service.clone().named("service"), rules::string::not_blank());
        v.must(
            request.image_tag.clone().named("image_tag"),
            rules::string::starts_with("v"),
        );
        v.must(request.replicas.named("replicas"), rules::ord::between(1, 16));
    });

    let deferred: Vec<String> = checks.violations().map(|v| v.into_message()).collect();
    assert_eq!(
        deferred,
        vec![
            "service must not be blank",
            "image_tag must start with \"v\"",
            "replicas must be between 1 and 16",
        ],
    );
}

#[test]
fn test_optional_field_is_skipped_when_absent() {
    let rule = || rules::optional(rules::string::contains("-"));

    let report = validate_all(|v| {
        v.must(&None::<&str>.named("canary_region"), rule());
    });
    assert!(report.is_valid());

    let report = validate_all(|v| {
        v.must(&Some("euwest").named("canary_region"), rule());
    });
    assert_eq!(
        report.violations()[0].message(),
        "canary_region must contain \"-\"",
    );
}

#[test]
fn test_unnamed_value_keeps_the_bare_constraint() {
    // The name is prepended unconditionally; an empty name leaves the
    // separating space in place.
    let violation = rules::string::not_blank().eval(&"".named("")).unwrap();
    assert_eq!(violation.message(), " must not be blank");
}
