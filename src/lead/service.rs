use crate::assertion::check::check_contains;
use crate::case::model::TestCase;
use crate::http::{HttpMethod, Payload};
use crate::json_path::model::Expression;
use crate::json_path::utils::{evaluate_expression, first_value};
use crate::lead::model::{LeadField, LeadIdentity, NewLead};
use crate::run::service::Runner;
use serde_json::Value;
use tracing::{debug, info};

pub const ROOT_ENDPOINT: &str = "api/";
pub const LEADS_ENDPOINT: &str = "api/leads";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadListing {
    Found { count: usize },
    NotFound { count: usize },
    Unavailable,
}

pub async fn check_root(runner: &mut Runner) -> bool {
    let case = TestCase::builder()
        .name("Root API Endpoint")
        .method(HttpMethod::GET)
        .endpoint(ROOT_ENDPOINT)
        .expected_status(200)
        .build();
    let (success, _) = runner.execute_request(case).await;
    success
}

/// Creates a lead and returns the id the API assigned to it, if any. The id
/// is kept as JSON so numeric and string ids compare the same way the API
/// returns them.
pub async fn create_lead(runner: &mut Runner, lead: &NewLead) -> Option<Value> {
    let case = TestCase::builder()
        .name("Create Lead")
        .method(HttpMethod::POST)
        .endpoint(LEADS_ENDPOINT)
        .expected_status(200)
        .body(lead.to_value())
        .build();
    match runner.execute_request(case).await {
        (true, Some(Payload::Json(body))) => first_value(&body, &Expression::new("$.id")),
        _ => None,
    }
}

/// Lists leads and reports whether `created_id` is among them. The membership
/// check is informational and does not count as a test case.
pub async fn list_leads(runner: &mut Runner, created_id: Option<&Value>) -> LeadListing {
    let case = TestCase::builder()
        .name("Get All Leads")
        .method(HttpMethod::GET)
        .endpoint(LEADS_ENDPOINT)
        .expected_status(200)
        .build();
    let (success, payload) = runner.execute_request(case).await;
    let leads = match payload.as_ref().and_then(Payload::as_json) {
        Some(value) if success && value.is_array() => value,
        _ => {
            println!("[FAIL] Failed to retrieve leads");
            return LeadListing::Unavailable;
        }
    };
    let count = leads.as_array().map(Vec::len).unwrap_or_default();
    println!("[PASS] Retrieved {} leads from database", count);

    let ids = evaluate_expression(leads, &Expression::new("$[*].id")).unwrap_or_default();
    let found = match created_id {
        Some(id) => {
            let check = check_contains(&ids, id);
            if let Some(message) = &check.message {
                debug!("{}", message);
            }
            check.success
        }
        None => false,
    };
    if found {
        println!("[PASS] Created lead found in database");
        LeadListing::Found { count }
    } else {
        println!("[WARN] Created lead not found in database (may be expected)");
        LeadListing::NotFound { count }
    }
}

/// Posts one lead per required field with that field left out, expecting
/// `expected_status` each time. Returns whether all three were rejected.
pub async fn validate_required_fields(runner: &mut Runner, expected_status: u16) -> bool {
    println!("\nTesting Form Validation...");
    let sample = NewLead::builder()
        .name("Test User")
        .email("test@example.com")
        .phone("1234567890")
        .build();
    let mut all_rejected = true;
    for field in LeadField::ALL {
        let case = TestCase::builder()
            .name(format!("Missing {} Validation", field))
            .method(HttpMethod::POST)
            .endpoint(LEADS_ENDPOINT)
            .expected_status(expected_status)
            .body(sample.without(field).to_value())
            .build();
        let (success, _) = runner.execute_request(case).await;
        all_rejected &= success;
    }
    all_rejected
}

/// Runs the four scenarios in order. Each one runs regardless of how the
/// previous ones went.
pub async fn run_scenarios(runner: &mut Runner, identity: &LeadIdentity, validation_status: u16) {
    println!("\nTest Plan:");
    println!("1. Test root API endpoint");
    println!("2. Test lead creation");
    println!("3. Test lead retrieval");
    println!("4. Test form validation");

    if !check_root(runner).await {
        println!("[FAIL] Root API failed, but continuing with other tests...");
    }

    let lead_id = create_lead(runner, &identity.to_new_lead()).await;
    match &lead_id {
        Some(id) => info!(lead_id = %id, "lead created"),
        None => println!("[FAIL] Lead creation failed, but continuing with other tests..."),
    }

    match list_leads(runner, lead_id.as_ref()).await {
        LeadListing::Found { count } | LeadListing::NotFound { count } => {
            debug!(count, "leads listed")
        }
        LeadListing::Unavailable => debug!("lead listing unavailable"),
    }

    validate_required_fields(runner, validation_status).await;
}
