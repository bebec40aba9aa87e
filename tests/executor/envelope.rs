//! Envelope Tests
//!
//! Every command outcome folds into the same response shape.

use crate::common::*;
use serde_json::json;
use tally::{Command, Response, ResponseCode};

#[test]
fn success_envelope_has_no_errors() {
    let executor = create_executor();
    let response = executor.respond(quote_cmd(100));
    assert!(response.is_success());
    assert_eq!(response.code, ResponseCode::Ok);
    assert!(response.errors.is_empty());
    assert!(response.output.is_some());
}

#[test]
fn failure_envelopes_carry_no_output() {
    let executor = create_executor();
    let id = new_quote(&executor, 100);

    for cmd in [
        Command::PromoteQuote {
            contract_id: "Bogus".to_string(),
        },
        Command::FinalizeContract { contract_id: id },
        Command::NewQuote {
            customer_name: String::new(),
            description_of_work_requested: String::new(),
            quoted_price: None,
        },
    ] {
        let response = executor.respond(cmd);
        assert!(!response.is_success());
        assert!(response.output.is_none());
        assert!(!response.errors.is_empty());
    }
}

#[test]
fn response_code_numbers_are_stable() {
    let expected = [
        (ResponseCode::Unknown, 0),
        (ResponseCode::Ok, 1),
        (ResponseCode::PartialOk, 2),
        (ResponseCode::ValidationErr, 3),
        (ResponseCode::Failed, 4),
        (ResponseCode::Notfound, 5),
        (ResponseCode::NotAuthorized, 6),
    ];
    for (code, number) in expected {
        assert_eq!(code.as_number(), number);
        assert_eq!(ResponseCode::from_number(number), Some(code));
    }
}

#[test]
fn validation_envelope_json() {
    let executor = create_executor();
    let response = executor.respond(Command::PromoteQuote {
        contract_id: String::new(),
    });
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "code": "VALIDATION_ERR",
            "reason": "Validation failed",
            "errors": [
                { "location": "contractId", "code": "Input.ContractId.mandatory" }
            ]
        })
    );
}

#[test]
fn failed_envelope_json() {
    let executor = create_executor();
    let id = new_quote(&executor, 100);
    let response = executor.respond(Command::FinalizeContract {
        contract_id: id.clone(),
    });
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "code": "FAILED",
            "reason": "Precondition not met",
            "errors": [
                { "location": id, "code": "Not.at.work", "args": { "status": "QUOTE" } }
            ]
        })
    );
}

#[test]
fn command_json_to_envelope_json() {
    let executor = create_executor();
    let cmd: Command = serde_json::from_value(json!({
        "NewQuote": {
            "customer_name": "Jan Jansen",
            "description_of_work_requested": "Paint the fence",
            "quoted_price": { "currency_code": "EUR", "units": 1999, "nanos": 500000000 }
        }
    }))
    .unwrap();

    let response = executor.respond(cmd);
    let json = serde_json::to_string(&response).unwrap();
    let restored: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, response);
    assert_eq!(restored.code, ResponseCode::Ok);
}
