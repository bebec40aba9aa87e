//! Lookup Tests
//!
//! find / findMany: include selectors, partial results, status filters.

use crate::common::*;
use rust_decimal_macros::dec;
use tally::{
    BoolOption, Command, ContractFilter, ContractList, ContractStatus, Error, Include, Money,
    MoneyParts, Output, ResponseCode,
};

fn contracts(output: Output) -> ContractList {
    match output {
        Output::Contracts(list) => list,
        other => panic!("Expected Contracts, got {:?}", other),
    }
}

fn by_filter(filter: ContractFilter) -> Command {
    Command::FindMany {
        contract_ids: Vec::new(),
        filter,
        include: Include::IdOnly,
    }
}

/// One contract in each reachable status: (quote, at work, finalized)
fn one_of_each(executor: &tally::Executor) -> (String, String, String) {
    let quote = new_quote(executor, 100);
    let at_work = new_contract(executor, 200);
    let finalized = new_contract(executor, 300);
    executor
        .execute(Command::FinalizeContract {
            contract_id: finalized.clone(),
        })
        .unwrap();
    (quote, at_work, finalized)
}

// ============================================================================
// find
// ============================================================================

#[test]
fn find_returns_quote_section() {
    let executor = create_executor();
    let id = new_quote(&executor, 2500);

    match executor
        .execute(Command::Find {
            contract_id: id,
            include: Include::QuoteOnly,
        })
        .unwrap()
    {
        Output::Contract(view) => {
            let quote = view.quote.unwrap();
            assert_eq!(quote.customer_name, "Jan Jansen");
            assert_eq!(quote.description_of_work_requested, "Paint the fence");
            assert_eq!(quote.quoted_price, Money::eur(dec!(2500)));
            assert!(view.work.is_none());
        }
        other => panic!("Expected Contract, got {:?}", other),
    }
}

#[test]
fn fractional_price_is_returned_as_sent() {
    let executor = create_executor();
    let id = extract_id(
        &executor
            .execute(Command::NewQuote {
                customer_name: "Jan Jansen".to_string(),
                description_of_work_requested: "Paint the fence".to_string(),
                quoted_price: Some(MoneyParts {
                    currency_code: "EUR".to_string(),
                    units: 12,
                    nanos: 500_000_000,
                }),
            })
            .unwrap(),
    );

    let response = executor.respond(Command::Find {
        contract_id: id,
        include: Include::QuoteOnly,
    });
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json["output"]["Contract"]["quote"]["quoted_price"],
        serde_json::json!({ "amount": "12.5", "currency": "EUR" })
    );
}

#[test]
fn find_work_only() {
    let executor = create_executor();
    let id = new_contract(&executor, 2500);
    executor.execute(work_cmd(&id, "Sanding", 150)).unwrap();

    match executor
        .execute(Command::Find {
            contract_id: id,
            include: Include::WorkOnly,
        })
        .unwrap()
    {
        Output::Contract(view) => {
            assert!(view.quote.is_none());
            let work = view.work.unwrap();
            assert_eq!(work.len(), 1);
            assert_eq!(work[0].cost, Money::eur(dec!(150)));
        }
        other => panic!("Expected Contract, got {:?}", other),
    }
}

#[test]
fn snapshot_does_not_follow_later_changes() {
    let executor = create_executor();
    let id = new_contract(&executor, 2500);

    let before = executor
        .execute(Command::Find {
            contract_id: id.clone(),
            include: Include::Both,
        })
        .unwrap();
    executor.execute(work_cmd(&id, "Sanding", 150)).unwrap();

    match before {
        Output::Contract(view) => {
            assert_eq!(view.status, ContractStatus::AtWork);
            assert!(view.work.unwrap().is_empty());
        }
        other => panic!("Expected Contract, got {:?}", other),
    }
}

// ============================================================================
// findMany by ids
// ============================================================================

#[test]
fn find_many_all_present() {
    let executor = create_executor();
    let a = new_quote(&executor, 100);
    let b = new_quote(&executor, 200);

    let response = executor.respond(Command::FindMany {
        contract_ids: vec![b.clone(), a.clone()],
        filter: ContractFilter::default(),
        include: Include::Both,
    });
    assert_eq!(response.code, ResponseCode::Ok);
    assert!(response.warning.is_none());

    let list = contracts(response.output.unwrap());
    let ids: Vec<&str> = list.contracts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![b.as_str(), a.as_str()]);
}

#[test]
fn find_many_with_misses_is_partial() {
    let executor = create_executor();
    let a = new_quote(&executor, 100);

    let response = executor.respond(Command::FindMany {
        contract_ids: vec!["x".to_string(), a.clone(), "y".to_string()],
        filter: ContractFilter::default(),
        include: Include::IdOnly,
    });
    assert_eq!(response.code, ResponseCode::PartialOk);
    assert_eq!(response.reason, "Done");
    assert!(response.errors.is_empty());
    assert_eq!(response.warning.as_deref(), Some("Contracts not found: x, y"));

    let list = contracts(response.output.unwrap());
    assert_eq!(list.contracts.len(), 1);
    assert_eq!(list.contracts[0].id.as_str(), a);
}

#[test]
fn find_many_nothing_found_is_still_partial() {
    let executor = create_executor();
    let response = executor.respond(Command::FindMany {
        contract_ids: vec!["x".to_string()],
        filter: ContractFilter::default(),
        include: Include::Both,
    });
    assert_eq!(response.code, ResponseCode::PartialOk);
    assert!(contracts(response.output.unwrap()).contracts.is_empty());
}

#[test]
fn find_many_collapses_duplicate_ids() {
    let executor = create_executor();
    let a = new_quote(&executor, 100);

    let list = contracts(
        executor
            .execute(Command::FindMany {
                contract_ids: vec![a.clone(), a.clone()],
                filter: ContractFilter::default(),
                include: Include::IdOnly,
            })
            .unwrap(),
    );
    assert_eq!(list.contracts.len(), 1);
}

// ============================================================================
// findMany by filter
// ============================================================================

#[test]
fn filter_single_status() {
    let executor = create_executor();
    let (quote, at_work, finalized) = one_of_each(&executor);

    let only = |filter: ContractFilter| -> Vec<String> {
        contracts(executor.execute(by_filter(filter)).unwrap())
            .contracts
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    };

    assert_eq!(
        only(ContractFilter {
            is_quote: BoolOption::Yes,
            ..Default::default()
        }),
        vec![quote]
    );
    assert_eq!(
        only(ContractFilter {
            is_at_work: BoolOption::Yes,
            ..Default::default()
        }),
        vec![at_work]
    );
    assert_eq!(
        only(ContractFilter {
            is_finalized: BoolOption::Yes,
            ..Default::default()
        }),
        vec![finalized]
    );
}

#[test]
fn filter_flags_combine_with_and() {
    let executor = create_executor();
    let (_, at_work, finalized) = one_of_each(&executor);

    let list = contracts(
        executor
            .execute(by_filter(ContractFilter {
                is_quote: BoolOption::No,
                ..Default::default()
            }))
            .unwrap(),
    );
    let mut ids: Vec<String> = list.contracts.iter().map(|c| c.id.to_string()).collect();
    ids.sort();
    let mut expected = vec![at_work, finalized];
    expected.sort();
    assert_eq!(ids, expected);

    let none = contracts(
        executor
            .execute(by_filter(ContractFilter {
                is_quote: BoolOption::Yes,
                is_at_work: BoolOption::Yes,
                is_finalized: BoolOption::Unset,
            }))
            .unwrap(),
    );
    assert!(none.contracts.is_empty());
}

#[test]
fn filter_results_are_ordered_by_id() {
    let executor = create_executor();
    for units in [100, 200, 300, 400, 500] {
        new_quote(&executor, units);
    }
    let list = contracts(
        executor
            .execute(by_filter(ContractFilter {
                is_quote: BoolOption::Yes,
                ..Default::default()
            }))
            .unwrap(),
    );
    let ids: Vec<&str> = list.contracts.iter().map(|c| c.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

// ============================================================================
// findMany validation
// ============================================================================

#[test]
fn find_many_needs_ids_or_filter() {
    let executor = create_executor();
    let result = executor.execute(by_filter(ContractFilter::default()));
    match result {
        Err(Error::Validation { errors }) => {
            assert_eq!(errors[0].code, "Input.ContractIds.mandatory");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn find_many_ids_and_filter_are_exclusive() {
    let executor = create_executor();
    let result = executor.execute(Command::FindMany {
        contract_ids: vec!["a".to_string()],
        filter: ContractFilter {
            is_quote: BoolOption::Yes,
            ..Default::default()
        },
        include: Include::Both,
    });
    match result {
        Err(Error::Validation { errors }) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].location, "filter");
            assert_eq!(errors[0].code, "Input.Filter.exclusive");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn find_many_blank_id_is_located_by_index() {
    let executor = create_executor();
    let result = executor.execute(Command::FindMany {
        contract_ids: vec!["a".to_string(), " ".to_string()],
        filter: ContractFilter::default(),
        include: Include::Both,
    });
    match result {
        Err(Error::Validation { errors }) => {
            assert_eq!(errors[0].location, "contractIds[1]");
            assert_eq!(errors[0].args["index"], "1");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}
