//! Tally API Tests
//!
//! Tests for the high-level Tally typed wrapper API.
//! The Tally struct wraps the Executor's command-based interface with typed
//! method calls.

use crate::common::*;
use rust_decimal_macros::dec;
use tally::{
    BoolOption, ContractFilter, ContractStatus, Error, Include, Money, Tally, TallyConfig,
    CONFIG_FILE_NAME,
};

#[test]
fn typed_lifecycle() {
    let tally = create_tally();

    let id = tally
        .new_quote("Jan Jansen", "Paint the fence", Money::eur(dec!(2500)))
        .unwrap();
    tally.promote_quote(id.as_str()).unwrap();
    tally
        .add_work_done(id.as_str(), "Sanding", Money::eur(dec!(1200)))
        .unwrap();
    tally
        .add_work_done(id.as_str(), "Painting", Money::eur(dec!(1000)))
        .unwrap();

    let profit = tally.finalize_contract(id.as_str()).unwrap();
    assert_eq!(profit, Money::eur(dec!(300)));

    let view = tally.find(id.as_str()).unwrap();
    assert_eq!(view.status, ContractStatus::Finalized);
}

#[test]
fn fractional_amounts_are_exact() {
    let tally = create_tally();
    let id = tally
        .new_quote("A", "B", Money::eur(dec!(1000.10)))
        .unwrap();
    tally.promote_quote(id.as_str()).unwrap();
    for _ in 0..3 {
        tally
            .add_work_done(id.as_str(), "Step", Money::eur(dec!(100.10)))
            .unwrap();
    }
    let profit = tally.finalize_contract(id.as_str()).unwrap();
    assert_eq!(profit.amount(), dec!(699.80));
}

#[test]
fn typed_errors_match_executor_errors() {
    let tally = create_tally();
    assert_eq!(
        tally.promote_quote("Bogus"),
        Err(Error::NotFound {
            id: "Bogus".to_string()
        })
    );

    let id = tally.new_quote("A", "B", Money::eur(dec!(100))).unwrap();
    assert!(matches!(
        tally.finalize_contract(id.as_str()),
        Err(Error::Failed { .. })
    ));
}

#[test]
fn find_with_and_find_many() {
    let tally = create_tally();
    let a = tally.new_quote("A", "B", Money::eur(dec!(100))).unwrap();
    let b = tally.new_quote("C", "D", Money::eur(dec!(200))).unwrap();
    tally.promote_quote(b.as_str()).unwrap();

    let view = tally.find_with(a.as_str(), Include::IdOnly).unwrap();
    assert!(view.quote.is_none());

    let list = tally.find_many(&[a.as_str(), "nope"]).unwrap();
    assert_eq!(list.contracts.len(), 1);
    assert_eq!(list.missing.len(), 1);
    assert_eq!(list.missing[0].as_str(), "nope");

    let at_work = tally
        .find_matching(ContractFilter {
            is_at_work: BoolOption::Yes,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(at_work.len(), 1);
    assert_eq!(at_work[0].id, b);
}

#[test]
fn open_creates_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let tally = Tally::open(dir.path()).unwrap();

    let path = dir.path().join(CONFIG_FILE_NAME);
    assert!(path.exists());
    assert_eq!(TallyConfig::from_file(&path).unwrap(), TallyConfig::default());

    let id = tally.new_quote("A", "B", Money::eur(dec!(100))).unwrap();
    assert_eq!(tally.find(id.as_str()).unwrap().status, ContractStatus::Quote);
}

#[test]
fn open_honours_minimum_work_cost() {
    let dir = tempfile::tempdir().unwrap();
    let config = TallyConfig {
        min_work_cost: dec!(500),
        ..TallyConfig::default()
    };
    config
        .write_to_file(&dir.path().join(CONFIG_FILE_NAME))
        .unwrap();

    let tally = Tally::open(dir.path()).unwrap();
    let id = tally.new_quote("A", "B", Money::eur(dec!(1000))).unwrap();
    tally.promote_quote(id.as_str()).unwrap();

    match tally.add_work_done(id.as_str(), "Cheap", Money::eur(dec!(200))) {
        Err(Error::Validation { errors }) => {
            assert_eq!(errors[0].code, "Input.Work.Cost.minimum");
            assert_eq!(errors[0].args["minimum"], "500");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn open_rejects_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "currency = \"EURO\"\n").unwrap();
    assert!(matches!(
        Tally::open(dir.path()),
        Err(Error::Internal { .. })
    ));
}
