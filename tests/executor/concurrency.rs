//! Concurrency Tests
//!
//! Transitions on one contract are atomic; concurrent callers never see a
//! half-applied change.

use crate::common::*;
use rust_decimal_macros::dec;
use std::sync::{Arc, Barrier};
use std::thread;
use tally::{Command, Error, Executor, Include, Money, Output};

const THREADS: usize = 8;

#[test]
fn concurrent_promotes_have_one_winner() {
    let executor = create_executor();
    let id = new_quote(&executor, 1000);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let executor = executor.clone();
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                executor.execute(Command::PromoteQuote { contract_id: id })
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(result, Err(Error::Failed { code, .. }) if code == "Not.a.quote"));
    }
}

#[test]
fn concurrent_work_is_all_recorded() {
    let executor = create_executor();
    let id = new_contract(&executor, 10_000);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let executor = executor.clone();
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                for j in 0..10 {
                    executor
                        .execute(work_cmd(&id, &format!("t{}-{}", i, j), 100))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    match executor
        .execute(Command::Find {
            contract_id: id.clone(),
            include: Include::WorkOnly,
        })
        .unwrap()
    {
        Output::Contract(view) => assert_eq!(view.work.unwrap().len(), THREADS * 10),
        other => panic!("Expected Contract, got {:?}", other),
    }

    let profit = executor
        .execute(Command::FinalizeContract { contract_id: id })
        .unwrap();
    assert_eq!(profit, Output::Profit(Money::eur(dec!(2000))));
}

#[test]
fn work_racing_finalize_is_counted_or_rejected() {
    let executor = create_executor();
    let id = new_contract(&executor, 5000);
    let barrier = Arc::new(Barrier::new(2));

    let adder = {
        let executor: Executor = executor.clone();
        let barrier = Arc::clone(&barrier);
        let id = id.clone();
        thread::spawn(move || {
            barrier.wait();
            (0..20)
                .filter(|_| executor.execute(work_cmd(&id, "Racing", 100)).is_ok())
                .count()
        })
    };

    barrier.wait();
    let profit = executor
        .execute(Command::FinalizeContract { contract_id: id })
        .unwrap();
    let accepted = adder.join().unwrap();

    // Every accepted item was in the contract when profit was computed
    let expected = dec!(5000) - dec!(100) * rust_decimal::Decimal::from(accepted as i64);
    assert_eq!(profit, Output::Profit(Money::eur(expected)));
}

#[test]
fn distinct_contracts_do_not_interfere() {
    let service = create_service();
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let executor = Executor::from_shared(Arc::clone(&service));
            thread::spawn(move || {
                let id = new_contract(&executor, 1000);
                executor.execute(work_cmd(&id, "Own job", 400)).unwrap();
                executor
                    .execute(Command::FinalizeContract { contract_id: id })
                    .unwrap()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), Output::Profit(Money::eur(dec!(600))));
    }
    assert_eq!(service.contract_count(), THREADS);
}
