//! Test modules for the executor crate.


use crate::{Command, Executor, MoneyParts, Output};
use tally_engine::ContractService;

/// Create a test executor over an in-memory service.
pub(crate) fn create_test_executor() -> Executor {
    Executor::new(ContractService::ephemeral())
}

/// Whole euros as boundary money.
pub(crate) fn eur(units: i64) -> MoneyParts {
    MoneyParts {
        currency_code: "EUR".to_string(),
        units,
        nanos: 0,
    }
}

/// A valid NewQuote command.
pub(crate) fn new_quote_cmd(units: i64) -> Command {
    Command::NewQuote {
        customer_name: "Jan Jansen".to_string(),
        description_of_work_requested: "Paint the fence".to_string(),
        quoted_price: Some(eur(units)),
    }
}

/// Create a quote and return its id as a string.
pub(crate) fn create_quote(executor: &Executor, units: i64) -> String {
    match executor.execute(new_quote_cmd(units)).unwrap() {
        Output::ContractId(id) => id.to_string(),
        other => panic!("Expected ContractId, got {:?}", other),
    }
}
