//! Structural request validation.
//!
//! Validation is pure: it reads only the request and the configured
//! [`Limits`], never the store. Every rule for a request is evaluated and all
//! violations are returned together, in a fixed order, so a caller sees every
//! problem in one round trip.
//!
//! Successful validation yields the typed values the engine works with, so
//! handlers never re-parse raw fields.

use tally_core::{
    ContractId, Currency, LimitError, Limits, Money, MoneyParts, WorkDone,
};
use tally_engine::ContractFilter;

use crate::error::ErrorDetail;
use crate::types::WorkRequest;
use crate::{Error, Result};

// =============================================================================
// Error codes
// =============================================================================

const DESCRIPTION_MANDATORY: &str = "Input.DescriptionOfWorkRequested.mandatory";
const CUSTOMER_NAME_MANDATORY: &str = "Input.CustomerName.mandatory";
const QUOTED_PRICE_MANDATORY: &str = "Input.QuotedPrice.mandatory";
const QUOTED_PRICE_INVALID: &str = "Input.QuotedPrice.invalid";
const QUOTED_PRICE_CURRENCY: &str = "Input.QuotedPrice.currency";
const CONTRACT_ID_MANDATORY: &str = "Input.ContractId.mandatory";
const WORK_MANDATORY: &str = "Input.Work.mandatory";
const WORK_DESCRIPTION_MANDATORY: &str = "Input.Work.Description.mandatory";
const WORK_COST_MANDATORY: &str = "Input.Work.Cost.mandatory";
const WORK_COST_INVALID: &str = "Input.Work.Cost.invalid";
const WORK_COST_MINIMUM: &str = "Input.Work.Cost.minimum";
const WORK_COST_CURRENCY: &str = "Input.Work.Cost.currency";
const CONTRACT_IDS_MANDATORY: &str = "Input.ContractIds.mandatory";
const FILTER_EXCLUSIVE: &str = "Input.Filter.exclusive";

/// A validated bulk lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindManyQuery {
    /// Explicit list of ids
    Ids(Vec<ContractId>),
    /// Tri-state status filter
    Filter(ContractFilter),
}

// =============================================================================
// Request validators
// =============================================================================

/// Validate a new quote, returning the price as `Money`
pub fn new_quote(
    limits: &Limits,
    customer_name: &str,
    description_of_work_requested: &str,
    quoted_price: Option<&MoneyParts>,
) -> Result<Money> {
    let mut errors = Vec::new();
    if is_blank(description_of_work_requested) {
        errors.push(ErrorDetail::new(
            "descriptionOfWorkRequested",
            DESCRIPTION_MANDATORY,
        ));
    }
    if is_blank(customer_name) {
        errors.push(ErrorDetail::new("customerName", CUSTOMER_NAME_MANDATORY));
    }

    let price = match quoted_price {
        None => {
            errors.push(ErrorDetail::new("quotedPrice", QUOTED_PRICE_MANDATORY));
            None
        }
        Some(parts) => {
            let amount = match amount_of(parts, limits.currency) {
                Ok(money) => match limits.validate_price(&money) {
                    Ok(()) => Some(money),
                    Err(_) => {
                        errors.push(
                            ErrorDetail::new("quotedPrice", QUOTED_PRICE_INVALID)
                                .with_arg("amount", money.amount()),
                        );
                        None
                    }
                },
                Err(raw) => {
                    errors.push(
                        ErrorDetail::new("quotedPrice", QUOTED_PRICE_INVALID).with_arg("amount", raw),
                    );
                    None
                }
            };
            if let Some(actual) = foreign_currency(parts, limits.currency) {
                errors.push(
                    ErrorDetail::new("quotedPrice", QUOTED_PRICE_CURRENCY)
                        .with_arg("expected", limits.currency)
                        .with_arg("actual", actual),
                );
            }
            amount
        }
    };

    finish(errors, price)
}

/// Validate a bare contract id (promote, finalize, find)
pub fn contract_id(raw: &str) -> Result<ContractId> {
    if is_blank(raw) {
        return Err(Error::invalid(ErrorDetail::new(
            "contractId",
            CONTRACT_ID_MANDATORY,
        )));
    }
    Ok(ContractId::from(raw))
}

/// Validate an add-work request
pub fn add_work(
    limits: &Limits,
    contract_id: &str,
    work: Option<&WorkRequest>,
) -> Result<(ContractId, WorkDone)> {
    let mut errors = Vec::new();
    if is_blank(contract_id) {
        errors.push(ErrorDetail::new("contractId", CONTRACT_ID_MANDATORY));
    }

    let item = match work {
        None => {
            errors.push(ErrorDetail::new("work", WORK_MANDATORY));
            None
        }
        Some(work) => {
            if is_blank(&work.description) {
                errors.push(ErrorDetail::new(
                    "work.description",
                    WORK_DESCRIPTION_MANDATORY,
                ));
            }
            let cost = match &work.cost {
                None => {
                    errors.push(ErrorDetail::new("work.cost", WORK_COST_MANDATORY));
                    None
                }
                Some(parts) => {
                    let cost = work_cost(limits, parts, &mut errors);
                    if let Some(actual) = foreign_currency(parts, limits.currency) {
                        errors.push(
                            ErrorDetail::new("work.cost", WORK_COST_CURRENCY)
                                .with_arg("expected", limits.currency)
                                .with_arg("actual", actual),
                        );
                    }
                    cost
                }
            };
            cost.map(|cost| WorkDone::new(cost, work.description.clone()))
        }
    };

    let item = finish(errors, item)?;
    Ok((ContractId::from(contract_id), item))
}

/// Validate a bulk lookup and decide its mode
pub fn find_many(contract_ids: &[String], filter: &ContractFilter) -> Result<FindManyQuery> {
    let mut errors = Vec::new();
    if contract_ids.is_empty() && filter.is_unset() {
        errors.push(ErrorDetail::new("contractIds", CONTRACT_IDS_MANDATORY));
    }
    if !contract_ids.is_empty() && !filter.is_unset() {
        errors.push(ErrorDetail::new("filter", FILTER_EXCLUSIVE));
    }
    for (index, raw) in contract_ids.iter().enumerate() {
        if is_blank(raw) {
            errors.push(
                ErrorDetail::new(format!("contractIds[{}]", index), CONTRACT_ID_MANDATORY)
                    .with_arg("index", index),
            );
        }
    }

    let query = if contract_ids.is_empty() {
        FindManyQuery::Filter(*filter)
    } else {
        FindManyQuery::Ids(contract_ids.iter().map(|id| ContractId::from(id.as_str())).collect())
    };
    finish(errors, Some(query))
}

// =============================================================================
// Helpers
// =============================================================================

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn finish<T>(errors: Vec<ErrorDetail>, value: Option<T>) -> Result<T> {
    match value {
        Some(value) if errors.is_empty() => Ok(value),
        _ => Err(Error::Validation { errors }),
    }
}

/// Amount of a parts value in the service currency, ignoring its own code
///
/// The currency is checked separately so that an amount problem and a
/// currency problem are both reported.
fn amount_of(parts: &MoneyParts, currency: Currency) -> std::result::Result<Money, String> {
    let bare = MoneyParts {
        currency_code: String::new(),
        units: parts.units,
        nanos: parts.nanos,
    };
    Money::from_parts(&bare, currency)
        .map_err(|_| format!("units={} nanos={}", parts.units, parts.nanos))
}

/// The offending currency code, if it is set and not the service's
fn foreign_currency(parts: &MoneyParts, expected: Currency) -> Option<String> {
    let code = parts.currency_code.trim();
    if code.is_empty() {
        return None;
    }
    match Currency::parse(code) {
        Ok(currency) if currency == expected => None,
        Ok(currency) => Some(currency.to_string()),
        Err(_) => Some(code.to_string()),
    }
}

fn work_cost(limits: &Limits, parts: &MoneyParts, errors: &mut Vec<ErrorDetail>) -> Option<Money> {
    let cost = match amount_of(parts, limits.currency) {
        Ok(cost) => cost,
        Err(raw) => {
            errors.push(ErrorDetail::new("work.cost", WORK_COST_INVALID).with_arg("amount", raw));
            return None;
        }
    };
    match limits.validate_work_cost(&cost) {
        Ok(()) => Some(cost),
        Err(LimitError::BelowMinimum { minimum, actual }) => {
            errors.push(
                ErrorDetail::new("work.cost", WORK_COST_MINIMUM)
                    .with_arg("minimum", minimum)
                    .with_arg("amount", actual),
            );
            None
        }
        Err(other) => {
            errors.push(
                ErrorDetail::new("work.cost", WORK_COST_INVALID).with_arg("amount", other),
            );
            None
        }
    }
}
