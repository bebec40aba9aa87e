//! Lifecycle command handlers.

use tally_core::MoneyParts;
use tally_engine::ContractService;

use crate::convert::convert_result;
use crate::types::WorkRequest;
use crate::validation;
use crate::{Output, Result};

/// Handle NewQuote command.
pub fn new_quote(
    service: &ContractService,
    customer_name: String,
    description_of_work_requested: String,
    quoted_price: Option<MoneyParts>,
) -> Result<Output> {
    let price = validation::new_quote(
        service.limits(),
        &customer_name,
        &description_of_work_requested,
        quoted_price.as_ref(),
    )?;
    let id = convert_result(service.new_quote(
        &customer_name,
        &description_of_work_requested,
        price,
    ))?;
    Ok(Output::ContractId(id))
}

/// Handle PromoteQuote command.
pub fn promote_quote(service: &ContractService, contract_id: String) -> Result<Output> {
    let id = validation::contract_id(&contract_id)?;
    convert_result(service.promote_quote(&id))?;
    Ok(Output::Unit)
}

/// Handle AddWorkDone command.
pub fn add_work_done(
    service: &ContractService,
    contract_id: String,
    work: Option<WorkRequest>,
) -> Result<Output> {
    let (id, work) = validation::add_work(service.limits(), &contract_id, work.as_ref())?;
    convert_result(service.add_work_done(&id, work))?;
    Ok(Output::Unit)
}

/// Handle FinalizeContract command.
pub fn finalize_contract(service: &ContractService, contract_id: String) -> Result<Output> {
    let id = validation::contract_id(&contract_id)?;
    let profit = convert_result(service.finalize_contract(&id))?;
    Ok(Output::Profit(profit))
}
