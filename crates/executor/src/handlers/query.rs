//! Lookup command handlers.

use tally_engine::{ContractFilter, ContractService};

use crate::convert::convert_result;
use crate::types::{ContractList, ContractView, Include};
use crate::validation::{self, FindManyQuery};
use crate::{Output, Result};

/// Handle Find command.
pub fn find(service: &ContractService, contract_id: String, include: Include) -> Result<Output> {
    let id = validation::contract_id(&contract_id)?;
    let contract = convert_result(service.find(&id))?;
    Ok(Output::Contract(ContractView::project(&contract, include)))
}

/// Handle FindMany command.
pub fn find_many(
    service: &ContractService,
    contract_ids: Vec<String>,
    filter: ContractFilter,
    include: Include,
) -> Result<Output> {
    let list = match validation::find_many(&contract_ids, &filter)? {
        FindManyQuery::Ids(ids) => {
            let result = service.find_many_by_ids(&ids);
            ContractList {
                contracts: result
                    .found
                    .iter()
                    .map(|c| ContractView::project(c, include))
                    .collect(),
                missing: result.missing,
            }
        }
        FindManyQuery::Filter(filter) => ContractList {
            contracts: service
                .find_many_by_filter(&filter)
                .iter()
                .map(|c| ContractView::project(c, include))
                .collect(),
            missing: Vec::new(),
        },
    };
    Ok(Output::Contracts(list))
}
