use async_trait::async_trait;
use log::debug;

use crate::calendar::BusinessCalendar;
use crate::provider::{ContractId, ProviderError};
use crate::rules::{
    self, Contract, RequestedSpan, VacationEntitlement, VacationRecord,
};
use crate::time::{Date, Year};

/// Contract and attendance data, read synchronously.
pub trait ContractProvider {
    fn vacation_usage(
        &self,
        contract: ContractId,
        year: Year,
    ) -> Result<VacationEntitlement, ProviderError>;

    fn requested_span(&self, start: Date, end: Date) -> Result<RequestedSpan, ProviderError>;
}

/// Contract and attendance data from a remote service.
#[async_trait]
pub trait AsyncContractProvider: Send + Sync {
    async fn vacation_usage(
        &self,
        contract: ContractId,
        year: Year,
    ) -> Result<VacationEntitlement, ProviderError>;

    async fn requested_span(&self, start: Date, end: Date)
        -> Result<RequestedSpan, ProviderError>;
}

/// Computes usage and spans on the client from contracts and past requests
/// that are already known, instead of asking the backend.
#[derive(Debug, Clone, Default)]
pub struct LocalContracts {
    contracts: Vec<Contract>,
    history: Vec<VacationRecord>,
    calendar: BusinessCalendar,
}

impl LocalContracts {
    pub fn new(
        contracts: impl IntoIterator<Item = Contract>,
        history: impl IntoIterator<Item = VacationRecord>,
        calendar: BusinessCalendar,
    ) -> Self {
        Self {
            contracts: contracts.into_iter().collect(),
            history: history.into_iter().collect(),
            calendar,
        }
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.iter().find(|contract| contract.id() == id)
    }

    pub fn history(&self) -> &[VacationRecord] {
        &self.history
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }
}

impl ContractProvider for LocalContracts {
    fn vacation_usage(
        &self,
        contract: ContractId,
        year: Year,
    ) -> Result<VacationEntitlement, ProviderError> {
        let contract = self
            .contract(contract)
            .ok_or(ProviderError::UnknownContract(contract))?;

        Ok(rules::resolve_entitlement(contract, year, &self.history))
    }

    fn requested_span(&self, start: Date, end: Date) -> Result<RequestedSpan, ProviderError> {
        rules::resolve_requested_span(&self.calendar, start, end).map_err(|error| {
            debug!("rejecting span: {}", error);
            ProviderError::InvalidResponse {
                provider: "contratos",
                reason: error.to_string(),
            }
        })
    }
}

#[async_trait]
impl AsyncContractProvider for LocalContracts {
    async fn vacation_usage(
        &self,
        contract: ContractId,
        year: Year,
    ) -> Result<VacationEntitlement, ProviderError> {
        ContractProvider::vacation_usage(self, contract, year)
    }

    async fn requested_span(
        &self,
        start: Date,
        end: Date,
    ) -> Result<RequestedSpan, ProviderError> {
        ContractProvider::requested_span(self, start, end)
    }
}
