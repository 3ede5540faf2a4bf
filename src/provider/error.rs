use thiserror::Error;

use crate::provider::ContractId;
use crate::time::Year;

/// Failure of one of the external services the engine reads from.
///
/// Never fatal: callers log it, show [`ProviderError::banner`] and keep
/// working with whatever data they already have.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("the {provider} provider is unavailable: {reason}")]
    Unavailable {
        provider: &'static str,
        reason: String,
    },
    #[error("no contract with id {0}")]
    UnknownContract(ContractId),
    #[error("no vacation data for contract {contract} in period {year}")]
    UnknownPeriod { contract: ContractId, year: Year },
    #[error("the {provider} provider sent invalid data: {reason}")]
    InvalidResponse {
        provider: &'static str,
        reason: String,
    },
}

impl ProviderError {
    pub fn unavailable(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            provider,
            reason: reason.into(),
        }
    }

    /// The non-blocking message shown above the request form.
    #[must_use]
    pub fn banner(&self) -> String {
        match self {
            Self::Unavailable { provider, .. } | Self::InvalidResponse { provider, .. } => {
                format!(
                    "No se pudieron obtener los datos de {provider}. \
                     Los cálculos pueden no estar actualizados."
                )
            }
            Self::UnknownContract(id) => format!("No se encontró el contrato {id}."),
            Self::UnknownPeriod { contract, year } => {
                format!("No hay datos de vacaciones del período {year} para el contrato {contract}.")
            }
        }
    }
}
