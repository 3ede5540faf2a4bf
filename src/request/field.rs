use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::BusinessDayViolation;
use crate::provider::HealthRecordId;
use crate::request::LegalReason;
use crate::rules::OvertimeTier;
use crate::time::Date;

/// Free text fields are capped to this many characters.
pub const MAX_TEXT_LENGTH: usize = 500;

/// The inputs of the request form that can carry an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[display("Motivo legal")]
    LegalReason,
    #[display("Fecha de inicio")]
    StartDate,
    #[display("Fecha de fin")]
    EndDate,
    #[display("Descripción")]
    Description,
    #[display("Registro de salud")]
    HealthRecord,
    #[display("Período")]
    Period,
    #[display("Fecha")]
    Date,
    #[display("Hora de inicio")]
    StartTime,
    #[display("Hora de fin")]
    EndTime,
    #[display("Tipo de hora extra")]
    Tier,
    #[display("Motivo")]
    Reason,
    #[display("Fecha de notificación")]
    NotificationDate,
}

impl Field {
    /// Date fields that only accept business days.
    ///
    /// The overtime date is not one of them, overtime is usually worked
    /// on weekends and holidays.
    #[must_use]
    pub const fn requires_business_day(&self) -> bool {
        matches!(
            self,
            Self::StartDate | Self::EndDate | Self::NotificationDate
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} es obligatorio")]
    Required { field: Field },
    #[error("{field} no puede ser anterior a {other}")]
    Before { field: Field, other: Field },
    #[error("{field} debe ser posterior a {other}")]
    NotAfter { field: Field, other: Field },
    #[error("{field} no puede superar los {max} caracteres")]
    TooLong { field: Field, max: usize },
    #[error("{field} no puede ser anterior a hoy")]
    InPast { field: Field },
    #[error("{field} no puede ser posterior a hoy")]
    InFuture { field: Field },
    #[error("{field} debe estar dentro del período, entre {first} y {last}")]
    OutsidePeriod { field: Field, first: Date, last: Date },
    #[error("Los días solicitados ({requested}) superan los disponibles ({available})")]
    ExceedsAvailable {
        field: Field,
        requested: usize,
        available: usize,
    },
    #[error("Debe seleccionar un registro de salud para {reason}")]
    MissingHealthRecord { field: Field, reason: LegalReason },
    #[error("El registro de salud {id} no pertenece al empleado")]
    UnknownHealthRecord { field: Field, id: HealthRecordId },
    #[error("{field} debe ser {expected} para la fecha indicada")]
    TierMismatch { field: Field, expected: OvertimeTier },
    #[error("{violation}")]
    NotBusinessDay {
        field: Field,
        violation: BusinessDayViolation,
    },
}

impl FieldError {
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::Before { field, .. }
            | Self::NotAfter { field, .. }
            | Self::TooLong { field, .. }
            | Self::InPast { field }
            | Self::InFuture { field }
            | Self::OutsidePeriod { field, .. }
            | Self::ExceedsAvailable { field, .. }
            | Self::MissingHealthRecord { field, .. }
            | Self::UnknownHealthRecord { field, .. }
            | Self::TierMismatch { field, .. }
            | Self::NotBusinessDay { field, .. } => *field,
        }
    }
}

/// Problems that are shown to the user, but do not block the submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldWarning {
    #[error("El empleado no tiene registros de salud para vincular a {reason}")]
    NoHealthRecords { field: Field, reason: LegalReason },
    #[error("{reason} corresponde a {allowed} días corridos, se solicitaron {requested}")]
    ExceedsStatutoryDays {
        field: Field,
        reason: LegalReason,
        allowed: usize,
        requested: usize,
    },
    #[error("No se pudo verificar el saldo de vacaciones para los {requested} días solicitados")]
    UnknownBalance { field: Field, requested: usize },
}

impl FieldWarning {
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::NoHealthRecords { field, .. }
            | Self::ExceedsStatutoryDays { field, .. }
            | Self::UnknownBalance { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::Required {
                field: Field::StartDate
            }
            .to_string(),
            "Fecha de inicio es obligatorio"
        );
        assert_eq!(
            FieldError::OutsidePeriod {
                field: Field::StartDate,
                first: date!(2025:05:01),
                last: date!(2026:04:30),
            }
            .to_string(),
            "Fecha de inicio debe estar dentro del período, entre 2025-05-01 y 2026-04-30"
        );
        assert_eq!(
            FieldError::TierMismatch {
                field: Field::Tier,
                expected: OvertimeTier::WeekendHoliday100,
            }
            .to_string(),
            "Tipo de hora extra debe ser 100% para la fecha indicada"
        );
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(
            serde_json::to_string(&Field::NotificationDate).ok(),
            Some("\"notification_date\"".to_string())
        );
        assert!(!Field::Date.requires_business_day());
        assert!(Field::EndDate.requires_business_day());
    }
}
