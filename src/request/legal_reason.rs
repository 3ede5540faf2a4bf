use core::fmt;

use serde::{Deserialize, Serialize};

use crate::provider::HealthRecordKind;

/// The reasons for a leave that the labor law recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum LegalReason {
    #[serde(rename = "maternidad")]
    Maternity,
    #[serde(rename = "nacimiento")]
    Birth,
    #[serde(rename = "matrimonio")]
    Marriage,
    #[serde(rename = "fallecimiento_conyuge")]
    DeathOfSpouse,
    #[serde(rename = "fallecimiento_hijo")]
    DeathOfChild,
    #[serde(rename = "fallecimiento_padres")]
    DeathOfParent,
    #[serde(rename = "fallecimiento_hermano")]
    DeathOfSibling,
    #[serde(rename = "examen")]
    Exam,
    #[serde(rename = "accidente_trabajo")]
    WorkAccident,
    #[serde(rename = "enfermedad_inculpable")]
    NonCulpableIllness,
    #[serde(rename = "excedencia")]
    LeaveOfAbsence,
    #[serde(rename = "donacion_sangre")]
    BloodDonation,
    #[serde(rename = "actividad_gremial")]
    UnionDuty,
    #[serde(rename = "mudanza")]
    Moving,
    #[serde(rename = "citacion_judicial")]
    CourtSummons,
    #[serde(rename = "sin_goce")]
    Unpaid,
}

impl LegalReason {
    pub const ALL: [Self; 16] = [
        Self::Maternity,
        Self::Birth,
        Self::Marriage,
        Self::DeathOfSpouse,
        Self::DeathOfChild,
        Self::DeathOfParent,
        Self::DeathOfSibling,
        Self::Exam,
        Self::WorkAccident,
        Self::NonCulpableIllness,
        Self::LeaveOfAbsence,
        Self::BloodDonation,
        Self::UnionDuty,
        Self::Moving,
        Self::CourtSummons,
        Self::Unpaid,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Maternity => "Maternidad",
            Self::Birth => "Nacimiento de hijo",
            Self::Marriage => "Matrimonio",
            Self::DeathOfSpouse => "Fallecimiento de cónyuge o conviviente",
            Self::DeathOfChild => "Fallecimiento de hijo",
            Self::DeathOfParent => "Fallecimiento de padre o madre",
            Self::DeathOfSibling => "Fallecimiento de hermano",
            Self::Exam => "Examen",
            Self::WorkAccident => "Accidente de trabajo",
            Self::NonCulpableIllness => "Enfermedad inculpable",
            Self::LeaveOfAbsence => "Excedencia",
            Self::BloodDonation => "Donación de sangre",
            Self::UnionDuty => "Actividad gremial",
            Self::Moving => "Mudanza",
            Self::CourtSummons => "Citación judicial",
            Self::Unpaid => "Sin goce de haberes",
        }
    }

    /// Leaves that have to be backed by a health record.
    #[must_use]
    pub const fn requires_health_record(&self) -> bool {
        matches!(self, Self::WorkAccident | Self::NonCulpableIllness)
    }

    /// The kind of health record that backs this leave.
    #[must_use]
    pub const fn health_record_kind(&self) -> Option<HealthRecordKind> {
        match self {
            Self::WorkAccident => Some(HealthRecordKind::Accident),
            Self::NonCulpableIllness => Some(HealthRecordKind::Illness),
            _ => None,
        }
    }

    /// Calendar days the law grants for this reason, if it fixes a number.
    #[must_use]
    pub const fn statutory_days(&self) -> Option<usize> {
        match self {
            Self::Maternity => Some(90),
            Self::Birth => Some(2),
            Self::Marriage => Some(10),
            Self::DeathOfSpouse | Self::DeathOfChild | Self::DeathOfParent => Some(3),
            Self::DeathOfSibling => Some(1),
            Self::Exam => Some(2),
            Self::BloodDonation => Some(1),
            _ => None,
        }
    }
}

impl fmt::Display for LegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
