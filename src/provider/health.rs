use serde::{Deserialize, Serialize};

use crate::provider::{EmployeeId, HealthRecordId, ProviderError};
use crate::time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRecordKind {
    #[serde(alias = "accidente")]
    Accident,
    #[serde(alias = "enfermedad")]
    Illness,
    #[serde(alias = "examen")]
    Checkup,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthRecord {
    id: HealthRecordId,
    employee: EmployeeId,
    kind: HealthRecordKind,
    date: Date,
}

impl HealthRecord {
    #[must_use]
    pub fn new(id: HealthRecordId, employee: EmployeeId, kind: HealthRecordKind, date: Date) -> Self {
        Self {
            id,
            employee,
            kind,
            date,
        }
    }

    pub fn id(&self) -> HealthRecordId {
        self.id
    }

    pub fn employee(&self) -> EmployeeId {
        self.employee
    }

    pub fn kind(&self) -> HealthRecordKind {
        self.kind
    }

    pub fn date(&self) -> Date {
        self.date
    }
}

/// Narrows down which records of an employee are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthRecordFilter {
    kind: Option<HealthRecordKind>,
    since: Option<Date>,
}

impl HealthRecordFilter {
    #[must_use]
    pub fn kind(mut self, kind: HealthRecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn since(mut self, date: Date) -> Self {
        self.since = Some(date);
        self
    }

    #[must_use]
    pub fn matches(&self, record: &HealthRecord) -> bool {
        self.kind.map_or(true, |kind| record.kind() == kind)
            && self.since.map_or(true, |since| record.date() >= since)
    }
}

pub trait HealthRecordProvider {
    fn list_health_records(
        &self,
        employee: EmployeeId,
        filter: &HealthRecordFilter,
    ) -> Result<Vec<HealthRecord>, ProviderError>;
}

impl HealthRecordProvider for [HealthRecord] {
    fn list_health_records(
        &self,
        employee: EmployeeId,
        filter: &HealthRecordFilter,
    ) -> Result<Vec<HealthRecord>, ProviderError> {
        Ok(self
            .iter()
            .filter(|record| record.employee() == employee && filter.matches(record))
            .cloned()
            .collect())
    }
}
