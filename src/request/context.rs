use serde::{Deserialize, Serialize};

use crate::provider::{
    EmployeeId, HealthRecord, HealthRecordFilter, HealthRecordId, HealthRecordProvider,
    ProviderError,
};
use crate::rules::VacationEntitlement;
use crate::time::Date;

/// Everything besides the request fields that a validation depends on.
///
/// Passed explicitly, so two validations with the same context and the
/// same fields always give the same result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationContext {
    today: Date,
    /// An existing request is being edited, past start dates are kept.
    #[serde(default)]
    editing: bool,
    #[serde(default)]
    health_records: Vec<HealthRecord>,
    #[serde(default)]
    entitlement: Option<VacationEntitlement>,
}

impl ValidationContext {
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            today,
            editing: false,
            health_records: Vec::new(),
            entitlement: None,
        }
    }

    #[must_use]
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    #[must_use]
    pub fn with_health_records(mut self, records: impl IntoIterator<Item = HealthRecord>) -> Self {
        self.health_records = records.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_entitlement(mut self, entitlement: VacationEntitlement) -> Self {
        self.entitlement = Some(entitlement);
        self
    }

    /// Replaces the health records with the ones of `employee` from the `provider`.
    pub fn load_health_records<P>(
        &mut self,
        provider: &P,
        employee: EmployeeId,
    ) -> Result<(), ProviderError>
    where
        P: HealthRecordProvider + ?Sized,
    {
        self.health_records = provider.list_health_records(employee, &HealthRecordFilter::default())?;
        Ok(())
    }

    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn health_records(&self) -> &[HealthRecord] {
        &self.health_records
    }

    #[must_use]
    pub fn health_record(&self, id: HealthRecordId) -> Option<&HealthRecord> {
        self.health_records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub const fn entitlement(&self) -> Option<VacationEntitlement> {
        self.entitlement
    }
}
