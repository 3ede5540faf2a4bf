use log::debug;
use serde::{Deserialize, Serialize};

use crate::provider::{ContractId, EmployeeId};
use crate::rules::Seniority;
use crate::time::{Date, Month, Year};
use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Contract {
    id: ContractId,
    #[serde(default)]
    employee: Option<EmployeeId>,
    #[serde(with = "utils::serde_toml_local_date")]
    start_date: Date,
}

impl Contract {
    #[must_use]
    pub fn new(id: ContractId, start_date: Date) -> Self {
        Self {
            id,
            employee: None,
            start_date,
        }
    }

    #[must_use]
    pub fn with_employee(mut self, employee: EmployeeId) -> Self {
        self.employee = Some(employee);
        self
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn employee(&self) -> Option<EmployeeId> {
        self.employee
    }

    /// When the employment started, seniority is counted from here.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Seniority for the vacation period of `year`.
    ///
    /// The reference date is the 31st of december of that year.
    #[must_use]
    pub fn seniority_in(&self, year: Year) -> Seniority {
        Seniority::between(self.start_date, Date::last_day(year, Month::December))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[serde(alias = "pendiente")]
    Pending,
    #[serde(alias = "aprobada")]
    Approved,
    #[serde(alias = "rechazada")]
    Rejected,
    #[serde(alias = "cancelada")]
    Cancelled,
}

/// A vacation request that was made in the past.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VacationRecord {
    contract: ContractId,
    period: Year,
    requested_days: usize,
    status: RequestStatus,
}

impl VacationRecord {
    #[must_use]
    pub fn new(
        contract: ContractId,
        period: Year,
        requested_days: usize,
        status: RequestStatus,
    ) -> Self {
        Self {
            contract,
            period,
            requested_days,
            status,
        }
    }

    pub fn contract(&self) -> ContractId {
        self.contract
    }

    pub fn period(&self) -> Year {
        self.period
    }

    pub fn requested_days(&self) -> usize {
        self.requested_days
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct VacationEntitlement {
    days_corresponding: usize,
    days_taken: usize,
    days_available: usize,
}

impl VacationEntitlement {
    /// The available days are clamped at zero.
    #[must_use]
    pub const fn new(days_corresponding: usize, days_taken: usize) -> Self {
        Self {
            days_corresponding,
            days_taken,
            days_available: days_corresponding.saturating_sub(days_taken),
        }
    }

    pub const fn days_corresponding(&self) -> usize {
        self.days_corresponding
    }

    pub const fn days_taken(&self) -> usize {
        self.days_taken
    }

    pub const fn days_available(&self) -> usize {
        self.days_available
    }

    /// More days were taken than the period grants.
    #[must_use]
    pub const fn is_overdrawn(&self) -> bool {
        self.days_taken > self.days_corresponding
    }

    #[must_use]
    pub const fn covers(&self, requested_days: usize) -> bool {
        requested_days <= self.days_available
    }
}

/// Vacation days for the period `year` of the `contract`.
///
/// Days taken are the requested days of every approved request in
/// `history` for the same contract and period.
#[must_use]
pub fn resolve_entitlement(
    contract: &Contract,
    year: Year,
    history: &[VacationRecord],
) -> VacationEntitlement {
    let seniority = contract.seniority_in(year);

    let days_taken = history
        .iter()
        .filter(|record| {
            record.contract() == contract.id()
                && record.period() == year
                && record.status() == RequestStatus::Approved
        })
        .map(VacationRecord::requested_days)
        .sum();

    let entitlement = VacationEntitlement::new(seniority.vacation_days(), days_taken);
    debug!(
        "contract {} period {}: {} -> {:?}",
        contract.id(),
        year,
        seniority,
        entitlement
    );

    entitlement
}

/// The dates in which vacations of a period can be taken:
/// from may 1st of the period until april 30th of the next year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VacationPeriodWindow {
    year: Year,
}

impl VacationPeriodWindow {
    #[must_use]
    pub const fn new(year: Year) -> Self {
        Self { year }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn first_day(&self) -> Date {
        Date::first_day(self.year, Month::May)
    }

    #[must_use]
    pub const fn last_day(&self) -> Date {
        Date::last_day(self.year.next(), Month::April)
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }
}
