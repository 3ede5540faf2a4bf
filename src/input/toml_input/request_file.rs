use serde::{Deserialize, Serialize};

use crate::provider::HealthRecord;
use crate::request::Request;
use crate::rules::{Contract, VacationRecord};
use crate::time::Date;

/// `[context]` of a request file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Context {
    /// Overrides the current date, mostly for reproducible checks.
    #[serde(default)]
    today: Option<Date>,
    #[serde(default)]
    editing: bool,
}

impl Context {
    pub fn today(&self) -> Option<Date> {
        self.today
    }

    pub fn editing(&self) -> bool {
        self.editing
    }
}

/// A request together with the data it is validated against.
///
/// ```toml
/// [request]
/// type = "vacacion"
/// period = 2025
/// start_date = "2025-06-02"
/// end_date = "2025-06-06"
///
/// [contract]
/// id = 1
/// start_date = 2015-03-01
///
/// [[history]]
/// contract = 1
/// period = 2025
/// requested_days = 5
/// status = "aprobada"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestFile {
    request: Request,
    #[serde(default)]
    context: Context,
    #[serde(default)]
    contract: Option<Contract>,
    #[serde(default)]
    history: Vec<VacationRecord>,
    #[serde(default, rename = "health_record")]
    health_records: Vec<HealthRecord>,
}

impl RequestFile {
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    pub fn history(&self) -> &[VacationRecord] {
        &self.history
    }

    pub fn health_records(&self) -> &[HealthRecord] {
        &self.health_records
    }
}
