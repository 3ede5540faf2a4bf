use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::provider::HealthRecordId;
use crate::request::{Field, LegalReason};
use crate::rules::OvertimeTier;
use crate::time::{Date, TimeStamp, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
pub enum RequestType {
    #[serde(rename = "licencia")]
    #[display("licencia")]
    Leave,
    #[serde(rename = "vacacion", alias = "vacaciones")]
    #[display("vacacion")]
    Vacation,
    #[serde(rename = "horas_extras")]
    #[display("horas_extras")]
    Overtime,
    #[serde(rename = "renuncia")]
    #[display("renuncia")]
    Resignation,
}

/// The fields of a request as they are currently filled in.
///
/// Every field is optional, the form is validated while it is being
/// edited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "licencia")]
    Leave(LeaveFields),
    #[serde(rename = "vacacion", alias = "vacaciones")]
    Vacation(VacationFields),
    #[serde(rename = "horas_extras")]
    Overtime(OvertimeFields),
    #[serde(rename = "renuncia")]
    Resignation(ResignationFields),
}

impl Request {
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        match self {
            Self::Leave(_) => RequestType::Leave,
            Self::Vacation(_) => RequestType::Vacation,
            Self::Overtime(_) => RequestType::Overtime,
            Self::Resignation(_) => RequestType::Resignation,
        }
    }

    /// Every date field of this kind of request, filled in or not.
    #[must_use]
    pub fn date_fields(&self) -> Vec<(Field, Option<Date>)> {
        match self {
            Self::Leave(leave) => vec![
                (Field::StartDate, leave.start_date),
                (Field::EndDate, leave.end_date),
            ],
            Self::Vacation(vacation) => vec![
                (Field::StartDate, vacation.start_date),
                (Field::EndDate, vacation.end_date),
            ],
            Self::Overtime(overtime) => vec![(Field::Date, overtime.date)],
            Self::Resignation(resignation) => {
                vec![(Field::NotificationDate, resignation.notification_date)]
            }
        }
    }

    /// The date fields that are filled in.
    #[must_use]
    pub fn dates(&self) -> Vec<(Field, Date)> {
        self.date_fields()
            .into_iter()
            .filter_map(|(field, date)| Some((field, date?)))
            .collect()
    }

    /// Every year from the earliest to the latest entered date.
    #[must_use]
    pub fn years(&self) -> Vec<Year> {
        let years = self.dates().into_iter().map(|(_, date)| date.year());

        match (years.clone().min(), years.max()) {
            (Some(first), Some(last)) => first.through(last).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LeaveFields {
    pub legal_reason: Option<LegalReason>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub description: Option<String>,
    pub health_record: Option<HealthRecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VacationFields {
    pub period: Option<Year>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OvertimeFields {
    pub date: Option<Date>,
    pub start_time: Option<TimeStamp>,
    pub end_time: Option<TimeStamp>,
    pub tier: Option<OvertimeTier>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResignationFields {
    /// Today, if not entered.
    pub notification_date: Option<Date>,
    pub reason: Option<String>,
    pub notice_honored: Option<bool>,
}

impl ResignationFields {
    #[must_use]
    pub fn notification_date_or(&self, today: Date) -> Date {
        self.notification_date.unwrap_or(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_tagged_by_type() {
        let request: Request = toml::from_str(
            r#"
            type = "vacacion"
            period = 2025
            start_date = "2025-04-30"
            end_date = "2025-05-02"
            "#,
        )
        .unwrap();

        assert_eq!(
            request,
            Request::Vacation(VacationFields {
                period: Some(Year::new(2025)),
                start_date: Some(date!(2025:04:30)),
                end_date: Some(date!(2025:05:02)),
                description: None,
            })
        );
        assert_eq!(request.request_type(), RequestType::Vacation);
    }

    #[test]
    fn test_overtime_from_json() {
        let request: Request = serde_json::from_str(
            r#"{"type": "horas_extras", "date": "2025-06-07", "start_time": "09:00", "tier": "100"}"#,
        )
        .unwrap();

        assert_eq!(request.request_type(), RequestType::Overtime);
        assert_eq!(request.dates(), vec![(Field::Date, date!(2025:06:07))]);
    }

    #[test]
    fn test_dates_skip_missing() {
        let request = Request::Leave(LeaveFields {
            end_date: Some(date!(2025:03:10)),
            ..LeaveFields::default()
        });

        assert_eq!(request.dates(), vec![(Field::EndDate, date!(2025:03:10))]);
    }
}
