//! Vacation days, requested spans and the period window.

use leave_rules::calendar::BusinessCalendar;
use leave_rules::date;
use leave_rules::provider::{
    AsyncContractProvider, ContractId, FetchOutcome, LatestOnly, LocalContracts, ProviderError,
};
use leave_rules::request::Field;
use leave_rules::rules::{
    self, Contract, RequestStatus, RequestedSpan, Seniority, VacationEntitlement, VacationRecord,
};
use leave_rules::time::{Date, Month, Year};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_single_day_span() {
    let calendar = common::christmas_only();

    // a wednesday
    assert_eq!(
        rules::resolve_requested_span(&calendar, date!(2025:12:24), date!(2025:12:24)),
        Ok(RequestedSpan::new(1, date!(2025:12:26)))
    );
    // a friday
    assert_eq!(
        rules::resolve_requested_span(&calendar, date!(2025:12:26), date!(2025:12:26)),
        Ok(RequestedSpan::new(1, date!(2025:12:29)))
    );
}

#[test]
fn test_span_excludes_weekends_and_holidays() {
    let calendar = common::christmas_only();

    assert_eq!(
        rules::resolve_requested_span(&calendar, date!(2025:12:22), date!(2026:01:02)),
        Ok(RequestedSpan::new(9, date!(2026:01:05)))
    );
}

#[test]
fn test_seniority_table() {
    let period = Year::new(2025);

    for (years, expected) in [(4, 14), (5, 14), (6, 21), (10, 21), (11, 28), (20, 28), (21, 35)] {
        // the seniority is measured at the end of the period year
        let start = Date::new(2025 - years, Month::December, 31).unwrap();
        let contract = Contract::new(ContractId::new(1), start);

        assert_eq!(contract.seniority_in(period), Seniority::from_years(years));
        assert_eq!(
            rules::resolve_entitlement(&contract, period, &[]),
            VacationEntitlement::new(expected, 0),
            "{} years",
            years
        );
    }
}

#[test]
fn test_only_approved_requests_are_taken() {
    let contract = Contract::new(ContractId::new(3), date!(2018:02:01));
    let history = [
        VacationRecord::new(ContractId::new(3), Year::new(2025), 5, RequestStatus::Approved),
        VacationRecord::new(ContractId::new(3), Year::new(2025), 3, RequestStatus::Rejected),
        VacationRecord::new(ContractId::new(3), Year::new(2025), 2, RequestStatus::Pending),
        VacationRecord::new(ContractId::new(3), Year::new(2024), 7, RequestStatus::Approved),
        VacationRecord::new(ContractId::new(4), Year::new(2025), 7, RequestStatus::Approved),
    ];

    let entitlement = rules::resolve_entitlement(&contract, Year::new(2025), &history);
    assert_eq!(entitlement, VacationEntitlement::new(21, 5));
    assert_eq!(entitlement.days_available(), 16);
}

#[test]
fn test_overdrawn_entitlement_is_clamped() {
    let entitlement = VacationEntitlement::new(14, 20);

    assert_eq!(entitlement.days_available(), 0);
    assert!(entitlement.is_overdrawn());
    assert!(!entitlement.covers(1));
}

#[test]
fn test_start_in_previous_period_window() {
    let result = common::validate(
        None,
        &common::make_vacation(2025, "2025-04-30", "2025-05-02", "2025-04-01"),
    );

    assert!(!result.is_valid());
    assert!(result.error(Field::StartDate).is_some());
    assert_eq!(result.error(Field::EndDate), None);
}

#[test]
fn test_valid_vacation() {
    let result = common::validate(
        None,
        &common::make_vacation(2025, "2025-07-14", "2025-07-25", "2025-06-01"),
    );

    assert_eq!(result.field_errors().len(), 0);
    assert!(result.is_valid());
}

#[test]
fn test_end_date_on_a_holiday() {
    // the 9th of july is independence day
    let result = common::validate(
        None,
        &common::make_vacation(2025, "2025-07-07", "2025-07-09", "2025-06-01"),
    );

    assert_eq!(
        result.error(Field::EndDate),
        Some("Fecha de fin debe ser un día hábil")
    );
}

#[test]
fn test_vacation_without_contract_warns_about_the_balance() {
    let result = common::validate(
        None,
        &common::make_vacation(2025, "2025-06-02", "2026-04-30", "2025-05-15"),
    );

    // the days can not be checked, so the request is flagged instead
    assert!(result.is_valid());
    let warning = result.warnings().get(&Field::EndDate).expect("balance warning");
    assert!(warning.starts_with("No se pudo verificar el saldo de vacaciones"));
}

fn contracts() -> LocalContracts {
    LocalContracts::new(
        [Contract::new(ContractId::new(1), date!(2010:03:01))],
        [VacationRecord::new(
            ContractId::new(1),
            Year::new(2025),
            8,
            RequestStatus::Approved,
        )],
        BusinessCalendar::without_holidays(),
    )
}

#[tokio::test]
async fn test_async_vacation_usage() {
    let contracts = contracts();

    assert_eq!(
        contracts.vacation_usage(ContractId::new(1), Year::new(2025)).await,
        Ok(VacationEntitlement::new(28, 8))
    );
    assert_eq!(
        contracts.vacation_usage(ContractId::new(9), Year::new(2025)).await,
        Err(ProviderError::UnknownContract(ContractId::new(9)))
    );
    assert!(contracts
        .requested_span(date!(2025:06:10), date!(2025:06:02))
        .await
        .is_err());
}

#[tokio::test]
async fn test_period_changes_faster_than_the_provider() {
    let contracts = contracts();
    let usage = LatestOnly::new();

    // the user picks 2024 and then 2025 before the first answer arrives
    let first = usage.issue();
    let second = usage.issue();

    let newer = contracts.vacation_usage(ContractId::new(1), Year::new(2025)).await;
    let older = contracts.vacation_usage(ContractId::new(1), Year::new(2024)).await;

    assert_eq!(
        usage.apply(second, newer).await,
        FetchOutcome::Applied(VacationEntitlement::new(28, 8))
    );
    assert_eq!(usage.apply(first, older).await, FetchOutcome::Superseded);
    assert_eq!(usage.latest().await, Some(VacationEntitlement::new(28, 8)));
}
