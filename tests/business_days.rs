//! Tests which days are business days, with and without holiday data.

use async_trait::async_trait;
use leave_rules::calendar::{BusinessCalendar, HolidayCache, StatutoryHolidays};
use leave_rules::calendar::Holiday;
use leave_rules::date;
use leave_rules::input::Config;
use leave_rules::provider::{AsyncHolidayProvider, ProviderError};
use leave_rules::rules;
use leave_rules::time::{Date, Year};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_weekends_are_never_business_days() {
    let calendars = [
        BusinessCalendar::without_holidays(),
        common::christmas_only(),
        BusinessCalendar::from_provider(&StatutoryHolidays, (2020..2030).map(Year::new)),
    ];

    for calendar in &calendars {
        for date in date!(2020:01:01).iter_until(date!(2029:12:31)) {
            if date.is_weekend() {
                assert!(!calendar.is_business_day(date), "{} is a weekend", date);
            }
        }
    }
}

#[test]
fn test_christmas_but_not_the_day_after() {
    let calendar = common::christmas_only();

    assert!(!calendar.is_business_day(date!(2025:12:25)));
    assert!(calendar.is_business_day(date!(2025:12:26)));
}

#[test]
fn test_validate_is_business_day_message() {
    let calendar = common::christmas_only();

    assert_eq!(
        calendar
            .validate_is_business_day(date!(2025:12:25), "Fecha de inicio")
            .map_err(|violation| violation.to_string()),
        Err("Fecha de inicio debe ser un día hábil".to_string())
    );
    assert_eq!(
        calendar.validate_is_business_day(date!(2025:12:26), "Fecha de inicio"),
        Ok(())
    );
}

#[test]
fn test_holiday_file_with_statutory_holidays() {
    let config = common::make_config(
        Some(concat!(
            "statutory = true\n",
            "\n",
            "[[holiday]]\n",
            "date = 2025-11-21\n",
            "name = \"Feriado puente\"\n",
        )),
        &common::make_vacation(2025, "2025-11-17", "2025-11-21", "2025-05-02"),
    );
    let calendar = config.calendar();

    // nominal date of the movable holiday and the bridge day
    assert!(!calendar.is_business_day(date!(2025:11:20)));
    assert!(!calendar.is_business_day(date!(2025:11:21)));
    assert!(calendar.is_business_day(date!(2025:11:19)));
}

struct Offline;

#[async_trait]
impl AsyncHolidayProvider for Offline {
    async fn holidays(&self, _year: Year) -> Result<Vec<Holiday>, ProviderError> {
        Err(ProviderError::unavailable("feriados", "connection refused"))
    }
}

#[tokio::test]
async fn test_async_cache_matches_sync_calendar() {
    let cache = HolidayCache::new(StatutoryHolidays);
    let calendar = BusinessCalendar::from_provider(&StatutoryHolidays, [Year::new(2025)]);

    for date in Year::new(2025).iter_days() {
        assert_eq!(
            cache.is_business_day(date).await,
            calendar.is_business_day(date),
            "{}",
            date
        );
    }

    assert_eq!(cache.snapshot().await, calendar);
}

#[tokio::test]
async fn test_unavailable_provider_degrades() {
    let cache = HolidayCache::new(Offline);

    let errors = cache.load_years([Year::new(2025)]).await;
    assert_eq!(errors.len(), 1);

    // a holiday is treated as a working day, weekends are still excluded
    assert!(cache.is_business_day(date!(2025:12:25)).await);
    assert!(!cache.is_business_day(date!(2025:12:27)).await);

    let calendar = cache.snapshot().await;
    assert!(calendar.is_degraded());
    assert_eq!(calendar.degraded_years().collect::<Vec<_>>(), vec![Year::new(2025)]);
}

#[test]
fn test_next_business_day_skips_weekend_and_holiday() {
    let calendar = common::christmas_only();
    let wednesday: Date = "2025-12-24".parse().unwrap();

    assert_eq!(calendar.next_business_day_after(wednesday), date!(2025:12:26));
    assert_eq!(calendar.next_business_day_after(date!(2025:12:26)), date!(2025:12:29));
}

#[test]
fn test_span_over_three_years_loads_the_middle_year() {
    let start = date!(2025:06:02);
    let end = date!(2027:06:01);

    let mut builder = Config::from_toml(None, None);
    builder.today(start).span(start, end);
    let config = builder.build().unwrap();
    let calendar = config.calendar();

    assert!(!calendar.is_business_day(date!(2026:12:25)));
    assert!(calendar
        .unknown_years(Year::new(2025).through(Year::new(2028)))
        .is_empty());

    let complete =
        BusinessCalendar::from_provider(&StatutoryHolidays, Year::new(2025).through(Year::new(2028)));
    assert_eq!(
        rules::resolve_requested_span(calendar, start, end),
        rules::resolve_requested_span(&complete, start, end)
    );
}

#[test]
fn test_request_over_three_years_loads_the_middle_year() {
    let config = common::make_config(
        None,
        concat!(
            "[request]\n",
            "type = \"licencia\"\n",
            "legal_reason = \"sin_goce\"\n",
            "start_date = \"2025-12-01\"\n",
            "end_date = \"2027-01-15\"\n",
            "\n",
            "[context]\n",
            "today = \"2025-11-03\"\n",
        ),
    );

    assert!(config.calendar().knows_year(Year::new(2026)));
    assert!(!config.calendar().is_business_day(date!(2026:07:09)));
    assert_eq!(config.validate().unwrap().banner(), None);
}
