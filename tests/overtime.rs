//! Overtime hours and tiers.

use leave_rules::calendar::BusinessCalendar;
use leave_rules::request::Field;
use leave_rules::rules::{self, OvertimeError, OvertimeTier};
use leave_rules::{date, time_stamp};
use rust_decimal_macros::dec;

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_two_and_a_half_hours() {
    let calendar = BusinessCalendar::without_holidays();

    let overtime = rules::classify(&calendar, date!(2025:06:04), time_stamp!(09:00), time_stamp!(11:30))
        .expect("end is after start");
    assert_eq!(overtime.hours(), dec!(2.50));
    assert_eq!(overtime.tier(), OvertimeTier::Weekday50);

    assert_eq!(
        rules::classify(&calendar, date!(2025:06:04), time_stamp!(11:00), time_stamp!(09:00)),
        Err(OvertimeError::EndNotAfterStart {
            start: time_stamp!(11:00),
            end: time_stamp!(09:00),
        })
    );
}

#[test]
fn test_holiday_and_weekend_pay_double() {
    let calendar = common::christmas_only();

    for date in [date!(2025:12:25), date!(2025:12:27), date!(2025:12:28)] {
        let overtime = rules::classify(&calendar, date, time_stamp!(18:00), time_stamp!(20:15))
            .expect("end is after start");

        assert_eq!(overtime.tier(), OvertimeTier::WeekendHoliday100, "{}", date);
        assert_eq!(overtime.tier().surcharge_percent(), 100);
        assert_eq!(overtime.hours(), dec!(2.25));
    }
}

#[test]
fn test_overtime_on_a_holiday_is_accepted() {
    let result = common::validate(
        None,
        concat!(
            "[request]\n",
            "type = \"horas_extras\"\n",
            "date = \"2025-07-09\"\n",
            "start_time = \"08:00\"\n",
            "end_time = \"12:00\"\n",
            "tier = \"weekend_holiday_100\"\n",
            "reason = \"Inventario\"\n",
            "\n",
            "[context]\n",
            "today = \"2025-07-10\"\n",
        ),
    );

    assert!(result.is_valid());
    assert_eq!(result.error(Field::Date), None);
}

#[test]
fn test_overtime_in_the_future() {
    let result = common::validate(
        None,
        concat!(
            "[request]\n",
            "type = \"horas_extras\"\n",
            "date = \"2025-07-11\"\n",
            "start_time = \"18:00\"\n",
            "end_time = \"18:00\"\n",
            "tier = \"50\"\n",
            "\n",
            "[context]\n",
            "today = \"2025-07-10\"\n",
        ),
    );

    assert_eq!(
        result.error(Field::Date),
        Some("Fecha no puede ser posterior a hoy")
    );
    assert_eq!(
        result.error(Field::EndTime),
        Some("Hora de fin debe ser posterior a Hora de inicio")
    );
}
