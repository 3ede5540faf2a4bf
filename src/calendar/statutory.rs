use async_trait::async_trait;
use log::trace;

use crate::calendar::Holiday;
use crate::provider::{AsyncHolidayProvider, HolidayProvider, ProviderError};
use crate::time::{Date, Month, Year};

/// Returns the date of easter sunday in the given year.
///
/// The algorithm is based on <https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm>
pub const fn easter_sunday(year: Year) -> Date {
    let year_number = year.as_usize();

    let a = year_number % 19;
    let b = year_number / 100;
    let c = year_number % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    Date::new_unchecked(year, Month::new(n), o + 1)
}

const FIXED_HOLIDAYS: [(usize, Month, &str); 9] = [
    (1, Month::January, "Año Nuevo"),
    (
        24,
        Month::March,
        "Día Nacional de la Memoria por la Verdad y la Justicia",
    ),
    (
        2,
        Month::April,
        "Día del Veterano y de los Caídos en la Guerra de Malvinas",
    ),
    (1, Month::May, "Día del Trabajador"),
    (25, Month::May, "Día de la Revolución de Mayo"),
    (
        20,
        Month::June,
        "Paso a la Inmortalidad del General Manuel Belgrano",
    ),
    (9, Month::July, "Día de la Independencia"),
    (8, Month::December, "Inmaculada Concepción de María"),
    (25, Month::December, "Navidad"),
];

// the government moves these to a monday or friday every year,
// so the nominal date is only a best guess
const MOVABLE_HOLIDAYS: [(usize, Month, &str); 4] = [
    (
        17,
        Month::June,
        "Paso a la Inmortalidad del General Martín Miguel de Güemes",
    ),
    (
        17,
        Month::August,
        "Paso a la Inmortalidad del General José de San Martín",
    ),
    (12, Month::October, "Día del Respeto a la Diversidad Cultural"),
    (20, Month::November, "Día de la Soberanía Nacional"),
];

/// The national holidays fixed by law, computed without any network access.
///
/// Movable holidays are reported on their nominal date. A holiday file or
/// remote provider should be preferred when the decreed dates are known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatutoryHolidays;

impl StatutoryHolidays {
    #[must_use]
    pub fn in_year(&self, year: Year) -> Vec<Holiday> {
        let mut result = Vec::with_capacity(FIXED_HOLIDAYS.len() + MOVABLE_HOLIDAYS.len() + 3);

        for (day, month, name) in FIXED_HOLIDAYS {
            result.push(Holiday::fixed(Date::new_unchecked(year, month, day), name));
        }

        for (day, month, name) in MOVABLE_HOLIDAYS {
            result.push(Holiday::movable(
                Date::new_unchecked(year, month, day),
                name,
            ));
        }

        let easter = easter_sunday(year);
        result.push(Holiday::fixed(easter.sub_days(48), "Carnaval"));
        result.push(Holiday::fixed(easter.sub_days(47), "Carnaval"));
        result.push(Holiday::fixed(easter.sub_days(2), "Viernes Santo"));

        result.sort_by_key(Holiday::date);
        trace!("{} statutory holidays in {}", result.len(), year);

        result
    }
}

impl HolidayProvider for StatutoryHolidays {
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError> {
        Ok(self.in_year(year))
    }
}

#[async_trait]
impl AsyncHolidayProvider for StatutoryHolidays {
    async fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError> {
        Ok(self.in_year(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_easter_sunday() {
        for date in [
            date!(2017:04:16),
            date!(2018:04:01),
            date!(2019:04:21),
            date!(2020:04:12),
            date!(2021:04:04),
            date!(2022:04:17),
            date!(2023:04:09),
            date!(2024:03:31),
            date!(2025:04:20),
            date!(2026:04:05),
            date!(2027:03:28),
            date!(2030:04:21),
            date!(2035:03:25),
        ] {
            assert_eq!(easter_sunday(date.year()), date, "easter in {}", date.year());
        }
    }

    #[test]
    fn test_carnival_and_good_friday_2025() {
        let dates = StatutoryHolidays
            .in_year(Year::new(2025))
            .into_iter()
            .filter(|holiday| holiday.name() != "Navidad")
            .map(|holiday| holiday.date())
            .collect::<Vec<_>>();

        assert!(dates.contains(&date!(2025:03:03)));
        assert!(dates.contains(&date!(2025:03:04)));
        assert!(dates.contains(&date!(2025:04:18)));
    }

    #[test]
    fn test_christmas_but_not_boxing_day() {
        let holidays = StatutoryHolidays.in_year(Year::new(2025));

        assert!(holidays.iter().any(|h| h.date() == date!(2025:12:25)));
        assert!(!holidays.iter().any(|h| h.date() == date!(2025:12:26)));
        assert_eq!(holidays.len(), 16);
    }
}
