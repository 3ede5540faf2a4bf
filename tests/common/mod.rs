use leave_rules::calendar::{BusinessCalendar, Holiday};
use leave_rules::input::toml_input::{Holidays, RequestFile};
use leave_rules::input::Config;
use leave_rules::request::RequestValidationResult;
use leave_rules::time::Date;

/// A calendar with christmas as the only holiday.
#[must_use]
#[allow(dead_code)]
pub fn christmas_only() -> BusinessCalendar {
    BusinessCalendar::from_iter([Holiday::fixed(
        "2025-12-25".parse::<Date>().expect("date should be valid"),
        "Navidad",
    )])
}

#[must_use]
#[allow(dead_code)]
pub fn make_config(holidays: Option<&str>, request: &str) -> Config {
    let holidays: Option<Holidays> =
        holidays.map(|source| toml::from_str(source).expect("holiday file should be valid"));
    let request: RequestFile = toml::from_str(request).expect("request file should be valid");

    Config::from_toml(holidays, Some(request))
        .build()
        .expect("config should be valid")
}

#[must_use]
#[allow(dead_code)]
pub fn validate(holidays: Option<&str>, request: &str) -> RequestValidationResult {
    make_config(holidays, request)
        .validate()
        .expect("the file should contain a request")
}

/// A request file for a vacation of `period` validated on `today`.
#[must_use]
#[allow(dead_code)]
pub fn make_vacation(period: usize, start: &str, end: &str, today: &str) -> String {
    format!(
        concat!(
            "[request]\n",
            "type = \"vacacion\"\n",
            "period = {}\n",
            "start_date = \"{}\"\n",
            "end_date = \"{}\"\n",
            "\n",
            "[context]\n",
            "today = \"{}\"\n",
        ),
        period, start, end, today
    )
}
