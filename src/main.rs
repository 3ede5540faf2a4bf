use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use log::{error, info, warn};
use seahorse::{App, Command, Context, Flag, FlagType};

use leave_rules::input::Config;
use leave_rules::request::Derived;
use leave_rules::rules;
use leave_rules::time::Date;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::path::PathBuf;

    use seahorse::Context;

    use leave_rules::time::Date;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .map_err(|_| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.context().string_flag(name).ok().map(PathBuf::from)
        }

        fn required_date_flag(&self, name: &str) -> Result<Date, anyhow::Error> {
            Ok(self.required_string_flag(name)?.parse()?)
        }

        fn optional_date_flag(&self, name: &str) -> Result<Option<Date>, anyhow::Error> {
            self.context()
                .string_flag(name)
                .ok()
                .map(|value| value.parse::<Date>())
                .transpose()
                .map_err(Into::into)
        }

        /// The only positional argument.
        fn single_arg(&self, what: &str) -> Result<&str, anyhow::Error> {
            match self.context().args.as_slice() {
                [arg] => Ok(arg.as_str()),
                _ => Err(anyhow::anyhow!("expected exactly one {}", what)),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

/// Ends the process with an error code, when the command failed.
fn report(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

fn today() -> anyhow::Result<Date> {
    let now = time::OffsetDateTime::now_utc().date();

    Ok(format!(
        "{:04}-{:02}-{:02}",
        now.year(),
        u8::from(now.month()),
        now.day()
    )
    .parse()?)
}

fn build_config(context: &Context, request: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::try_from_toml_files(context.optional_path_flag("holidays"), request)?;

    if let Some(date) = context.optional_date_flag("today")? {
        config.today(date);
    }
    config.default_today(today()?);

    let config = config.build()?;
    info!("finished building config");

    for banner in config.banners() {
        warn!("{}", banner);
    }

    Ok(config)
}

fn business_day(context: &Context) -> anyhow::Result<()> {
    let date: Date = context.single_arg("date")?.parse()?;

    let mut config = Config::try_from_toml_files(context.optional_path_flag("holidays"), None::<PathBuf>)?;
    config.today(date);
    let config = config.build()?;
    let calendar = config.calendar();

    if calendar.is_business_day(date) {
        println!("{} ({}) es un día hábil", date.to_local_string(), date.week_day());
    } else if let Some(holiday) = calendar.holiday_on(date) {
        println!(
            "{} ({}) no es un día hábil: {}",
            date.to_local_string(),
            date.week_day(),
            holiday.name()
        );
    } else {
        println!("{} ({}) no es un día hábil", date.to_local_string(), date.week_day());
    }

    Ok(())
}

fn span(context: &Context) -> anyhow::Result<()> {
    let start = context.required_date_flag("from")?;
    let end = context.required_date_flag("to")?;

    let mut config = Config::try_from_toml_files(context.optional_path_flag("holidays"), None::<PathBuf>)?;
    config.today(start).span(start, end);
    let config = config.build()?;

    let span = rules::resolve_requested_span(config.calendar(), start, end)?;

    let unknown = config
        .calendar()
        .unknown_years(start.year().through(span.return_date().year()));
    if !unknown.is_empty() {
        warn!("the holidays of {:?} are unknown, only weekends were excluded", unknown);
    }

    println!("días solicitados: {}", span.requested_days());
    println!("fecha de reincorporación: {}", span.return_date().to_long_string());

    Ok(())
}

fn validate(context: &Context) -> anyhow::Result<()> {
    let path = PathBuf::from(context.single_arg("request file")?);
    let config = build_config(context, Some(path))?;

    let request = config
        .request()
        .ok_or_else(|| anyhow::anyhow!("the file does not contain a request"))?;
    let (result, derived) = leave_rules::check_request(config.calendar(), request, config.context());

    println!("{}", serde_json::to_string_pretty(&result)?);

    match derived {
        Some(Derived::Span(span)) => {
            println!("días solicitados: {}", span.requested_days());
            println!("fecha de reincorporación: {}", span.return_date().to_long_string());
        }
        Some(Derived::Overtime(overtime)) => {
            println!("horas: {} al {}", overtime.hours(), overtime.tier());
        }
        Some(Derived::Notice(notice)) => {
            println!(
                "fecha efectiva de egreso: {}",
                notice.effective_termination_date().to_local_string()
            );
        }
        None => {}
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!("the request is not valid"));
    }

    Ok(())
}

fn holidays_flag() -> Flag {
    Flag::new("holidays", FlagType::String)
        .description("[optional] Path to the holiday file. Default: national holidays only")
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let business_day_command = Command::new("dia-habil")
        .usage(format!("{} dia-habil [args] 2025-12-25", args[0]))
        .description("Checks whether a date is a business day.")
        .flag(holidays_flag())
        .action(|context: &Context| report(business_day(context)));

    let span_command = Command::new("periodo")
        .usage(format!("{} periodo --from 2025-06-02 --to 2025-06-13", args[0]))
        .description("Counts the business days of a period and finds the return date.")
        .flag(holidays_flag())
        .flag(Flag::new("from", FlagType::String).description("The first day of the period."))
        .flag(Flag::new("to", FlagType::String).description("The last day of the period."))
        .action(|context: &Context| report(span(context)));

    let validate_command = Command::new("validar")
        .usage(format!("{} validar [args] solicitud.toml", args[0]))
        .description("Validates the request in the given file.")
        .flag(holidays_flag())
        .flag(
            Flag::new("today", FlagType::String)
                .description("[optional] The current date. Default: the date of the system"),
        )
        .action(|context: &Context| report(validate(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(business_day_command)
        .command(span_command)
        .command(validate_command);

    app.run(args);
}
