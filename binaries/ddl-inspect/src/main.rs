use {
    clap::{arg, Command},
    ddl_inspect::cmd::{self, Error as InspectError},
    snafu::prelude::*,
    std::{env, path::Path, process},
    tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter},
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Invalid log level `{}`, source: {}", level, source))]
    LogLevel {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[snafu(display("{}", source))]
    Inspect {
        #[snafu(backtrace)]
        source: InspectError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const LOG_LEVEL_ENV: &str = "DDL_INSPECT_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(arg!([FILE] "file with CREATE TABLE statements, `-` or absent for stdin"))
        .arg(arg!(-l --log_level <LEVEL> "log filter used when RUST_LOG is unset"))
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();

    let level = match matches.get_one::<String>("log_level") {
        Some(level) => level.clone(),
        None => env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
    };
    init_tracing(&level)?;

    let path = matches.get_one::<String>("FILE").map(Path::new);
    let output = cmd::inspect_path(path).context(InspectSnafu)?;

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(level),
    }
    .context(LogLevelSnafu { level })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
