use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

use crate::report::{FailOn, Format};

mod log;

pub(crate) use log::LogLevel;

use self::log::LogStyle;

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug, Parser)]
#[command(name = "graphql-schema-compare", version)]
#[command(arg_required_else_help = true)]
/// Compare two GraphQL schemas and report the changes between them
pub(crate) struct Args {
    /// Path to the SDL of the old schema, `-` to read it from stdin
    pub old_schema: PathBuf,
    /// Path to the SDL of the new schema, `-` to read it from stdin
    pub new_schema: PathBuf,
    /// Output format of the report
    #[arg(long, value_enum, env = "GRAPHQL_SCHEMA_COMPARE_FORMAT", default_value_t = Format::Text)]
    pub format: Format,
    /// Exit with status 1 when a change at or above this criticality is found
    #[arg(long, value_enum, env = "GRAPHQL_SCHEMA_COMPARE_FAIL_ON", default_value_t = FailOn::Breaking)]
    pub fail_on: FailOn,
    /// Set the logging level
    #[arg(long = "log", env = "GRAPHQL_SCHEMA_COMPARE_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "GRAPHQL_SCHEMA_COMPARE_LOG_STYLE", default_value_t = LogStyle::Text)]
    log_style: LogStyle,
}

pub(crate) fn parse() -> Args {
    Args::parse()
}

impl Args {
    pub(crate) fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// The SDL of the old and new schemas.
    pub(crate) fn schemas(&self) -> anyhow::Result<(String, String)> {
        if is_stdin(&self.old_schema) && is_stdin(&self.new_schema) {
            anyhow::bail!("only one of the schemas can be read from stdin");
        }

        Ok((read_schema(&self.old_schema)?, read_schema(&self.new_schema)?))
    }

    pub(crate) fn log_format<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        // stdout is reserved for the report
        let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

        match self.log_style {
            LogStyle::Text if atty::is(atty::Stream::Stderr) => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_schema(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut sdl = String::new();
        io::stdin()
            .read_to_string(&mut sdl)
            .context("error reading schema from stdin")?;

        return Ok(sdl);
    }

    fs::read_to_string(path).with_context(|| format!("error loading schema from {}", path.display()))
}
