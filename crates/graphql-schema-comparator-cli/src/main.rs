#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::{io, process::ExitCode};

use anyhow::Context;
use clap::crate_version;
use graphql_schema_comparator::Schema;

mod args;
mod logging;
mod report;

fn main() -> anyhow::Result<ExitCode> {
    let args = self::args::parse();
    logging::init(&args);

    let crate_version = crate_version!();
    tracing::debug!("graphql-schema-compare {crate_version}");

    let (old_sdl, new_sdl) = args.schemas()?;

    let old = Schema::from_sdl(&old_sdl)
        .with_context(|| format!("invalid old schema ({})", args.old_schema.display()))?;
    let new = Schema::from_sdl(&new_sdl)
        .with_context(|| format!("invalid new schema ({})", args.new_schema.display()))?;

    let changes = graphql_schema_comparator::diff(&old, &new);
    let report = report::Report::new(&changes);

    report.write(&mut io::stdout().lock(), args.format)?;

    if args.fail_on.is_met(&changes) {
        tracing::info!(fail_on = ?args.fail_on, "changes reached the failure threshold");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
