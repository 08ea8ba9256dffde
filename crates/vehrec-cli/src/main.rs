//! `vehrec` command-line front end

mod cli;

use anyhow::Context;
use clap::ArgMatches;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vehrec_client::{ClientConfig, HttpRecommendationClient, RecommendationClient};
use vehrec_core::{Field, FieldKind};
use vehrec_form::{Completion, FormController, SubmitError, Submission};
use vehrec_render::{HtmlRenderer, Render, TextRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let matches = cli::build().get_matches();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    let code = match matches.subcommand() {
        Some(("options", _)) => {
            print_options(&mut out)?;
            0
        }
        Some(("check", args)) => check(args, &mut out, &mut err)?,
        Some(("recommend", args)) => recommend(args, &mut out, &mut err).await?,
        _ => 0,
    };
    Ok(ExitCode::from(code))
}

fn print_options(out: &mut impl Write) -> anyhow::Result<()> {
    for field in Field::ALL {
        if let FieldKind::Select(options) = field.kind() {
            writeln!(out, "{}:", field.name())?;
            for option in options {
                writeln!(out, "  {option}")?;
            }
        }
    }
    Ok(())
}

/// Fill the form from the command line
///
/// Flags left out keep their field empty, so the validator reports them.
/// Returns `None` after reporting a value the form refused.
fn fill_form(
    args: &ArgMatches,
    err: &mut impl Write,
) -> anyhow::Result<Option<FormController>> {
    let mut page = FormController::new();
    for (field, value) in cli::field_values(args) {
        if value.is_empty() {
            continue;
        }
        if let Err(e) = page.edit(field, value) {
            writeln!(err, "{e}")?;
            return Ok(None);
        }
    }
    Ok(Some(page))
}

fn report_invalid(page: &FormController, err: &mut impl Write) -> anyhow::Result<()> {
    if let Some(errors) = page.form().visible_errors() {
        for error in errors.errors() {
            writeln!(err, "{}: {}", error.field.label(), error.reason)?;
        }
    }
    Ok(())
}

/// Validate and enter pending; `Err(code)` once the problem is reported
fn submit(
    page: &mut FormController,
    err: &mut impl Write,
) -> anyhow::Result<Result<Submission, u8>> {
    match page.submit() {
        Ok(submission) => Ok(Ok(submission)),
        Err(SubmitError::Invalid(_)) => {
            report_invalid(page, err)?;
            Ok(Err(cli::EXIT_INVALID))
        }
        Err(e) => Err(e.into()),
    }
}

fn check(args: &ArgMatches, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<u8> {
    let Some(mut page) = fill_form(args, err)? else {
        return Ok(cli::EXIT_INVALID);
    };
    let submission = match submit(&mut page, err)? {
        Ok(submission) => submission,
        Err(code) => return Ok(code),
    };

    let json =
        serde_json::to_string_pretty(&submission.payload).context("failed to encode payload")?;
    writeln!(out, "{json}")?;
    Ok(0)
}

fn client_for(args: &ArgMatches) -> anyhow::Result<HttpRecommendationClient> {
    let mut config = match args.get_one::<String>("endpoint") {
        Some(url) => ClientConfig::new(url.as_str()),
        None => ClientConfig::from_env(),
    }
    .context("failed to configure prediction endpoint")?;
    if let Some(timeout) = cli::timeout(args) {
        config = config.with_timeout(timeout);
    }
    HttpRecommendationClient::new(config).context("failed to build HTTP client")
}

async fn recommend(
    args: &ArgMatches,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<u8> {
    let Some(mut page) = fill_form(args, err)? else {
        return Ok(cli::EXIT_INVALID);
    };
    // Input is judged before the endpoint is looked up
    let Submission { token, payload } = match submit(&mut page, err)? {
        Ok(submission) => submission,
        Err(code) => return Ok(code),
    };

    let client = client_for(args)?;
    let outcome = client.recommend(&payload).await;

    match page.complete(token, outcome) {
        Completion::Applied => {
            let view = page
                .recommendations()
                .context("accepted response left nothing to show")?;
            let rendered = if args.get_flag("html") {
                HtmlRenderer::new().render(&view)
            } else {
                TextRenderer::new().render(&view)
            };
            write!(out, "{rendered}")?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
            Ok(0)
        }
        Completion::Failed(e) => {
            tracing::error!("Recommendation request failed: {}", e);
            writeln!(err, "{}", page.last_error().unwrap_or("request failed"))?;
            Ok(cli::EXIT_REQUEST_FAILED)
        }
        Completion::Stale => Err(SubmitError::Superseded.into()),
    }
}
