#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # dredd
//!
//! Checks the assignment you are working on against the dredd grader.
//!
//! Run it from inside an assignment directory (one named `exercise...`) or
//! on a branch named after the assignment. Every `solution.*` file found is
//! uploaded and the grader's report printed; the exit status is the number
//! of assignments that did not pass.

use std::{io::Write, process::ExitCode};

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use dredd::{AssignmentMap, Check, Config, HttpGrader, Probes};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Submit quiz answers or solutions
    Submit(Check),
    /// Print discovered assignments
    List,
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Options {
    /// Grader host override
    host:    Option<String>,
    /// Course identifier override
    course:  Option<String>,
    /// Use the debug code endpoint
    debug:   bool,
    /// Log probe and request details
    verbose: bool,
    /// What to do
    cmd:     Cmd,
}

/// Parse the command line arguments and return an `Options` struct
fn options() -> Options {
    let host = long("host")
        .help("Grader host, eg. dredd.h4x0r.space")
        .argument::<String>("HOST")
        .optional();

    let course = long("course")
        .help("Course identifier used in grader URLs")
        .argument::<String>("COURSE")
        .optional();

    let debug = long("debug")
        .help("Send solutions to the debug endpoint")
        .switch();

    let verbose = short('v')
        .long("verbose")
        .help("Print discovery and request details to stderr")
        .switch();

    let code = pure(Cmd::Submit(Check::Code))
        .to_options()
        .command("code")
        .help("Upload solution.* files (default)");

    let quiz = pure(Cmd::Submit(Check::Quiz))
        .to_options()
        .command("quiz")
        .help("Submit answers.json or answers.yaml");

    let list = pure(Cmd::List)
        .to_options()
        .command("list")
        .help("Show which assignments would be submitted");

    let cmd = construct!([code, quiz, list]).fallback(Cmd::Submit(Check::Code));

    construct!(Options {
        host,
        course,
        debug,
        verbose,
        cmd
    })
    .to_options()
    .descr("Submission client for the dredd grader")
    .run()
}

fn main() -> Result<ExitCode> {
    dotenv().ok();

    let opts = options();

    let level = if opts.verbose { Level::DEBUG } else { Level::WARN };
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let mut config = Config::from_env();
    if let Some(host) = opts.host {
        config = config.with_host(host);
    }
    if let Some(course) = opts.course {
        config = config.with_course(course);
    }
    if opts.debug {
        config = config.with_debug(true);
    }

    let assignments = AssignmentMap::discover(&Probes::from_environment());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match opts.cmd {
        Cmd::List => dredd::list(&assignments, &mut out)?,
        Cmd::Submit(check) => {
            let grader = HttpGrader::new(config)?;
            dredd::submit_all(&grader, &assignments, check, &mut out)?
        }
    };
    out.flush()?;

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)))
}
