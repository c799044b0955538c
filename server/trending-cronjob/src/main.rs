use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{
    fmt::{writer::MakeWriterExt, MakeWriter},
    EnvFilter,
};

pub mod biz;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;

#[derive(Parser, Debug)]
struct ProgramArgs {
    #[command(subcommand)]
    job: Option<Job>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Job {
    FetchTrending,
}

impl ProgramArgs {
    // bare invocation runs the only job
    fn job(&self) -> Job {
        self.job.unwrap_or(Job::FetchTrending)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = init_logger() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }

    let arg = match ProgramArgs::try_parse() {
        Ok(arg) => arg,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };

    let job = arg.job();
    log::info!("starting cronjob: {job:?}");
    let code = match job {
        Job::FetchTrending => {
            let config = config::JobConfig::from_env();
            runner::exit_code(&runner::run(&config).await)
        }
    };

    std::process::exit(code);
}

// --help and --version are not failures, everything else clap rejects is
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn init_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let ansi = std::io::stdout().is_terminal() && std::io::stderr().is_terminal();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(log_writer(std::io::stderr, std::io::stdout))
        .try_init()
        .map_err(|e| anyhow!("init logger fail: {e}"))
}

/// warn and error go to `stderr`, progress to `stdout`
fn log_writer<E, O>(stderr: E, stdout: O) -> impl for<'a> MakeWriter<'a> + 'static
where
    E: for<'a> MakeWriter<'a> + 'static,
    O: for<'a> MakeWriter<'a> + 'static,
{
    stderr.with_max_level(tracing::Level::WARN).or_else(stdout)
}
