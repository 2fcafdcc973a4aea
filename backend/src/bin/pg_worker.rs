//! Cluster lifecycle helper for the repository integration tests.
//!
//! `pg_embedded_setup_unpriv` hands control to this binary when tests run as
//! root, passing an operation (`setup`, `start` or `stop`) and the path of a
//! JSON [`WorkerPayload`]. The payload's environment is applied under an
//! [`env_lock`] guard for the duration of the operation.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use color_eyre::eyre::{Context, Report, Result, eyre};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

fn main() -> Result<()> {
    color_eyre::install()?;
    let request = WorkerRequest::from_args(env::args_os())?;
    let payload = read_payload(&request.payload_path)?;
    run(request.operation, payload)
}

/// Parsed command line: what to do and where the payload lives.
#[derive(Debug)]
struct WorkerRequest {
    operation: Operation,
    payload_path: OsString,
}

impl WorkerRequest {
    fn from_args(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter().skip(1);
        let operation = args
            .next()
            .ok_or_else(|| eyre!("usage: pg_worker <setup|start|stop> <payload.json>"))?
            .to_string_lossy()
            .parse::<Operation>()?;
        let payload_path = args
            .next()
            .ok_or_else(|| eyre!("missing payload path after '{operation}'"))?;
        if let Some(extra) = args.next() {
            return Err(eyre!(
                "unexpected argument '{}' after the payload path",
                extra.to_string_lossy()
            ));
        }
        Ok(Self {
            operation,
            payload_path,
        })
    }
}

fn read_payload(path: impl AsRef<Path>) -> Result<WorkerPayload> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("read payload {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse payload {}", path.display()))
}

fn run(operation: Operation, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("rebuild postgres settings"))?;
    let _env = env_lock::lock_env(
        payload
            .environment
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref().map(PlainSecret::expose))),
    );

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("build worker runtime")?;
    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop => postgres.stop().await,
            }
        })
        .with_context(|| format!("postgres {operation} failed"))
}

/// Cluster lifecycle step requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Setup,
    Start,
    Stop,
}

impl FromStr for Operation {
    type Err = Report;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(eyre!("unknown operation '{other}'; expected setup, start or stop")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
        })
    }
}
