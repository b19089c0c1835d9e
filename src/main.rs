use std::io::{self, Write};

use anyhow::Context;
use github_run::Run;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the JSON dump
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let run = Run::from_env().context("couldn't parse GitHub Actions run")?;
    info!(
        "run #{} of workflow `{}` on {}/{}",
        run.env.github_run_number, run.env.github_workflow, run.owner, run.repository
    );
    info!("{}", run.payload);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    serde_json::to_writer_pretty(&mut stdout, &run).context("couldn't serialize run")?;
    writeln!(stdout).context("couldn't write to stdout")?;

    Ok(())
}
