use std::io;

use absorbance_plotter::{ConsolePrompt, RunConfig, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RunConfig::default();

    // Both prompts read from the shared stdin buffer.
    let mut paths = ConsolePrompt::stdio();
    let mut titles = ConsolePrompt::stdio();

    let summary = run(&config, &mut paths, &mut titles, &mut io::stdout())?;
    log::debug!(
        "run finished: {} discovered, {} saved, {} skipped",
        summary.discovered,
        summary.saved.len(),
        summary.skipped.len()
    );
    Ok(())
}
