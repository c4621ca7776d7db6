// Copyright (c) 2024 Mike Tsao

//! Writes every tone fixture into the current directory.

use tone_fixtures::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = ToneFixtureGenerator::new_with(FixtureSettings::default());
    let report = generator.generate_all();
    report.log_failures();
    if let Some(summary) = report.failure_summary() {
        anyhow::bail!("{summary}");
    }
    log::info!("generated {} fixtures", report.generated.len());
    Ok(())
}
