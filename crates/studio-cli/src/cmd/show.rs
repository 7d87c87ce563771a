use crate::output::{print_json, Format};
use anyhow::Context;
use studio_core::{navigator, render, PhaseRepository};

pub fn run(repo: &PhaseRepository, number: u32, format: Format) -> anyhow::Result<()> {
    let phases = repo.load_phases().context("failed to load phases")?;
    let phase = navigator::find_phase(&phases, number)?;

    match format {
        Format::Json => print_json(phase)?,
        Format::Markdown => println!("{}", phase.to_markdown()),
        Format::Text => println!("{}", render::render_details(phase)),
    }
    Ok(())
}
