use crate::output::{print_json, Format};
use anyhow::Context;
use studio_core::{navigator, render, PhaseRepository};

pub fn run(repo: &PhaseRepository, after: Option<u32>, format: Format) -> anyhow::Result<()> {
    let phases = repo.load_phases().context("failed to load phases")?;
    let phase = navigator::next_phase(&phases, after)?;

    match format {
        Format::Json => print_json(&serde_json::json!({
            "context": render::next_context(after),
            "after": after,
            "phase": phase,
        }))?,
        Format::Markdown => {
            println!("{}:\n\n{}", render::next_context(after), phase.to_markdown())
        }
        Format::Text => println!("{}", render::render_next(phase, after)),
    }
    Ok(())
}
