use crate::output::{print_json, Format};
use anyhow::Context;
use studio_core::{render, PhaseRepository};

pub fn run(repo: &PhaseRepository, format: Format) -> anyhow::Result<()> {
    let phases = repo.load_phases().context("failed to load phases")?;

    match format {
        Format::Json => print_json(&phases)?,
        Format::Markdown => {
            let sections: Vec<String> = phases.iter().map(|p| p.to_markdown()).collect();
            println!("{}", sections.join("\n\n"));
        }
        Format::Text => println!("{}", render::render_summary(&phases)),
    }
    Ok(())
}
