//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Render a man page for `cmd` and one for every nested subcommand into
/// `output_dir`, or the current directory if none is given. Subcommand pages
/// are named after their full path, e.g. `jp-generate-man.1`.
///
/// Returns the paths of the pages written.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the output directory or a page cannot be
/// written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };
    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let mut written = Vec::new();
    // (command, name used for the page) pairs still to render
    let mut pending = vec![(cmd.clone(), cmd.get_name().to_string())];

    while let Some((command, page_name)) = pending.pop() {
        for subcmd in command.get_subcommands() {
            let sub_name = format!("{page_name}-{}", subcmd.get_name());
            pending.push((subcmd.clone(), sub_name));
        }

        // clap_mangen takes the page title from the command name, which must
        // be 'static; leaking is fine for a one-shot generation.
        let name: &'static str = Box::leak(page_name.clone().into_boxed_str());
        let renamed = command.name(name).disable_help_subcommand(true);
        let path = render_page(renamed, &output_dir, &page_name)?;
        log::info!("Generated: {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    page_name: &str,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("{page_name}.1"));
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to render {}", path.display()))?;
    Ok(path)
}
