// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::WrapErr;

use crate::{compile, config};

#[derive(clap::Args)]
pub struct PageCommand {
    /// Markdown file to transform.
    path: Utf8PathBuf,

    /// Path to the configuration file; defaults apply when absent.
    #[arg(short, long)]
    config: Option<String>,

    /// Write the rendered fragment here instead of stdout.
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,
}

pub fn page(command: &PageCommand) -> eyre::Result<()> {
    let config = match &command.config {
        Some(path) => {
            let toml_file = config::find_config(Utf8PathBuf::from(path))?;
            let source = std::fs::read_to_string(&toml_file).wrap_err_with(|| {
                eyre::eyre!("failed to read configuration file `{}`", toml_file)
            })?;
            config::parse_config(&source)?
        }
        None => config::Config::default(),
    };

    let (html, report) = compile::compile_file(&command.path, &config)?;
    compile::report_skips(&command.path, &report);

    match &command.output {
        Some(target) => std::fs::write(target, html)
            .wrap_err_with(|| eyre::eyre!("failed to write `{}`", target))?,
        None => print!("{html}"),
    }

    Ok(())
}
