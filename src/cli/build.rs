// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::WrapErr;

use crate::{compile, config};

#[derive(clap::Args)]
pub struct BuildCommand {
    /// Path to the configuration file (e.g., "Mdgallery.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: String,
}

pub fn build(command: &BuildCommand) -> eyre::Result<()> {
    let toml_file = config::find_config(Utf8PathBuf::from(&command.config))?;
    let source = std::fs::read_to_string(&toml_file)
        .wrap_err_with(|| eyre::eyre!("failed to read configuration file `{}`", toml_file))?;
    let config = config::parse_config(&source)?;

    compile::compile_tree(&config)
}
