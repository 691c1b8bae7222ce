// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use clap::Parser;

use mdgallery::cli::{build::BuildCommand, page::PageCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compile the configured source tree to HTML pages.
    #[command(visible_alias = "b")]
    Build(BuildCommand),

    /// Transform a single markdown file and print the rendered fragment.
    #[command(visible_alias = "p")]
    Page(PageCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Build(command) => mdgallery::cli::build::build(command)?,
        Command::Page(command) => mdgallery::cli::page::page(command)?,
    };
    Ok(())
}
