// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use walkdir::WalkDir;

use crate::{
    config::Config,
    render::{html_page, render},
    tokenize::tokenize,
    transform::{GalleryTransform, TransformReport},
};

/// Read one markdown file, run the gallery transform, render HTML.
pub fn compile_file(path: &Utf8Path, config: &Config) -> eyre::Result<(String, TransformReport)> {
    let markdown = std::fs::read_to_string(path)
        .wrap_err_with(|| eyre!("failed to read markdown file `{}`", path))?;

    let tokens = tokenize(&markdown);
    let transform = GalleryTransform::new(config.gallery.clone());
    let (tokens, report) = transform
        .run(tokens)
        .wrap_err_with(|| eyre!("failed to transform `{}`", path))?;

    Ok((render(&tokens), report))
}

/// Compile every `.md` file under the trees directory into the output
/// directory, preserving relative paths.
pub fn compile_tree(config: &Config) -> eyre::Result<()> {
    let trees_dir = Utf8PathBuf::from(&config.build.trees);
    let output_dir = Utf8PathBuf::from(&config.build.output);

    if !trees_dir.exists() {
        return Err(eyre!("source directory `{}` does not exist", trees_dir));
    }

    for entry in WalkDir::new(&trees_dir).follow_links(true) {
        let entry = entry.wrap_err_with(|| eyre!("failed to read directory `{}`", trees_dir))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path: Utf8PathBuf = entry
            .into_path()
            .try_into()
            .map_err(|_| eyre!("non-UTF-8 path under `{}`", trees_dir))?;
        if path.extension() != Some("md") {
            continue;
        }

        let (html, report) = compile_file(&path, config)?;
        report_skips(&path, &report);

        let relative = path.strip_prefix(&trees_dir).unwrap_or(&path);
        let target = output_dir.join(relative).with_extension("html");
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| eyre!("failed to create output directory `{}`", parent))?;
        }

        let title = path.file_stem().unwrap_or("untitled");
        std::fs::write(&target, html_page(title, &html))
            .wrap_err_with(|| eyre!("failed to write `{}`", target))?;
    }

    Ok(())
}

pub fn report_skips(path: &Utf8Path, report: &TransformReport) {
    for reason in &report.skipped {
        color_print::ceprintln!("<y>Warning: `{}`: skipped malformed motif: {}.</>", path, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_compile_missing_file() {
        let config = Config::default();
        let result = compile_file(Utf8Path::new("no/such/file.md"), &config);
        assert!(result.is_err());
    }
}
