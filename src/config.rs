// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./Mdgallery.toml";

#[derive(Deserialize, Debug, Default, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryOptions,

    #[serde(default)]
    pub build: Build,
}

/// Tag names here may be globally registered front-end components rather
/// than plain HTML elements; they are emitted verbatim, without validation.
#[derive(Deserialize, Debug, Clone, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GalleryOptions {
    pub content_wrapper_tag: String,
    pub content_wrapper_class: String,
    pub gallery_tag: String,
    pub gallery_class: String,
    pub section_tag: String,
    pub section_class: String,

    /// Heading level that opens a gallery section, as a tag name.
    pub heading_level: String,

    /// Root relative directory path to the images folder within the site
    /// folder. Leading `../` segments in sources are matched regardless.
    /// Empty disables path rewriting.
    pub image_path_old: String,

    /// Root relative server path to the images folder.
    pub image_path_new: String,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            content_wrapper_tag: "EntryContent".to_string(),
            content_wrapper_class: String::new(),
            gallery_tag: "Gallery".to_string(),
            gallery_class: String::new(),
            section_tag: "ContentSection".to_string(),
            section_class: String::new(),
            heading_level: "h2".to_string(),
            image_path_old: "/.vuepress/public/images".to_string(),
            image_path_new: "/images".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Build {
    pub trees: String,
    pub output: String,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            trees: "trees".to_string(),
            output: "./publish".to_string(),
        }
    }
}

/// Try to find the toml file in the current directory or the parent directory.
pub fn find_config(mut toml_file: Utf8PathBuf) -> eyre::Result<Utf8PathBuf> {
    if !toml_file.exists() {
        let parent = toml_file.parent().unwrap().canonicalize_utf8()?;
        let parent = parent.parent().unwrap();

        toml_file = parent.join(DEFAULT_CONFIG_PATH);
        if !toml_file.exists() {
            return Err(eyre::eyre!("cannot find configuration file: {}", toml_file));
        }
    }
    Ok(toml_file)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}

mod test {

    #[test]
    fn test_empty_toml() {
        let config = crate::config::parse_config("").unwrap();

        assert_eq!(config.gallery.content_wrapper_tag, "EntryContent");
        assert_eq!(config.gallery.gallery_tag, "Gallery");
        assert_eq!(config.gallery.section_tag, "ContentSection");
        assert_eq!(config.gallery.heading_level, "h2");
        assert_eq!(config.gallery.image_path_old, "/.vuepress/public/images");
        assert_eq!(config.gallery.image_path_new, "/images");
        assert_eq!(config.gallery.gallery_class, "");
        assert_eq!(config.build.trees, "trees");
        assert_eq!(config.build.output, "./publish");
    }

    #[test]
    fn test_simple_toml() {
        let config = crate::config::parse_config(
            r#"
            [gallery]
            gallery-tag = "PhotoGrid"
            gallery-class = "grid"
            heading-level = "h3"
            image-path-old = "/static/images"

            [build]
            trees = "source"
            "#,
        )
        .unwrap();

        assert_eq!(config.gallery.gallery_tag, "PhotoGrid");
        assert_eq!(config.gallery.gallery_class, "grid");
        assert_eq!(config.gallery.heading_level, "h3");
        assert_eq!(config.gallery.image_path_old, "/static/images");
        assert_eq!(config.gallery.content_wrapper_tag, "EntryContent");
        assert_eq!(config.build.trees, "source");
        assert_eq!(config.build.output, "./publish");
    }
}
