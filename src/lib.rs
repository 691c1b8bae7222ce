// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

//! Post-processes a tokenized markdown document: every configured-level
//! heading followed by an image-only paragraph becomes a gallery region,
//! wrapped together with its trailing content in content-wrapper and
//! section regions, with per-image metadata serialized onto the gallery's
//! opening tag.

pub mod attr_string;
pub mod attrs;
pub mod cli;
pub mod compile;
pub mod config;
pub mod motif;
pub mod region;
pub mod render;
pub mod rewrite;
pub mod splice;
pub mod token;
pub mod tokenize;
pub mod transform;
