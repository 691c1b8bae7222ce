// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::{
    config::GalleryOptions,
    motif::{self, MotifPattern},
    splice,
    token::Token,
};

/// Outcome of one document transform. Malformed motifs are skipped and
/// reported instead of being wrapped around a broken span.
#[derive(Debug, Default)]
pub struct TransformReport {
    pub wrapped: usize,
    pub skipped: Vec<String>,
}

/// The gallery-section rewrite, run once per document after inline parsing.
///
/// Tokens are never removed: original paragraph, inline and image tokens of
/// a gallery stay in the array flagged hidden, so anchors depending on the
/// source structure stay valid. Running the transform twice on the same
/// document is unsupported; injected raw markup tokens are opaque to the
/// detector, so a second run nests another wrapping layer rather than
/// failing.
pub struct GalleryTransform {
    options: GalleryOptions,
}

impl GalleryTransform {
    pub fn new(options: GalleryOptions) -> GalleryTransform {
        GalleryTransform { options }
    }

    pub fn run(&self, mut tokens: Vec<Token>) -> eyre::Result<(Vec<Token>, TransformReport)> {
        let motifs = motif::detect(&tokens, &self.options.heading_level);

        let mut skipped = vec![];
        let mut wrapped = vec![];
        for motif in &motifs {
            match &motif.pattern {
                MotifPattern::Malformed { reason } => skipped.push(reason.clone()),
                _ => wrapped.push(motif),
            }
        }

        // 0. hide original gallery paragraphs
        for motif in &wrapped {
            if let MotifPattern::Images {
                paragraph_open,
                inline,
                ..
            } = &motif.pattern
            {
                tokens[*paragraph_open].hidden = true;
                tokens[*inline].hidden = true;
                for child in &mut tokens[*inline].children {
                    child.hidden = true;
                }
            }
        }

        // 1.-3. plan the three region layers against stable anchors,
        // then materialize in one pass
        let mut plan = splice::plan_galleries(&self.options, &tokens, &wrapped)?;
        plan.extend(splice::plan_content_wrappers(
            &self.options,
            tokens.len(),
            &wrapped,
        ));
        plan.extend(splice::plan_sections(
            &self.options,
            &tokens,
            tokens.len(),
            &wrapped,
        ));

        let tokens = splice::apply(tokens, plan);

        Ok((
            tokens,
            TransformReport {
                wrapped: wrapped.len(),
                skipped,
            },
        ))
    }
}
