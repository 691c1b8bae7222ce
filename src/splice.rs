// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

//! Insertion planning over the token array.
//!
//! Regions are not spliced into a live array one by one. Each pass is a pure
//! function producing [`Insertion`] records anchored at indices of the
//! *original* array, and [`apply`] materializes every insertion in one walk.
//! Anchors therefore never drift, whatever order passes run in; only the
//! `order` value decides how insertions sharing an anchor nest.

use crate::{
    config::GalleryOptions,
    motif::{Motif, MotifPattern},
    region,
    token::Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Before,
    After,
}

/// Nesting order for insertions sharing an `(anchor, side)` slot, low first.
///
/// At a motif boundary the emitted order must be
/// `</wrapper> </section> <section> <gallery> <hN>`, and behind a heading
/// `</hN> </gallery> <wrapper>`; the tail of the document closes the last
/// wrapper, then the last section.
mod order {
    pub const WRAPPER_CLOSE: u8 = 0;
    pub const SECTION_CLOSE: u8 = 1;
    pub const SECTION_OPEN: u8 = 2;
    pub const GALLERY_OPEN: u8 = 3;

    pub const GALLERY_CLOSE: u8 = 0;
    pub const WRAPPER_OPEN: u8 = 1;
    pub const WRAPPER_CLOSE_TAIL: u8 = 2;
    pub const SECTION_CLOSE_TAIL: u8 = 3;
}

/// One planned token insertion against a stable anchor index.
#[derive(Debug)]
pub struct Insertion {
    pub anchor: usize,
    pub side: Side,
    pub order: u8,
    pub token: Token,
}

impl Insertion {
    fn before(anchor: usize, order: u8, token: Token) -> Insertion {
        Insertion {
            anchor,
            side: Side::Before,
            order,
            token,
        }
    }

    fn after(anchor: usize, order: u8, token: Token) -> Insertion {
        Insertion {
            anchor,
            side: Side::After,
            order,
            token,
        }
    }
}

/// Pass 1: wrap every motif's heading triplet in a gallery pair.
pub fn plan_galleries(
    options: &GalleryOptions,
    tokens: &[Token],
    motifs: &[&Motif],
) -> eyre::Result<Vec<Insertion>> {
    let mut plan = vec![];

    for (ordinal, motif) in motifs.iter().enumerate() {
        let images: Vec<&Token> = match &motif.pattern {
            MotifPattern::Images {
                inline,
                image_children,
                ..
            } => image_children
                .iter()
                .map(|&child| &tokens[*inline].children[child])
                .collect(),
            _ => vec![],
        };

        let (open, close) = region::gallery_tokens(options, ordinal, &images)?;
        plan.push(Insertion::before(motif.heading_open, order::GALLERY_OPEN, open));
        plan.push(Insertion::after(motif.heading_close, order::GALLERY_CLOSE, close));
    }

    Ok(plan)
}

/// Pass 2: open a content wrapper behind every gallery; close it at the next
/// motif's boundary, or at document end for the last motif.
pub fn plan_content_wrappers(
    options: &GalleryOptions,
    token_count: usize,
    motifs: &[&Motif],
) -> Vec<Insertion> {
    let mut plan = vec![];

    for (index, motif) in motifs.iter().enumerate() {
        let (open, close) = region::content_wrapper_tokens(options);
        plan.push(Insertion::after(motif.heading_close, order::WRAPPER_OPEN, open));

        match motifs.get(index + 1) {
            Some(next) => {
                plan.push(Insertion::before(next.heading_open, order::WRAPPER_CLOSE, close));
            }
            None => {
                plan.push(Insertion::after(token_count - 1, order::WRAPPER_CLOSE_TAIL, close));
            }
        }
    }

    plan
}

/// Pass 3: wrap each gallery-plus-wrapper pair in a section. Sections are
/// resolved by motif ordinal, so pairing never depends on re-reading the
/// rendered markup of pass 1.
pub fn plan_sections(
    options: &GalleryOptions,
    tokens: &[Token],
    token_count: usize,
    motifs: &[&Motif],
) -> Vec<Insertion> {
    let mut plan = vec![];

    for (index, motif) in motifs.iter().enumerate() {
        let (open, close) = region::section_tokens(options, motif.heading_text(tokens));
        plan.push(Insertion::before(motif.heading_open, order::SECTION_OPEN, open));

        match motifs.get(index + 1) {
            Some(next) => {
                plan.push(Insertion::before(next.heading_open, order::SECTION_CLOSE, close));
            }
            None => {
                plan.push(Insertion::after(token_count - 1, order::SECTION_CLOSE_TAIL, close));
            }
        }
    }

    plan
}

/// Materialize a plan in one pass. Insertions sharing `(anchor, side)` are
/// emitted in ascending `order`, then in plan order.
pub fn apply(tokens: Vec<Token>, mut plan: Vec<Insertion>) -> Vec<Token> {
    plan.sort_by_key(|insertion| (insertion.anchor, insertion.side, insertion.order));

    let mut result = Vec::with_capacity(tokens.len() + plan.len());
    let mut pending = plan.into_iter().peekable();

    for (index, token) in tokens.into_iter().enumerate() {
        while pending
            .peek()
            .is_some_and(|i| i.anchor == index && i.side == Side::Before)
        {
            result.push(pending.next().unwrap().token);
        }

        result.push(token);

        while pending.peek().is_some_and(|i| i.anchor == index) {
            result.push(pending.next().unwrap().token);
        }
    }

    // anchors are in range by construction; nothing should remain
    debug_assert!(pending.peek().is_none());

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    fn text(content: &str) -> Token {
        let mut token = Token::new(TokenKind::Text, "");
        token.content = content.to_string();
        token
    }

    fn contents(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.content.as_str()).collect()
    }

    #[test]
    fn test_apply_orders_within_anchor() {
        let tokens = vec![text("a"), text("b")];
        let plan = vec![
            Insertion::before(1, order::SECTION_OPEN, Token::html_block("<s>".into())),
            Insertion::before(1, order::WRAPPER_CLOSE, Token::html_block("</w>".into())),
            Insertion::after(1, order::GALLERY_CLOSE, Token::html_block("</g>".into())),
            Insertion::before(1, order::GALLERY_OPEN, Token::html_block("<g>".into())),
        ];

        let result = apply(tokens, plan);
        assert_eq!(contents(&result), vec!["a", "</w>", "<s>", "<g>", "b", "</g>"]);
    }

    #[test]
    fn test_apply_is_stable_for_equal_orders() {
        let tokens = vec![text("a")];
        let plan = vec![
            Insertion::after(0, 0, Token::html_block("first".into())),
            Insertion::after(0, 0, Token::html_block("second".into())),
        ];

        let result = apply(tokens, plan);
        assert_eq!(contents(&result), vec!["a", "first", "second"]);
    }

    #[test]
    fn test_apply_empty_plan() {
        let tokens = vec![text("a"), text("b")];
        let result = apply(tokens.clone(), vec![]);
        assert_eq!(result, tokens);
    }
}
