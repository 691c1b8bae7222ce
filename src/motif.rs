// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::token::{Token, TokenKind};

/// What the lookahead after a configured-level heading found.
#[derive(Debug, PartialEq, Eq)]
pub enum MotifPattern {
    /// Heading followed by a paragraph whose inline run contains images.
    Images {
        paragraph_open: usize,
        inline: usize,
        /// Positions of the image tokens within the inline run's children.
        image_children: Vec<usize>,
    },

    /// Heading with no image paragraph behind it. Still wrapped, with an
    /// empty image payload: gallery styles also apply to non-gallery
    /// headings.
    Empty,

    /// Heading triplet truncated by the end of the document. Skipped by the
    /// orchestrator instead of silently wrapping a broken span.
    Malformed { reason: String },
}

/// One heading-plus-image-paragraph occurrence. All positions are indices
/// into the token array the detector scanned; the array must not be mutated
/// between detection and planning.
#[derive(Debug)]
pub struct Motif {
    pub heading_open: usize,
    pub heading_content: usize,
    pub heading_close: usize,
    pub pattern: MotifPattern,
}

impl Motif {
    pub fn heading_text<'t>(&self, tokens: &'t [Token]) -> &'t str {
        &tokens[self.heading_content].content
    }
}

/// Single left-to-right scan for every heading at `heading_level` (a tag
/// name such as `h2`). Lookahead offsets are fixed: +1 heading content,
/// +2 heading close, +3 paragraph open, +4 inline run.
pub fn detect(tokens: &[Token], heading_level: &str) -> Vec<Motif> {
    let mut motifs = vec![];

    for (index, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::HeadingOpen || token.tag != heading_level {
            continue;
        }

        let heading_intact = matches!(
            tokens.get(index + 1).map(|t| t.kind),
            Some(TokenKind::Inline)
        ) && matches!(
            tokens.get(index + 2).map(|t| t.kind),
            Some(TokenKind::HeadingClose)
        );

        if !heading_intact {
            motifs.push(Motif {
                heading_open: index,
                heading_content: index + 1,
                heading_close: index + 2,
                pattern: MotifPattern::Malformed {
                    reason: format!("heading `{heading_level}` at token {index} has no content/close pair"),
                },
            });
            continue;
        }

        motifs.push(Motif {
            heading_open: index,
            heading_content: index + 1,
            heading_close: index + 2,
            pattern: paragraph_pattern(tokens, index),
        });
    }

    motifs
}

/// Inspect offsets +3/+4 behind one heading. Absence of the paragraph
/// pattern is not a failure, only an empty motif.
fn paragraph_pattern(tokens: &[Token], heading_open: usize) -> MotifPattern {
    let paragraph_open = heading_open + 3;
    let inline = heading_open + 4;

    let paragraph_found = matches!(
        tokens.get(paragraph_open).map(|t| t.kind),
        Some(TokenKind::ParagraphOpen)
    ) && matches!(tokens.get(inline).map(|t| t.kind), Some(TokenKind::Inline));

    if !paragraph_found {
        return MotifPattern::Empty;
    }

    let image_children: Vec<usize> = tokens[inline]
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.kind == TokenKind::Image)
        .map(|(child_index, _)| child_index)
        .collect();

    if image_children.is_empty() {
        return MotifPattern::Empty;
    }

    MotifPattern::Images {
        paragraph_open,
        inline,
        image_children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    fn heading(level: &str, text: &str) -> Vec<Token> {
        let mut content = Token::new(TokenKind::Inline, "");
        content.content = text.to_string();
        vec![
            Token::new(TokenKind::HeadingOpen, level),
            content,
            Token::new(TokenKind::HeadingClose, level),
        ]
    }

    fn image_paragraph(srcs: &[&str]) -> Vec<Token> {
        let mut inline = Token::new(TokenKind::Inline, "");
        for src in srcs {
            let mut image = Token::new(TokenKind::Image, "img");
            image.attr_set("src", src.to_string());
            inline.children.push(image);
        }
        vec![
            Token::new(TokenKind::ParagraphOpen, "p"),
            inline,
            Token::new(TokenKind::ParagraphClose, "p"),
        ]
    }

    #[test]
    fn test_detects_image_motif() {
        let mut tokens = heading("h2", "Pictures");
        tokens.extend(image_paragraph(&["a.jpg", "b.jpg"]));

        let motifs = detect(&tokens, "h2");
        assert_eq!(motifs.len(), 1);
        assert_eq!(motifs[0].heading_open, 0);
        assert_eq!(
            motifs[0].pattern,
            MotifPattern::Images {
                paragraph_open: 3,
                inline: 4,
                image_children: vec![0, 1],
            }
        );
    }

    #[test]
    fn test_heading_without_images_is_empty_motif() {
        let mut tokens = heading("h2", "Prose");
        let mut text = Token::new(TokenKind::Text, "");
        text.content = "words".to_string();
        let mut inline = Token::new(TokenKind::Inline, "");
        inline.children.push(text);
        tokens.push(Token::new(TokenKind::ParagraphOpen, "p"));
        tokens.push(inline);
        tokens.push(Token::new(TokenKind::ParagraphClose, "p"));

        let motifs = detect(&tokens, "h2");
        assert_eq!(motifs.len(), 1);
        assert_eq!(motifs[0].pattern, MotifPattern::Empty);
    }

    #[test]
    fn test_heading_at_document_end_is_empty_motif() {
        let tokens = heading("h2", "Last");
        let motifs = detect(&tokens, "h2");
        assert_eq!(motifs.len(), 1);
        assert_eq!(motifs[0].pattern, MotifPattern::Empty);
    }

    #[test]
    fn test_truncated_heading_is_malformed() {
        let tokens = vec![Token::new(TokenKind::HeadingOpen, "h2")];
        let motifs = detect(&tokens, "h2");
        assert_eq!(motifs.len(), 1);
        assert!(matches!(
            motifs[0].pattern,
            MotifPattern::Malformed { .. }
        ));
    }

    #[test]
    fn test_other_levels_ignored() {
        let mut tokens = heading("h3", "Nope");
        tokens.extend(image_paragraph(&["a.jpg"]));
        assert!(detect(&tokens, "h2").is_empty());
    }
}
