// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fmt::Display;

/// Kind of an element in the flat document representation.
///
/// Open/close kinds always come in balanced pairs. `Inline` tokens are the
/// only ones carrying children; `HtmlBlock` tokens carry literal markup in
/// their `content` and are how injected regions enter the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    HeadingOpen,
    HeadingClose,
    ParagraphOpen,
    ParagraphClose,
    Inline,
    Image,
    Text,
    Softbreak,
    HtmlBlock,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::ParagraphClose => "paragraph_close",
            TokenKind::Inline => "inline",
            TokenKind::Image => "image",
            TokenKind::Text => "text",
            TokenKind::Softbreak => "softbreak",
            TokenKind::HtmlBlock => "html_block",
        };
        write!(f, "{s}")
    }
}

/// One element of the ordered document representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// Element name, e.g. `h2`, `p`, `img`. Empty for raw markup tokens.
    pub tag: String,

    /// Text content, or literal markup for `HtmlBlock` tokens.
    pub content: String,

    /// Child tokens; only populated on `Inline` tokens.
    pub children: Vec<Token>,

    /// Retained in the sequence but skipped by the renderer.
    pub hidden: bool,

    attrs: Vec<(String, String)>,
}

impl Token {
    pub fn new(kind: TokenKind, tag: &str) -> Token {
        Token {
            kind,
            tag: tag.to_string(),
            content: String::new(),
            children: vec![],
            hidden: false,
            attrs: vec![],
        }
    }

    /// A raw markup token whose content is emitted verbatim.
    pub fn html_block(content: String) -> Token {
        let mut token = Token::new(TokenKind::HtmlBlock, "");
        token.content = content;
        token
    }

    pub fn attr_get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attr_set(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, old)) => *old = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }
}
