// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

//! pulldown-cmark front end for the token array the transform consumes.
//!
//! Headings and paragraphs keep their structure: a heading becomes an
//! open/content/close triplet at consecutive positions, a paragraph becomes
//! open, inline run, close, with image leaves as addressable children. Every
//! other block construct is opaque to the transform and collapses into one
//! raw markup token holding its rendered HTML.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::token::{Token, TokenKind};

pub const OPTIONS: Options = Options::ENABLE_TABLES.union(Options::ENABLE_FOOTNOTES);

pub fn tokenize(markdown: &str) -> Vec<Token> {
    let mut events = Parser::new_ext(markdown, OPTIONS);
    let mut tokens = vec![];

    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let inner = collect_until(&mut events, TagEnd::Heading(level));
                let tag = level.to_string();

                tokens.push(Token::new(TokenKind::HeadingOpen, &tag));
                tokens.push(inline_token(inner));
                tokens.push(Token::new(TokenKind::HeadingClose, &tag));
            }

            Event::Start(Tag::Paragraph) => {
                let inner = collect_until(&mut events, TagEnd::Paragraph);

                tokens.push(Token::new(TokenKind::ParagraphOpen, "p"));
                tokens.push(paragraph_inline(inner));
                tokens.push(Token::new(TokenKind::ParagraphClose, "p"));
            }

            Event::Start(tag) => {
                // lists, tables, code blocks and friends pass through as
                // one pre-rendered block
                let end = tag.to_end();
                let mut span = vec![Event::Start(tag)];
                span.extend(collect_until(&mut events, end));
                span.push(Event::End(end));
                tokens.push(Token::html_block(render_events(span)));
            }

            event => tokens.push(Token::html_block(render_events(vec![event]))),
        }
    }

    tokens
}

/// Consume events up to (not including) the matching end tag, keeping
/// nested spans intact.
fn collect_until<'e, I>(events: &mut I, end: TagEnd) -> Vec<Event<'e>>
where
    I: Iterator<Item = Event<'e>>,
{
    let mut inner = vec![];
    let mut depth = 0usize;

    for event in events.by_ref() {
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(tag_end) => {
                if depth == 0 && *tag_end == end {
                    break;
                }
                depth = depth.saturating_sub(1);
            }
            _ => (),
        }
        inner.push(event);
    }

    inner
}

/// Inline token for a heading: plain text in `content` (consumed verbatim by
/// the section builder), rendered HTML as a single text child.
fn inline_token(inner: Vec<Event<'_>>) -> Token {
    let mut token = Token::new(TokenKind::Inline, "");
    token.content = plain_text(&inner);
    if !inner.is_empty() {
        token.children.push(text_child(render_events(inner)));
    }
    token
}

/// Inline run of a paragraph. Images and softbreaks become addressable
/// children; every run of other inline events collapses into one rendered
/// text child.
fn paragraph_inline(inner: Vec<Event<'_>>) -> Token {
    let mut token = Token::new(TokenKind::Inline, "");
    let mut pending: Vec<Event<'_>> = vec![];
    let mut events = inner.into_iter();

    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                if !pending.is_empty() {
                    token.children.push(text_child(render_events(std::mem::take(&mut pending))));
                }

                let alt = plain_text(&collect_until(&mut events, TagEnd::Image));
                let mut image = Token::new(TokenKind::Image, "img");
                image.attr_set("src", dest_url.to_string());
                if !title.is_empty() {
                    image.attr_set("title", title.to_string());
                }
                image.content = alt;
                token.children.push(image);
            }

            Event::SoftBreak => {
                if !pending.is_empty() {
                    token.children.push(text_child(render_events(std::mem::take(&mut pending))));
                }
                token.children.push(Token::new(TokenKind::Softbreak, ""));
            }

            event => pending.push(event),
        }
    }

    if !pending.is_empty() {
        token.children.push(text_child(render_events(pending)));
    }

    token
}

fn text_child(rendered: String) -> Token {
    let mut child = Token::new(TokenKind::Text, "");
    child.content = rendered;
    child
}

fn render_events(events: Vec<Event<'_>>) -> String {
    let mut rendered = String::new();
    html::push_html(&mut rendered, events.into_iter());
    rendered
}

fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(s) | Event::Code(s) => text.push_str(s),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => (),
        }
    }
    text
}
