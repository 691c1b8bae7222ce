// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use pulldown_cmark_escape::{escape_href, escape_html_body_text};

use crate::token::{Token, TokenKind};

/// Render the (possibly transformed) token array back to HTML. Hidden
/// tokens stay in the array but produce no output.
pub fn render(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        render_token(token, &mut output);
    }
    output
}

fn render_token(token: &Token, output: &mut String) {
    if token.hidden {
        return;
    }

    match token.kind {
        TokenKind::HeadingOpen | TokenKind::ParagraphOpen => {
            output.push('<');
            output.push_str(&token.tag);
            output.push('>');
        }
        TokenKind::HeadingClose | TokenKind::ParagraphClose => {
            output.push_str("</");
            output.push_str(&token.tag);
            output.push_str(">\n");
        }
        TokenKind::Inline => {
            if token.children.is_empty() {
                escape_html_body_text(&mut *output, &token.content)
                    .expect("writing to a string does not fail");
            } else {
                for child in &token.children {
                    render_token(child, output);
                }
            }
        }
        TokenKind::Image => {
            output.push_str("<img src=\"");
            escape_href(&mut *output, token.attr_get("src").unwrap_or(""))
                .expect("writing to a string does not fail");
            output.push_str("\" title=\"");
            output.push_str(&htmlize::escape_attribute(token.attr_get("title").unwrap_or("")));
            output.push_str("\" alt=\"");
            output.push_str(&htmlize::escape_attribute(&token.content));
            output.push_str("\">");
        }
        // text children carry pre-rendered inline HTML
        TokenKind::Text => output.push_str(&token.content),
        TokenKind::Softbreak => output.push('\n'),
        TokenKind::HtmlBlock => {
            output.push_str(&token.content);
            output.push('\n');
        }
    }
}

/// Minimal page shell around one rendered document.
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en-US">
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<meta name="viewport" content="width=device-width">
<title>{}</title>
</head>
<body>
{}</body>
</html>
"#,
        htmlize::escape_text(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    #[test]
    fn test_hidden_tokens_skipped() {
        let mut hidden = Token::new(TokenKind::ParagraphOpen, "p");
        hidden.hidden = true;
        let tokens = vec![hidden, Token::html_block("<Gallery>".to_string())];

        assert_eq!(render(&tokens), "<Gallery>\n");
    }

    #[test]
    fn test_heading_roundtrip() {
        let mut content = Token::new(TokenKind::Inline, "");
        content.content = "Title & more".to_string();
        let tokens = vec![
            Token::new(TokenKind::HeadingOpen, "h2"),
            content,
            Token::new(TokenKind::HeadingClose, "h2"),
        ];

        assert_eq!(render(&tokens), "<h2>Title &amp; more</h2>\n");
    }

    #[test]
    fn test_image_attributes_escaped() {
        let mut image = Token::new(TokenKind::Image, "img");
        image.attr_set("src", "a.jpg".to_string());
        image.attr_set("title", "say \"hi\"".to_string());
        image.content = "alt".to_string();

        assert_eq!(
            render(&[image]),
            r#"<img src="a.jpg" title="say &quot;hi&quot;" alt="alt">"#
        );
    }
}
