// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::{
    attr_string::{substitute_apostrophes, to_attr_string, ImageRecord},
    attrs::{attrs_from_fragment, split_fragment},
    config::GalleryOptions,
    rewrite::replace_image_paths,
    token::Token,
};

/// Attribute prefix each image path occurrence sits behind in the
/// serialized payload.
const SRC_PREFIX: &str = "src:'";

/// Balanced raw markup pair wrapping one heading. The open tag carries the
/// gallery's document ordinal and the serialized, path-rewritten image
/// payload as a bound attribute.
pub fn gallery_tokens(
    options: &GalleryOptions,
    ordinal: usize,
    images: &[&Token],
) -> eyre::Result<(Token, Token)> {
    let records: Vec<ImageRecord> = images
        .iter()
        .enumerate()
        .map(|(id, image)| {
            let (src, fragment) = split_fragment(image.attr_get("src").unwrap_or(""));
            ImageRecord {
                id,
                src: src.to_string(),
                alt: substitute_apostrophes(&image.content),
                caption: substitute_apostrophes(image.attr_get("title").unwrap_or("")),
                extra_attributes: attrs_from_fragment(fragment),
            }
        })
        .collect();

    let attr_str = to_attr_string(&records)?;
    let attr_str = replace_image_paths(
        SRC_PREFIX,
        &attr_str,
        &options.image_path_old,
        &options.image_path_new,
    );

    let open = Token::html_block(format!(
        r#"<{} class="{}" id="{}" :images="{}">"#,
        options.gallery_tag, options.gallery_class, ordinal, attr_str
    ));
    let close = Token::html_block(format!("</{}>", options.gallery_tag));

    Ok((open, close))
}

/// Balanced pair wrapping the content between one gallery and the next, or
/// to document end.
pub fn content_wrapper_tokens(options: &GalleryOptions) -> (Token, Token) {
    let open = Token::html_block(format!(
        r#"<{} class="{}">"#,
        options.content_wrapper_tag, options.content_wrapper_class
    ));
    let close = Token::html_block(format!("</{}>", options.content_wrapper_tag));

    (open, close)
}

/// Balanced pair wrapping one gallery and its content wrapper. The heading
/// text goes into `headingContent` with no escaping beyond what the heading
/// token already carries; attribute-hostile heading text is a known
/// limitation.
pub fn section_tokens(options: &GalleryOptions, heading_text: &str) -> (Token, Token) {
    let open = Token::html_block(format!(
        r#"<{} class="{}" headingContent="{}">"#,
        options.section_tag, options.section_class, heading_text
    ));
    let close = Token::html_block(format!("</{}>", options.section_tag));

    (open, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn image(src: &str, alt: &str, title: Option<&str>) -> Token {
        let mut token = Token::new(TokenKind::Image, "img");
        token.attr_set("src", src.to_string());
        token.content = alt.to_string();
        if let Some(title) = title {
            token.attr_set("title", title.to_string());
        }
        token
    }

    #[test]
    fn test_gallery_open_tag() {
        let options = GalleryOptions {
            image_path_old: "/images/src".to_string(),
            image_path_new: "/images".to_string(),
            ..GalleryOptions::default()
        };

        let first = image("../../images/src/a.jpg#frame=2", "A", Some("cap"));
        let second = image("/images/src/b.jpg", "B", None);
        let (open, close) = gallery_tokens(&options, 1, &[&first, &second]).unwrap();

        assert_eq!(
            open.content,
            r#"<Gallery class="" id="1" :images="[{id:0,src:'/images/a.jpg',alt:'A',caption:'cap',extraAttributes:{frame:'2'}},{id:1,src:'/images/b.jpg',alt:'B',caption:'',extraAttributes:{}}]">"#
        );
        assert_eq!(close.content, "</Gallery>");
    }

    #[test]
    fn test_gallery_handles_apostrophes() {
        let options = GalleryOptions::default();
        let token = image("a.jpg", "it's", Some("cat's"));
        let (open, _) = gallery_tokens(&options, 0, &[&token]).unwrap();

        assert!(open.content.contains("alt:'itʼs'"));
        assert!(open.content.contains("caption:'catʼs'"));
    }

    #[test]
    fn test_wrapper_and_section_tags() {
        let options = GalleryOptions {
            section_class: "post".to_string(),
            ..GalleryOptions::default()
        };

        let (open, close) = content_wrapper_tokens(&options);
        assert_eq!(open.content, r#"<EntryContent class="">"#);
        assert_eq!(close.content, "</EntryContent>");

        let (open, close) = section_tokens(&options, "Holiday 2024");
        assert_eq!(
            open.content,
            r#"<ContentSection class="post" headingContent="Holiday 2024">"#
        );
        assert_eq!(close.content, "</ContentSection>");
    }
}
