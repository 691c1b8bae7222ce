// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use indexmap::IndexMap;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Substitute for U+0027 in free text. Escaping an apostrophe inside a value
/// that is itself apostrophe-delimited is not reversibly expressible in the
/// target literal grammar, so the modifier letter apostrophe stands in.
pub const APOSTROPHE_SUBSTITUTE: char = 'ʼ';

/// Serialized metadata for one image of a gallery.
///
/// `id` is the zero-based position among the images of its own gallery,
/// not a document-wide ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: usize,
    pub src: String,
    pub alt: String,
    pub caption: String,

    #[serde(rename = "extraAttributes")]
    pub extra_attributes: IndexMap<String, String>,
}

/// Replace apostrophes in free text (alt, caption) before serialization.
/// Deliberately lossy, see [`APOSTROPHE_SUBSTITUTE`].
pub fn substitute_apostrophes(text: &str) -> String {
    text.replace('\'', &APOSTROPHE_SUBSTITUTE.to_string())
}

/// Render image records as an object-literal array with unquoted keys and
/// single-quoted values, safe to embed inside a double-quoted HTML attribute.
///
/// The output never contains an unescaped `"`: after key unquoting, stray
/// single quotes are escaped and every remaining double quote (value
/// delimiters and JSON-escaped inner quotes alike) becomes a single quote.
pub fn to_attr_string(records: &[ImageRecord]) -> eyre::Result<String> {
    let json = serde_json::to_string(records)?;

    let unquote_keys = Regex::new(r#""([^"]+)":"#)?;
    let literal = unquote_keys.replace_all(&json, "$1:");

    let literal = literal.replace('\'', "\\'");
    Ok(literal.replace('"', "'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, src: &str, alt: &str, caption: &str) -> ImageRecord {
        ImageRecord {
            id,
            src: src.to_string(),
            alt: substitute_apostrophes(alt),
            caption: substitute_apostrophes(caption),
            extra_attributes: IndexMap::new(),
        }
    }

    /// Undo the literal rewrite so the payload can be compared field by field.
    fn reparse(attr_str: &str) -> Vec<ImageRecord> {
        let json = attr_str.replace('\'', "\"");
        let requote = Regex::new(r"([A-Za-z][A-Za-z0-9]*):").unwrap();
        let json = requote.replace_all(&json, "\"$1\":");
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_attr_string_shape() {
        let records = vec![record(0, "/images/a.jpg", "A photo", "")];
        let attr_str = to_attr_string(&records).unwrap();

        assert_eq!(
            attr_str,
            "[{id:0,src:'/images/a.jpg',alt:'A photo',caption:'',extraAttributes:{}}]"
        );
    }

    #[test]
    fn test_attr_string_never_contains_double_quote() {
        let mut with_extras = record(1, "b.jpg", "alt \"quoted\"", "cap");
        with_extras
            .extra_attributes
            .insert("frame".to_string(), "2".to_string());
        let attr_str = to_attr_string(&[with_extras]).unwrap();

        assert!(!attr_str.contains('"'));
        assert!(attr_str.contains("extraAttributes:{frame:'2'}"));
    }

    #[test]
    fn test_round_trip_modulo_apostrophes() {
        let records = vec![
            record(0, "/images/a.jpg", "it's here", "the cat's"),
            record(1, "/images/b%20c.jpg", "plain", ""),
        ];
        let attr_str = to_attr_string(&records).unwrap();
        let recovered = reparse(&attr_str);

        assert_eq!(recovered, records);
        assert_eq!(recovered[0].alt, "itʼs here");
        assert_eq!(recovered[0].caption, "the catʼs");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_attr_string(&[]).unwrap(), "[]");
    }
}
