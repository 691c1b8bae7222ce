// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use indexmap::IndexMap;

/// split `path#fragment` to `(path, fragment)`
pub fn split_fragment(src: &str) -> (&str, Option<&str>) {
    match src.find('#') {
        Some(pos) => (&src[0..pos], Some(&src[pos + 1..])),
        None => (src, None),
    }
}

/// Parse extra attributes smuggled in an image URL fragment,
/// e.g. `foo.jpg#attr1=val1&attr2=val2`.
///
/// Literal `&` or `=` inside a key or value is not representable in this
/// grammar and is not unescaped. A part without `=` maps to the empty string.
pub fn attrs_from_fragment(fragment: Option<&str>) -> IndexMap<String, String> {
    let mut attrs = IndexMap::new();

    let Some(fragment) = fragment else {
        return attrs;
    };
    if fragment.is_empty() {
        return attrs;
    }

    for part in fragment.split('&') {
        match part.split_once('=') {
            Some((key, val)) => attrs.insert(key.to_string(), val.to_string()),
            None => attrs.insert(part.to_string(), String::new()),
        };
    }

    attrs
}
