// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use regex_lite::Regex;

/// Rewrite page-relative image paths (kept for offline markdown preview) to
/// the root-relative path the published site serves from.
///
/// Every occurrence of `prefix` followed by any number of `../` segments, or
/// by one or more `/`, and then `old` (its own leading slash stripped) is
/// replaced by `prefix + new`. An empty `old` disables the rewrite entirely,
/// including the `%20` step below.
pub fn replace_image_paths(prefix: &str, attr_str: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return attr_str.to_string();
    }

    // allow leading slash to indicate root
    let old_pathless = old.strip_prefix('/').unwrap_or(old);

    let prefix_re = regex_lite::escape(prefix);
    let old_re = regex_lite::escape(old_pathless);

    // search across all image paths, not only the last occurrence
    let nested_page_path = Regex::new(&format!(r"{prefix_re}(\.\./)*{old_re}"))
        .expect("escaped literals form a valid pattern");
    let root_page_path = Regex::new(&format!(r"{prefix_re}(/)+{old_re}"))
        .expect("escaped literals form a valid pattern");

    let replacement = format!("{prefix}{new}");
    let attr_str = nested_page_path.replace_all(attr_str, replacement.as_str());
    let attr_str = root_page_path.replace_all(&attr_str, replacement.as_str());

    // the payload consumer percent-decodes once, so a filename's encoded
    // space must arrive as %2520 to survive as %20
    attr_str.replace("%20", "%2520")
}
