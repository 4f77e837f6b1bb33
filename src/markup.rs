//! Small HTML string helpers shared by the widget models.
//!
//! Everything here is plain string manipulation: escaping for attribute and
//! text content, the hidden-input builder used when widgets post form data,
//! and the `<img src>` rewriter used by help content.

/// Escapes the five HTML-significant characters in `text`.
///
/// Safe for both element text and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Returns the HTML for a hidden form input carrying `name` and `value`.
///
/// Both attributes are escaped.
pub fn hidden_input(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\" />",
        escape(name),
        escape(value)
    )
}

/// Prepends `prefix` to the `src` attribute of every `<img>` tag in `html`.
///
/// Used to turn relative image paths in server-delivered help content into
/// absolute URLs under the application's static root. Tags without a quoted
/// `src` attribute are left untouched.
pub fn prefix_img_sources(html: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(html.len() + prefix.len());
    let mut rest = html;

    while let Some(start) = find_ignore_ascii_case(rest, "<img") {
        // "<imgX" is some other element, not an image tag
        let tag_name_ends = rest
            .as_bytes()
            .get(start + 4)
            .map(|b| !b.is_ascii_alphanumeric())
            .unwrap_or(true);
        if !tag_name_ends {
            let cut = start + 4;
            out.push_str(&rest[..cut]);
            rest = &rest[cut..];
            continue;
        }

        let (before, tag_on) = rest.split_at(start);
        out.push_str(before);

        let tag_len = tag_on.find('>').map(|i| i + 1).unwrap_or(tag_on.len());
        let (tag, after) = tag_on.split_at(tag_len);
        out.push_str(&rewrite_img_tag(tag, prefix));
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Finds the first ASCII-case-insensitive occurrence of `needle` in `haystack`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Inserts `prefix` just inside the opening quote of the tag's `src` value.
fn rewrite_img_tag(tag: &str, prefix: &str) -> String {
    let bytes = tag.as_bytes();
    let mut search_from = 0;

    while let Some(rel) = find_ignore_ascii_case(&tag[search_from..], "src") {
        let at = search_from + rel;
        search_from = at + 3;

        // The attribute name must stand alone, not be the tail of another word.
        if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }

        let mut i = at + 3;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || (bytes[i] != b'"' && bytes[i] != b'\'') {
            continue;
        }

        let insert_at = i + 1;
        let mut out = String::with_capacity(tag.len() + prefix.len());
        out.push_str(&tag[..insert_at]);
        out.push_str(prefix);
        out.push_str(&tag[insert_at..]);
        return out;
    }

    tag.to_string()
}
