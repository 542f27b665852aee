//! Value normalization.
//!
//! Raw values are copied byte-for-byte except for two rewrites:
//!
//! 1. A bare custom-property reference `--token` becomes `var(--token)`.
//!    References already wrapped as `var(--token`, with or without spaces
//!    after the parenthesis, are left untouched.
//! 2. A local-variable reference `--&name` becomes a [`Segment::Local`],
//!    resolved once the owning class has its display name.
//!
//! ```text
//! --primary                 -> var(--primary)
//! calc(--&gap * 2)          -> calc(<local gap> * 2)
//! 1px solid var(--border)   -> 1px solid var(--border)
//! ```

use crate::types::value::Segment;

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Length of the identifier run starting at `start`.
fn ident_len(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|&&b| is_ident_byte(b)).count()
}

/// Normalizes a raw value into segments.
pub fn normalize(raw: &str) -> Vec<Segment> {
    if !raw.contains("--") {
        return vec![Segment::Text(raw.to_string())];
    }

    let bytes = raw.as_bytes();
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] != b'-' || bytes[i + 1] != b'-' {
            i += 1;
            continue;
        }

        // Local reference: --&name
        if bytes.get(i + 2) == Some(&b'&') {
            let len = ident_len(bytes, i + 3);
            if len > 0 {
                text.push_str(&raw[literal_start..i]);
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Local(raw[i + 3..i + 3 + len].to_string()));
                i += 3 + len;
                literal_start = i;
                continue;
            }
            i += 2;
            continue;
        }

        // Custom property: --name, unless already inside var(
        let len = ident_len(bytes, i + 2);
        if len == 0 {
            i += 2;
            continue;
        }
        let end = i + 2 + len;
        if raw[..i].trim_end().ends_with("var(") {
            i = end;
            continue;
        }
        text.push_str(&raw[literal_start..i]);
        text.push_str("var(");
        text.push_str(&raw[i..end]);
        text.push(')');
        i = end;
        literal_start = i;
    }

    text.push_str(&raw[literal_start..]);
    if !text.is_empty() || segments.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// Normalizes a value that may not contain local references.
///
/// Returns `None` if a `--&name` reference is present.
pub fn normalize_text(raw: &str) -> Option<String> {
    let mut out = String::new();
    for segment in normalize(raw) {
        match segment {
            Segment::Text(text) => out.push_str(&text),
            Segment::Local(_) | Segment::Runtime(_) => return None,
        }
    }
    Some(out)
}
