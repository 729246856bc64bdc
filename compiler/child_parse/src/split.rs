//! Separator search that skips string literals.
//!
//! Statement separators (` as `, ` to `, ` and `) and condition phrases are
//! only meaningful outside quotes: `remember "known as x" as label` has one
//! separator, not two.

/// Byte offsets of every non-overlapping occurrence of `sep` outside quotes.
///
/// Both `"` and `'` open a literal; a backslash inside a literal escapes the
/// next byte. An unterminated literal extends to the end of the text.
pub fn find_outside_quotes(text: &str, sep: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let needle = sep.as_bytes();
    let mut hits = Vec::new();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    if needle.is_empty() {
        return hits;
    }

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 2;
                    continue;
                }
                if b == q {
                    quote = None;
                }
                i += 1;
            }
            None => {
                if b == b'"' || b == b'\'' {
                    quote = Some(b);
                    i += 1;
                } else if bytes[i..].starts_with(needle) {
                    hits.push(i);
                    i += needle.len();
                } else {
                    i += 1;
                }
            }
        }
    }
    hits
}

/// Split `text` on `sep`, ignoring occurrences inside quotes.
pub fn split_outside_quotes<'a>(text: &'a str, sep: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for hit in find_outside_quotes(text, sep) {
        parts.push(&text[start..hit]);
        start = hit + sep.len();
    }
    parts.push(&text[start..]);
    parts
}
