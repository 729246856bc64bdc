//! Keyword tables shared by the line classifier and the block resolver.

/// Block openers: the keyword naming the block and the words that start it.
///
/// A line opens a block if it starts with all of the words, each followed by
/// a space, with something left after the last one.
pub const BLOCK_OPENERS: &[(&str, &[&str])] = &[
    ("if", &["if"]),
    ("repeat", &["repeat"]),
    ("count", &["count"]),
    ("learn", &["learn"]),
    ("for each", &["for", "each"]),
];

/// A bare line that closes the innermost open block.
pub const END: &str = "end";

/// A bare line that separates the two branches of an `if`.
pub const OTHERWISE: &str = "otherwise";

/// Prefix of a comment line.
pub const COMMENT: &str = "//";

/// Words the expression tokenizer always reads as boolean literals.
pub const RESERVED_NAMES: &[&str] = &["true", "false", "True", "False"];

/// Rest of `text` after the keyword `kw`, when `kw` is the whole text or is
/// followed by a space. Extra whitespace after the space is skipped.
pub fn strip_keyword<'a>(text: &'a str, kw: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(kw)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix(' ').map(str::trim_start)
}

/// The keyword of the block a line opens (`"if"`, `"for each"`, ...), if any.
///
/// Used for lines that failed to classify; a classified line answers through
/// [`Stmt::block_keyword`](crate::Stmt::block_keyword).
pub fn block_keyword(line: &str) -> Option<&'static str> {
    BLOCK_OPENERS
        .iter()
        .find(|(_, words)| {
            words
                .iter()
                .try_fold(line, |rest, word| strip_keyword(rest, word))
                .is_some_and(|rest| !rest.is_empty())
        })
        .map(|&(keyword, _)| keyword)
}

/// Returns `true` if the trimmed line opens a block.
#[inline]
pub fn opens_block(line: &str) -> bool {
    block_keyword(line).is_some()
}

/// Returns `true` if `name` can be bound as a variable or parameter.
///
/// Names follow the identifier rule of the expression tokenizer:
/// `[A-Za-z_][A-Za-z0-9_]*`, minus the boolean literals. Anything else could
/// be bound but never read back.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !RESERVED_NAMES.contains(&name)
}
