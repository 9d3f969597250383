//! Comment masking
//!
//! Replaces `//` and `/* */` comments with spaces so commented-out exports
//! are not matched. Byte offsets and line breaks are preserved. String
//! literals are tracked just enough to leave `"https://..."` alone; quote
//! state resets at each newline for `'` and `"` so a stray apostrophe (for
//! example in JSX text) cannot swallow the rest of the file.

use std::borrow::Cow;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str(u8),
    LineComment,
    BlockComment,
}

pub(crate) fn mask_comments(source: &str) -> Cow<'_, str> {
    if !source.contains("//") && !source.contains("/*") {
        return Cow::Borrowed(source);
    }

    let bytes = source.as_bytes();
    let mut out = bytes.to_vec();
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::LineComment;
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                }
                (b'/', Some(b'*')) => {
                    state = State::BlockComment;
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                }
                (b'"' | b'\'' | b'`', _) => state = State::Str(b),
                _ => {}
            },
            State::Str(quote) => {
                if b == b'\\' {
                    i += 1;
                } else if b == quote || (b == b'\n' && quote != b'`') {
                    state = State::Code;
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                } else {
                    out[i] = b' ';
                }
            }
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    state = State::Code;
                    i += 1;
                } else if b != b'\n' {
                    out[i] = b' ';
                }
            }
        }
        i += 1;
    }

    // Every byte of a comment is blanked, so multi-byte characters are
    // replaced whole and the buffer stays valid UTF-8.
    match String::from_utf8(out) {
        Ok(s) => Cow::Owned(s),
        Err(_) => Cow::Borrowed(source),
    }
}
