//! Character classes and word boundaries for word-wise deletion

use ropey::Rope;

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_alphanumeric() && ch != '_'
}

/// Character class used to find word edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    Whitespace,
    WordChar,
    Punctuation,
}

pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// Start of the word ending at `offset`: skips trailing whitespace, then one
/// run of same-class characters
pub fn word_start(text: &Rope, offset: usize) -> usize {
    let chars: Vec<char> = text.chars().take(offset).collect();
    let mut idx = chars.len();
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    if let Some(&ch) = idx.checked_sub(1).and_then(|i| chars.get(i)) {
        let kind = char_type(ch);
        while idx > 0 && char_type(chars[idx - 1]) == kind {
            idx -= 1;
        }
    }
    idx
}

/// End of the word starting at `offset`; mirror of [`word_start`]
pub fn word_end(text: &Rope, offset: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut idx = offset.min(len);
    while idx < len && chars[idx].is_whitespace() {
        idx += 1;
    }
    if let Some(&ch) = chars.get(idx) {
        let kind = char_type(ch);
        while idx < len && char_type(chars[idx]) == kind {
            idx += 1;
        }
    }
    idx
}
