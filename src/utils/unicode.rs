//! Byte-index helpers for moving a cursor through the creation form's buffer
//! without landing inside a multi-byte character.

pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i < byte_index)
        .last()
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    s.char_indices()
        .map(|(i, _)| i)
        .find(|&i| i > byte_index)
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn prev_word_boundary(s: &str, byte_index: usize) -> usize {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let Some(mut pos) = chars.iter().rposition(|(i, _)| *i < byte_index) else {
        return 0;
    };

    while pos > 0 && !is_word_char(chars[pos].1) {
        pos -= 1;
    }
    while pos > 0 && is_word_char(chars[pos - 1].1) {
        pos -= 1;
    }

    chars.get(pos).map(|(i, _)| *i).unwrap_or(0)
}

pub fn next_word_boundary(s: &str, byte_index: usize) -> usize {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut pos = chars
        .iter()
        .position(|(i, _)| *i >= byte_index)
        .unwrap_or(chars.len());

    while pos < chars.len() && is_word_char(chars[pos].1) {
        pos += 1;
    }
    while pos < chars.len() && !is_word_char(chars[pos].1) {
        pos += 1;
    }

    chars.get(pos).map(|(i, _)| *i).unwrap_or(s.len())
}
