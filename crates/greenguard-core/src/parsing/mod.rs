pub mod keywords;
pub mod numbers;

pub use keywords::{contains_any_keyword, count_keyword_hits};
pub use numbers::{parse_numbers, round_to};

/// Split extracted text into lines.
///
/// Breaks on `\n`, `\r\n`, lone `\r`, vertical tab, form feed (pdftotext
/// page separator), the file/group/record separators `\x1c`-`\x1e`, NEL,
/// and the Unicode line and paragraph separators. A trailing break does
/// not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
