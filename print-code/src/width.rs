//! GBK column width helpers
//!
//! Thermal printers lay out text in GBK bytes: ASCII takes one column,
//! Chinese characters take two. Recipe names and print codes are measured
//! the same way so tickets line up on 58mm and 80mm paper.

/// Get the GBK byte width of a string
pub fn gbk_width(s: &str) -> usize {
    let (cow, _, _) = encoding_rs::GBK.encode(s);
    cow.len()
}

fn char_width(c: char) -> usize {
    let mut buf = [0u8; 4];
    gbk_width(c.encode_utf8(&mut buf))
}

/// Truncate a string to fit within a GBK byte width
pub fn truncate_gbk(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        width += char_width(c);
        if width > max_width {
            return &s[..idx];
        }
    }
    s
}

/// Split a string into chunks no wider than `max_width` columns
///
/// A character wider than `max_width` still gets its own chunk.
pub fn split_gbk(s: &str, max_width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let mut head = truncate_gbk(rest, max_width);
        if head.is_empty() {
            let first = rest.chars().next().map_or(rest.len(), char::len_utf8);
            head = &rest[..first];
        }
        chunks.push(head);
        rest = &rest[head.len()..];
    }
    chunks
}

/// Pad a string to a specific GBK byte width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_gbk(s: &str, width: usize, align_right: bool) -> String {
    let current_width = gbk_width(s);
    if current_width >= width {
        return truncate_gbk(s, width).to_string();
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Center a string within a GBK byte width (no trailing padding)
pub fn center_gbk(s: &str, width: usize) -> String {
    let current_width = gbk_width(s);
    if current_width >= width {
        return truncate_gbk(s, width).to_string();
    }
    let left = (width - current_width) / 2;
    format!("{}{}", " ".repeat(left), s)
}
