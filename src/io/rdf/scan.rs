use crate::io::lines::lines;
use crate::io::marker;

/// Upper bound on the lines inspected by [`is_reaction_block`].
pub const MAX_SCAN_LINES: usize = 256;

/// Upper bound on the bytes inspected by [`is_reaction_block`].
pub const MAX_SCAN_BYTES: usize = 64 * 1024;

/// Cheap test for whether `text` looks like an RDF reaction container or a
/// bare `$RXN` block.
///
/// Only the first [`MAX_SCAN_LINES`] lines within the first
/// [`MAX_SCAN_BYTES`] bytes are inspected and nothing is decoded. The first non-blank line has to open the container (`$RDFILE`,
/// `$RFMT` or `$RXN`), and a reaction marker must show up before any
/// molecule record does. Anything else, including empty input, is `false`.
pub fn is_reaction_block(text: &str) -> bool {
    let mut opened = false;

    for line in lines(scan_window(text)).take(MAX_SCAN_LINES) {
        if line.is_blank() {
            continue;
        }
        if !opened {
            if ![marker::RDFILE, marker::RFMT, marker::RXN]
                .iter()
                .any(|m| line.has_marker(m))
            {
                return false;
            }
            opened = true;
        }
        if line.has_marker(marker::RXN) || line.has_marker(marker::RFMT) {
            return true;
        }
        if line.has_marker(marker::MFMT) || line.has_marker(marker::MOL) {
            return false;
        }
    }
    false
}

/// Leading slice of at most [`MAX_SCAN_BYTES`], cut on a char boundary.
fn scan_window(text: &str) -> &str {
    if text.len() <= MAX_SCAN_BYTES {
        return text;
    }
    let mut end = MAX_SCAN_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
