//! Line-oriented text helpers over a full document

use tower_lsp::lsp_types::Position;

/// Returns the text of `line` without its terminator, or `None` past the end of the document.
pub fn line_at(content: &str, line: usize) -> Option<&str> {
    content.lines().nth(line)
}

/// Returns the text on the cursor's line from column 0 up to the cursor.
///
/// `position.character` is counted in UTF-16 code units, the LSP default
/// position encoding. A character offset past the end of the line yields the
/// whole line; a line past the end of the document yields an empty string.
pub fn text_before_cursor(content: &str, position: Position) -> String {
    let Some(line) = line_at(content, position.line as usize) else {
        return String::new();
    };

    let end = utf16_offset_to_byte(line, position.character as usize);
    line[..end].to_string()
}

fn utf16_offset_to_byte(line: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in line.char_indices() {
        if units >= utf16_offset {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    line.len()
}
