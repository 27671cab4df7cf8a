//! File I/O utilities for reading input lines and game record files.
//!
//! - Reading from stdin (interactive input)
//! - Reading text files with automatic .zst decompression
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use hundredandten_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a text file, decompressing it first when the path ends with ".zst".
/// A leading UTF-8 BOM is stripped.
///
/// # Example
///
/// ```rust,no_run
/// # use hundredandten_cli::io_utils::read_text_auto;
///
/// let content = read_text_auto("games.jsonl").unwrap();
/// let compressed = read_text_auto("games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> std::io::Result<String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path)?;
        let dec = zstd::stream::decode_all(comp.as_slice())?;
        String::from_utf8(dec).map_err(std::io::Error::other)?
    } else {
        std::fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Non-blank lines of a JSONL document, paired with their 1-based line numbers.
pub fn jsonl_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
