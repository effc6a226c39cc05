use std::io::Read;

use memchr::memchr_iter;
use tracing::debug;

use crate::error::{Result, UniqError};

/// Read the whole input and split it into lines.
///
/// Lines end at `\n`; one trailing `\r` is dropped. A final line without a
/// newline is kept, the empty remainder after a final newline is not.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(UniqError::Read)?;
    let lines = split_lines(&buf);
    debug!(bytes = buf.len(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Split a byte buffer into lines, see [`read_lines`].
pub fn split_lines(buf: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;

    for end in memchr_iter(b'\n', buf) {
        lines.push(decode_line(&buf[start..end]));
        start = end + 1;
    }
    if start < buf.len() {
        lines.push(decode_line(&buf[start..]));
    }

    lines
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines() {
        assert_eq!(split_lines(b"a\nb\nc\n"), ["a", "b", "c"]);
    }

    #[test]
    fn keeps_unterminated_last_line() {
        assert_eq!(split_lines(b"a\nb"), ["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(split_lines(b"\n\na\n"), ["", "", "a"]);
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(split_lines(b"a\r\nb\r\n"), ["a", "b"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let lines = split_lines(b"ok\n\xff\n");
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "\u{fffd}");
    }

    #[test]
    fn read_lines_from_reader() {
        let lines = read_lines(&b"x\nx\ny\n"[..]).unwrap();
        assert_eq!(lines, ["x", "x", "y"]);
    }
}
