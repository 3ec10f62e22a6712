use memchr::memchr_iter;

/// Splits `input` on `\n` and `\r\n`, skipping lines that are empty or
/// whitespace-only. A `\r` that is not followed by `\n` stays in the line.
pub fn content_lines(input: &str) -> impl Iterator<Item = &str> {
    RawLines::new(input).filter(|line| !is_blank(line))
}

pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Whitespace as INI files from web tooling and Windows editors see it: the
/// Unicode white space set plus the byte order mark U+FEFF, minus NEL (U+0085).
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

struct RawLines<'a> {
    input: &'a str,
    newlines: memchr::Memchr<'a>,
    start: usize,
    finished: bool,
}

impl<'a> RawLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            newlines: memchr_iter(b'\n', input.as_bytes()),
            start: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }
        let line = match self.newlines.next() {
            Some(idx) => {
                let line = &self.input[self.start..idx];
                self.start = idx + 1;
                line.strip_suffix('\r').unwrap_or(line)
            }
            None => {
                self.finished = true;
                &self.input[self.start..]
            }
        };
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<&str> {
        content_lines(input).collect()
    }

    #[test]
    fn splits_lf_and_crlf() {
        assert_eq!(collect("a\nb\r\nc"), ["a", "b", "c"]);
        assert_eq!(collect("a\r\nb\r\n"), ["a", "b"]);
    }

    #[test]
    fn drops_blank_lines() {
        assert_eq!(collect("\n  \n\t\na\n \u{a0}\n\nb\n\n"), ["a", "b"]);
        assert!(collect("").is_empty());
        assert!(collect("\r\n\r\n").is_empty());
    }

    #[test]
    fn byte_order_mark_counts_as_space() {
        assert!(is_space('\u{feff}'));
        assert_eq!(collect("\u{feff}\na\n\u{feff} \u{feff}"), ["a"]);
        assert_eq!(trim_space("\u{feff}key "), "key");
    }

    #[test]
    fn next_line_is_not_space() {
        assert!(!is_space('\u{85}'));
        assert_eq!(collect("\u{85}\n \n"), ["\u{85}"]);
        assert_eq!(trim_space(" \u{85} "), "\u{85}");
    }

    #[test]
    fn keeps_lone_carriage_return() {
        assert_eq!(collect("a\rb\nc\r"), ["a\rb", "c\r"]);
    }

    #[test]
    fn preserves_surrounding_whitespace() {
        assert_eq!(collect("  key = v  \n"), ["  key = v  "]);
    }
}
