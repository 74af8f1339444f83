/*!
# Text Decoder

Byte-level tokenizer for the graph and name file formats. Tokens are runs of non-whitespace
bytes; whitespace is ASCII whitespace as in C's `isspace`. All functions work on a byte buffer
and a cursor position and never read past the end of the buffer.

Numeric tokens are decoded permissively: a token without leading digits decodes to `0`
(flagged as coerced), trailing garbage after the digits is ignored.
*/

/// Returns *true* for the bytes C's `isspace` accepts in the "C" locale
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Advances past the non-whitespace run starting at `pos` and then past the following
/// whitespace. Returns the new position and whether a line break was consumed.
pub fn next_token_boundary(buf: &[u8], pos: usize) -> (usize, bool) {
    let mut i = pos.min(buf.len());
    while i < buf.len() && !is_space(buf[i]) {
        i += 1;
    }

    skip_whitespace(buf, i)
}

/// Advances past the whitespace starting at `pos`.
/// Returns the new position and whether a line break was consumed.
pub fn skip_whitespace(buf: &[u8], pos: usize) -> (usize, bool) {
    let mut i = pos.min(buf.len());
    let mut crossed_line_break = false;
    while i < buf.len() && is_space(buf[i]) {
        crossed_line_break |= buf[i] == b'\n';
        i += 1;
    }
    (i, crossed_line_break)
}

/// Parses a string enclosed in double quotes starting at `pos`.
///
/// Returns the contents and the position right after the closing quote, or `None` if `buf[pos]`
/// is not a quote or the closing quote is missing. Invalid UTF-8 is replaced lossily.
pub fn parse_quoted_string(buf: &[u8], pos: usize) -> Option<(String, usize)> {
    if buf.get(pos) != Some(&b'"') {
        return None;
    }

    let start = pos + 1;
    let len = buf[start..].iter().position(|&b| b == b'"')?;
    let text = String::from_utf8_lossy(&buf[start..start + len]).into_owned();

    Some((text, start + len + 1))
}

/// A decoded integer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInt {
    /// The decoded value (saturated to the range of `i64`)
    pub value: i64,
    /// *true* if the token did not start with a number and was decoded as `0`
    pub coerced: bool,
}

/// Decodes the integer at `pos` with the semantics of C's `atoi`: leading whitespace is skipped,
/// an optional sign is accepted and decimal digits are read up to the first non-digit.
pub fn parse_integer(buf: &[u8], pos: usize) -> ParsedInt {
    let (mut i, _) = skip_whitespace(buf, pos);

    let negative = match buf.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits = buf[i.min(buf.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .map(|&b| (b - b'0') as i64);

    let mut value: i64 = 0;
    let mut coerced = true;
    for digit in digits {
        coerced = false;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    ParsedInt { value, coerced }
}

/// Convenience wrapper around a buffer and a position into it.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the start of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current position in the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns *true* if there are no bytes left
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Returns *true* if the cursor is at the end or at the end of the current line
    pub fn is_at_line_end(&self) -> bool {
        matches!(self.buf.get(self.pos), None | Some(b'\n') | Some(b'\r'))
    }

    /// Skips whitespace and returns whether a line break was consumed
    pub fn skip_whitespace(&mut self) -> bool {
        let (pos, crossed) = skip_whitespace(self.buf, self.pos);
        self.pos = pos;
        crossed
    }

    /// Moves to the next token and returns whether a line break was crossed
    pub fn advance(&mut self) -> bool {
        let (pos, crossed) = next_token_boundary(self.buf, self.pos);
        self.pos = pos;
        crossed
    }

    /// Moves to the first token of the next line (or the end of the buffer)
    pub fn skip_line(&mut self) {
        while !self.is_at_end() && !self.advance() {}
    }

    /// Decodes the integer at the current position without moving
    pub fn integer(&self) -> ParsedInt {
        parse_integer(self.buf, self.pos)
    }

    /// Parses a quoted string at the current position and moves past its closing quote.
    /// The cursor does not move if no string could be parsed.
    pub fn quoted_string(&mut self) -> Option<String> {
        let (text, pos) = parse_quoted_string(self.buf, self.pos)?;
        self.pos = pos;
        Some(text)
    }

    /// Returns the rest of the current line (without the line break) and moves to the first
    /// token of the next line
    pub fn rest_of_line(&mut self) -> &'a [u8] {
        let start = self.pos;
        let end = self.buf[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.buf.len(), |i| start + i);

        self.pos = end;
        self.skip_whitespace();
        &self.buf[start..end]
    }
}
