// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The scanner: converts source text into a stream of classified tokens.
//!
//! Scanning is byte-oriented and strictly sequential. The cursor exposes one
//! byte of lookahead (`peek`), which is all the grammar ever needs: every
//! two-character operator is resolved by peeking exactly one byte and either
//! consuming it or leaving it for the next dispatch step. `peek2` exists
//! solely to spot the `*/` that closes a block comment.
//!
//! Each dispatch step consumes at least one byte and appends at most one
//! token. Whitespace appends none; comments and preprocessor directives are
//! appended as trivia tokens rather than dropped.
//!
//! # Errors
//!
//! The scanner stops at the first malformed construct — an exponent with no
//! digits, an empty or unterminated character literal, or a capture
//! exceeding the configured [`ScanLimits`] — and returns a [`ScanError`].
//! There is no resynchronisation; the caller owns the decision to halt.

use ecow::EcoString;

use super::keywords;
use super::{ScanError, Span, Token, TokenKind, TokenStream};

/// Capture bounds applied to every textual token.
///
/// Exceeding a bound fails the whole scan; there is no token splitting or
/// streaming fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Maximum byte length of any textual capture other than a character
    /// literal: identifiers, numbers, strings, comments, and directives.
    pub max_token_len: usize,
    /// Maximum byte length of a character literal's content.
    pub max_char_len: usize,
}

impl ScanLimits {
    /// Default bound for general captures.
    pub const DEFAULT_MAX_TOKEN_LEN: usize = 255;
    /// Default bound for character literal content.
    pub const DEFAULT_MAX_CHAR_LEN: usize = 9;
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_token_len: Self::DEFAULT_MAX_TOKEN_LEN,
            max_char_len: Self::DEFAULT_MAX_CHAR_LEN,
        }
    }
}

/// A scanner over C-like source text.
///
/// The lexer implements [`Iterator`] yielding `Result<Token, ScanError>`;
/// after the first error it yields nothing further. [`Lexer::scan`] runs the
/// iterator to exhaustion and collects into a [`TokenStream`].
///
/// # Examples
///
/// ```
/// use cedar_core::source_analysis::{Lexer, TokenKind};
///
/// let tokens: Result<Vec<_>, _> = Lexer::new("a == b").collect();
/// let tokens = tokens.unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].text(), "==");
/// ```
#[derive(Debug)]
pub struct Lexer<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// Current byte position in `source`.
    pos: usize,
    /// Current 1-based line, advanced on every consumed `\n`.
    line: u32,
    /// Capture bounds.
    limits: ScanLimits,
    /// Set after an error; the iterator is fused from then on.
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a scanner with the default capture limits.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_limits(source, ScanLimits::default())
    }

    /// Creates a scanner with custom capture limits.
    #[must_use]
    pub fn with_limits(source: &'src str, limits: ScanLimits) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            limits,
            failed: false,
        }
    }

    /// Runs the scanner to exhaustion, collecting tokens in scan order.
    pub fn scan(mut self) -> Result<TokenStream, ScanError> {
        let mut stream = TokenStream::new();
        while let Some(token) = self.next_token()? {
            stream.push(token);
        }
        Ok(stream)
    }

    /// Returns the current 1-based line number.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    // === Cursor ===

    /// Returns the next byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte after next without consuming anything.
    fn peek2(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Consumes and returns the next byte, counting newlines.
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
        }
        Some(byte)
    }

    /// Consumes bytes while the predicate holds.
    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Extracts source text between two byte positions.
    fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// The span from `start` to the current position.
    fn span_from(&self, start: usize) -> Span {
        Span::from(start..self.pos)
    }

    /// Builds a token whose text is the matched symbol itself.
    fn symbol(&self, kind: TokenKind, text: &str, start: usize) -> Token {
        Token::new(kind, EcoString::from(text), self.span_from(start))
    }

    /// Fails the scan if a capture exceeded `limit`.
    fn check_capture(&self, len: usize, limit: usize, start: usize) -> Result<(), ScanError> {
        if len > limit {
            Err(ScanError::token_too_long(self.span_from(start), self.line))
        } else {
            Ok(())
        }
    }

    // === Dispatch ===

    /// Scans the next token, or `None` at end of input.
    ///
    /// The stream carries no end-of-input sentinel; exhaustion is signalled
    /// by `None` alone.
    fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        loop {
            let start = self.pos;
            let Some(byte) = self.advance() else {
                return Ok(None);
            };

            let token = match byte {
                b if b.is_ascii_whitespace() => continue,

                b'=' => {
                    if self.peek() == Some(b'=') {
                        self.advance();
                        self.symbol(TokenKind::Operator, "==", start)
                    } else {
                        self.symbol(TokenKind::Operator, "=", start)
                    }
                }

                b'<' => match self.peek() {
                    Some(b'<') => {
                        self.advance();
                        self.symbol(TokenKind::BitwiseOperator, "<<", start)
                    }
                    Some(b'=') => {
                        self.advance();
                        self.symbol(TokenKind::Operator, "<=", start)
                    }
                    _ => self.symbol(TokenKind::BitwiseOperator, "<", start),
                },

                b'>' => match self.peek() {
                    Some(b'>') => {
                        self.advance();
                        self.symbol(TokenKind::BitwiseOperator, ">>", start)
                    }
                    Some(b'=') => {
                        self.advance();
                        self.symbol(TokenKind::Operator, ">=", start)
                    }
                    _ => self.symbol(TokenKind::BitwiseOperator, ">", start),
                },

                b'!' => {
                    if self.peek() == Some(b'=') {
                        self.advance();
                        self.symbol(TokenKind::Operator, "!=", start)
                    } else {
                        self.symbol(TokenKind::LogicOperator, "!", start)
                    }
                }

                b'+' => match self.peek() {
                    Some(b'=') => {
                        self.advance();
                        self.symbol(TokenKind::AssignmentOperator, "+=", start)
                    }
                    Some(b'+') => {
                        self.advance();
                        self.symbol(TokenKind::AssignmentOperator, "++", start)
                    }
                    _ => self.symbol(TokenKind::AssignmentOperator, "+", start),
                },

                b'-' => match self.peek() {
                    Some(b'=') => {
                        self.advance();
                        self.symbol(TokenKind::AssignmentOperator, "-=", start)
                    }
                    Some(b'-') => {
                        self.advance();
                        self.symbol(TokenKind::AssignmentOperator, "--", start)
                    }
                    Some(b'>') => {
                        self.advance();
                        self.symbol(TokenKind::Arrow, "->", start)
                    }
                    _ => self.symbol(TokenKind::AssignmentOperator, "-", start),
                },

                b'*' => {
                    if self.peek() == Some(b'=') {
                        self.advance();
                        self.symbol(TokenKind::AssignmentOperator, "*=", start)
                    } else {
                        self.symbol(TokenKind::Operator, "*", start)
                    }
                }

                b'&' => match self.peek() {
                    Some(b'&') => {
                        self.advance();
                        self.symbol(TokenKind::LogicOperator, "&&", start)
                    }
                    Some(b'=') => {
                        self.advance();
                        self.symbol(TokenKind::AssignmentOperator, "&=", start)
                    }
                    _ => self.symbol(TokenKind::BitwiseOperator, "&", start),
                },

                b'|' => {
                    if self.peek() == Some(b'|') {
                        self.advance();
                        self.symbol(TokenKind::LogicOperator, "||", start)
                    } else {
                        self.symbol(TokenKind::BitwiseOperator, "|", start)
                    }
                }

                b'/' => match self.peek() {
                    Some(b'=') => {
                        self.advance();
                        self.symbol(TokenKind::Operator, "/=", start)
                    }
                    Some(b'/') => {
                        self.advance();
                        self.lex_line_comment(start)?
                    }
                    Some(b'*') => {
                        self.advance();
                        self.lex_block_comment(start)?
                    }
                    _ => self.symbol(TokenKind::Operator, "/", start),
                },

                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.lex_identifier(start)?,

                b'0'..=b'9' => self.lex_number(start)?,

                b'.' => {
                    if self.peek().is_some_and(|b| b.is_ascii_digit()) {
                        self.lex_leading_dot_float(start)?
                    } else {
                        self.symbol(TokenKind::Dot, ".", start)
                    }
                }

                b'\'' => self.lex_char_literal(start)?,

                b'"' => self.lex_string_literal(start)?,

                b'?' => {
                    if self.peek() == Some(b':') {
                        self.advance();
                        self.symbol(TokenKind::LogicOperator, "?:", start)
                    } else {
                        self.symbol(TokenKind::Operator, "?", start)
                    }
                }

                b'#' => self.lex_directive(start)?,

                b'`' => self.symbol(TokenKind::BitwiseOperator, "`", start),
                b'~' => self.symbol(TokenKind::BitwiseOperator, "~", start),
                b'^' => self.symbol(TokenKind::BitwiseOperator, "^", start),
                b';' => self.symbol(TokenKind::Semicolon, ";", start),
                b'(' => self.symbol(TokenKind::ParenOpen, "(", start),
                b')' => self.symbol(TokenKind::ParenClose, ")", start),
                b'{' => self.symbol(TokenKind::BraceOpen, "{", start),
                b'}' => self.symbol(TokenKind::BraceClose, "}", start),
                b'[' => self.symbol(TokenKind::BracketOpen, "[", start),
                b']' => self.symbol(TokenKind::BracketClose, "]", start),
                b',' => self.symbol(TokenKind::Comma, ",", start),
                b':' => self.symbol(TokenKind::Operator, ":", start),
                b'%' => self.symbol(TokenKind::Operator, "%", start),

                _ => self.symbol(TokenKind::Unknown, "unk", start),
            };

            return Ok(Some(token));
        }
    }

    // === Sub-scanners ===

    /// Scans an identifier or keyword. The leading byte is consumed.
    fn lex_identifier(&mut self, start: usize) -> Result<Token, ScanError> {
        self.advance_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.slice(start, self.pos);
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        Ok(Token::new(
            keywords::classify(text),
            EcoString::from(text),
            self.span_from(start),
        ))
    }

    /// Scans a numeric literal beginning with a digit.
    ///
    /// `10.` and `1.e5` are floats: the digits after the point may be empty,
    /// and the exponent may hang off either the integer or fractional part.
    fn lex_number(&mut self, start: usize) -> Result<Token, ScanError> {
        self.advance_while(|b| b.is_ascii_digit());

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            is_float = true;
            self.advance();
            self.advance_while(|b| b.is_ascii_digit());
        }
        if self.lex_exponent(start)? {
            is_float = true;
        }

        let text = self.slice(start, self.pos);
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        Ok(Token::new(kind, EcoString::from(text), self.span_from(start)))
    }

    /// Scans a float of the form `.5`. The dot is consumed and the next
    /// byte is known to be a digit.
    fn lex_leading_dot_float(&mut self, start: usize) -> Result<Token, ScanError> {
        self.advance_while(|b| b.is_ascii_digit());
        self.lex_exponent(start)?;

        let text = self.slice(start, self.pos);
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        Ok(Token::new(
            TokenKind::FloatLiteral,
            EcoString::from(text),
            self.span_from(start),
        ))
    }

    /// Consumes an exponent suffix (`e`/`E`, optional sign, digits) if one
    /// starts here. An exponent marker with no digit after it fails the scan.
    ///
    /// Returns whether an exponent was consumed.
    fn lex_exponent(&mut self, start: usize) -> Result<bool, ScanError> {
        if !matches!(self.peek(), Some(b'e' | b'E')) {
            return Ok(false);
        }
        self.advance();
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.advance();
        }
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(ScanError::malformed_float(self.span_from(start), self.line));
        }
        self.advance_while(|b| b.is_ascii_digit());
        Ok(true)
    }

    /// Scans a character literal. The opening quote is consumed.
    ///
    /// Content is taken verbatim — no escape interpretation, and more than
    /// one content byte is accepted. Empty content and end of input before
    /// the closing quote are errors.
    fn lex_char_literal(&mut self, start: usize) -> Result<Token, ScanError> {
        let content_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(ScanError::syntax(self.span_from(start), self.line)),
                Some(b'\'') => break,
                Some(_) => {
                    self.advance();
                }
            }
        }
        let content_end = self.pos;
        self.advance(); // closing quote

        let text = self.slice(content_start, content_end);
        if text.is_empty() {
            return Err(ScanError::syntax(self.span_from(start), self.line));
        }
        if text.len() > self.limits.max_char_len {
            return Err(ScanError::token_too_long(self.span_from(start), self.line));
        }
        Ok(Token::new(
            TokenKind::CharLiteral,
            EcoString::from(text),
            self.span_from(start),
        ))
    }

    /// Scans a string literal. The opening quote is consumed.
    ///
    /// A backslash and the byte following it are kept as two raw bytes, so a
    /// `\"` does not terminate the literal. Reaching end of input without a
    /// closing quote yields a complete token rather than an error.
    fn lex_string_literal(&mut self, start: usize) -> Result<Token, ScanError> {
        let content_start = self.pos;
        loop {
            match self.peek() {
                None | Some(b'"') => break,
                Some(b'\\') => {
                    self.advance();
                    if self.peek().is_some() {
                        self.advance();
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        let text = self.slice(content_start, self.pos);
        if self.peek() == Some(b'"') {
            self.advance();
        }
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        Ok(Token::new(
            TokenKind::StringLiteral,
            EcoString::from(text),
            self.span_from(start),
        ))
    }

    /// Scans a line comment. Both slashes are consumed; the captured text is
    /// everything up to (excluding) the next newline, which is consumed and
    /// counted.
    fn lex_line_comment(&mut self, start: usize) -> Result<Token, ScanError> {
        let content_start = self.pos;
        self.advance_while(|b| b != b'\n');
        let text = self.slice(content_start, self.pos);
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        let span = self.span_from(start);
        if self.peek() == Some(b'\n') {
            self.advance();
        }
        Ok(Token::new(TokenKind::Comment, EcoString::from(text), span))
    }

    /// Scans a block comment. The `/*` is consumed; the captured text is
    /// everything up to (excluding) the matching `*/`. An unterminated
    /// comment at end of input is kept as a comment token.
    fn lex_block_comment(&mut self, start: usize) -> Result<Token, ScanError> {
        let content_start = self.pos;
        loop {
            match self.peek() {
                None => break,
                Some(b'*') if self.peek2() == Some(b'/') => {
                    let text = self.slice(content_start, self.pos);
                    self.advance(); // *
                    self.advance(); // /
                    self.check_capture(text.len(), self.limits.max_token_len, start)?;
                    return Ok(Token::new(
                        TokenKind::Comment,
                        EcoString::from(text),
                        self.span_from(start),
                    ));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        let text = self.slice(content_start, self.pos);
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        Ok(Token::new(
            TokenKind::Comment,
            EcoString::from(text),
            self.span_from(start),
        ))
    }

    /// Scans a preprocessor directive. The `#` is consumed and included in
    /// the captured text along with the remainder of the line, verbatim.
    /// The terminating newline is consumed and counted.
    fn lex_directive(&mut self, start: usize) -> Result<Token, ScanError> {
        self.advance_while(|b| b != b'\n');
        let text = self.slice(start, self.pos);
        self.check_capture(text.len(), self.limits.max_token_len, start)?;
        let span = self.span_from(start);
        if self.peek() == Some(b'\n') {
            self.advance();
        }
        Ok(Token::new(
            TokenKind::Preprocessor,
            EcoString::from(text),
            span,
        ))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Convenience function to scan source into a [`TokenStream`].
pub fn scan(source: &str) -> Result<TokenStream, ScanError> {
    Lexer::new(source).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::ErrorKind;

    /// Helper to scan and extract `(kind, text)` pairs.
    fn scan_pairs(source: &str) -> Vec<(TokenKind, String)> {
        scan(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    /// Helper asserting a scan fails with the given error kind.
    fn scan_err(source: &str) -> ErrorKind {
        scan(source).unwrap_err().kind
    }

    #[test]
    fn whitespace_only_input_yields_empty_stream() {
        assert!(scan("").unwrap().is_empty());
        assert!(scan("   \t  ").unwrap().is_empty());
        assert!(scan(" \t\r\n \n\t ").unwrap().is_empty());
    }

    #[test]
    fn simple_statement() {
        assert_eq!(
            scan_pairs("x = 1;"),
            vec![
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Operator, "=".into()),
                (TokenKind::IntLiteral, "1".into()),
                (TokenKind::Semicolon, ";".into()),
            ]
        );
    }

    #[test]
    fn maximal_munch_prefers_two_byte_operators() {
        assert_eq!(
            scan_pairs("a == b"),
            vec![
                (TokenKind::Identifier, "a".into()),
                (TokenKind::Operator, "==".into()),
                (TokenKind::Identifier, "b".into()),
            ]
        );
    }

    #[test]
    fn assignment_family() {
        for text in ["+", "++", "+=", "-", "--", "-=", "*=", "&="] {
            let pairs = scan_pairs(text);
            assert_eq!(
                pairs,
                vec![(TokenKind::AssignmentOperator, text.to_string())],
                "{text}"
            );
        }
    }

    #[test]
    fn general_operators() {
        for text in ["=", "==", "!=", "<=", ">=", "/", "/=", "*", "?", "%", ":"] {
            let pairs = scan_pairs(text);
            assert_eq!(pairs, vec![(TokenKind::Operator, text.to_string())], "{text}");
        }
    }

    #[test]
    fn bitwise_operators() {
        for text in ["&", "|", "<<", ">>", "<", ">", "^", "~", "`"] {
            let pairs = scan_pairs(text);
            assert_eq!(
                pairs,
                vec![(TokenKind::BitwiseOperator, text.to_string())],
                "{text}"
            );
        }
    }

    #[test]
    fn logic_operators() {
        for text in ["&&", "||", "!", "?:"] {
            let pairs = scan_pairs(text);
            assert_eq!(
                pairs,
                vec![(TokenKind::LogicOperator, text.to_string())],
                "{text}"
            );
        }
    }

    #[test]
    fn arrow_and_punctuation() {
        assert_eq!(
            scan_pairs("p->x, s.f; ( ) { } [ ]"),
            vec![
                (TokenKind::Identifier, "p".into()),
                (TokenKind::Arrow, "->".into()),
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Comma, ",".into()),
                (TokenKind::Identifier, "s".into()),
                (TokenKind::Dot, ".".into()),
                (TokenKind::Identifier, "f".into()),
                (TokenKind::Semicolon, ";".into()),
                (TokenKind::ParenOpen, "(".into()),
                (TokenKind::ParenClose, ")".into()),
                (TokenKind::BraceOpen, "{".into()),
                (TokenKind::BraceClose, "}".into()),
                (TokenKind::BracketOpen, "[".into()),
                (TokenKind::BracketClose, "]".into()),
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            scan_pairs("int main return whiles _x"),
            vec![
                (TokenKind::Keyword, "int".into()),
                (TokenKind::Identifier, "main".into()),
                (TokenKind::Keyword, "return".into()),
                (TokenKind::Identifier, "whiles".into()),
                (TokenKind::Identifier, "_x".into()),
            ]
        );
    }

    #[test]
    fn integer_literals() {
        assert_eq!(
            scan_pairs("0 42 123"),
            vec![
                (TokenKind::IntLiteral, "0".into()),
                (TokenKind::IntLiteral, "42".into()),
                (TokenKind::IntLiteral, "123".into()),
            ]
        );
    }

    #[test]
    fn float_literals() {
        for text in ["1.5", ".5", "10.", "1e5", "1.5e-3", "1.e5", "2E+10"] {
            let pairs = scan_pairs(text);
            assert_eq!(
                pairs,
                vec![(TokenKind::FloatLiteral, text.to_string())],
                "{text}"
            );
        }
    }

    #[test]
    fn exponent_scans_as_one_lexeme() {
        assert_eq!(
            scan_pairs("1.5e-3"),
            vec![(TokenKind::FloatLiteral, "1.5e-3".into())]
        );
    }

    #[test]
    fn adjacent_floats_split_at_second_dot() {
        assert_eq!(
            scan_pairs("1.5.6"),
            vec![
                (TokenKind::FloatLiteral, "1.5".into()),
                (TokenKind::FloatLiteral, ".6".into()),
            ]
        );
    }

    #[test]
    fn exponent_without_digits_fails() {
        assert_eq!(scan_err("1.5e"), ErrorKind::MalformedFloat);
        assert_eq!(scan_err("1e"), ErrorKind::MalformedFloat);
        assert_eq!(scan_err("1e+"), ErrorKind::MalformedFloat);
        assert_eq!(scan_err(".5e-"), ErrorKind::MalformedFloat);
        assert_eq!(scan_err("1etc"), ErrorKind::MalformedFloat);
    }

    #[test]
    fn exponent_error_does_not_continue_scanning() {
        let mut lexer = Lexer::new("1.5e x");
        assert!(lexer.next().is_some_and(|r| r.is_err()));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn char_literals_take_content_verbatim() {
        assert_eq!(
            scan_pairs("'a'"),
            vec![(TokenKind::CharLiteral, "a".into())]
        );
        // Multi-byte content is accepted, not rejected
        assert_eq!(
            scan_pairs("'ab'"),
            vec![(TokenKind::CharLiteral, "ab".into())]
        );
        // Escapes are not decoded
        assert_eq!(
            scan_pairs(r"'\n'"),
            vec![(TokenKind::CharLiteral, r"\n".into())]
        );
    }

    #[test]
    fn empty_char_literal_fails() {
        assert_eq!(scan_err("''"), ErrorKind::Syntax);
    }

    #[test]
    fn unterminated_char_literal_fails() {
        assert_eq!(scan_err("'a"), ErrorKind::Syntax);
        assert_eq!(scan_err("'"), ErrorKind::Syntax);
    }

    #[test]
    fn char_literal_length_bound() {
        assert_eq!(
            scan_pairs("'123456789'"),
            vec![(TokenKind::CharLiteral, "123456789".into())]
        );
        assert_eq!(scan_err("'1234567890'"), ErrorKind::TokenTooLong);
    }

    #[test]
    fn string_literals() {
        assert_eq!(
            scan_pairs("\"hello\""),
            vec![(TokenKind::StringLiteral, "hello".into())]
        );
        assert_eq!(
            scan_pairs("\"\""),
            vec![(TokenKind::StringLiteral, String::new())]
        );
    }

    #[test]
    fn string_escapes_are_preserved_raw() {
        // \" does not terminate; both bytes are kept verbatim
        assert_eq!(
            scan_pairs(r#""a\"b""#),
            vec![(TokenKind::StringLiteral, r#"a\"b"#.into())]
        );
        assert_eq!(
            scan_pairs(r#""line\nbreak""#),
            vec![(TokenKind::StringLiteral, r"line\nbreak".into())]
        );
    }

    #[test]
    fn unterminated_string_is_accepted_whole() {
        // Unlike character literals, a string hitting end of input is kept.
        assert_eq!(
            scan_pairs("\"abc"),
            vec![(TokenKind::StringLiteral, "abc".into())]
        );
    }

    #[test]
    fn line_comment_captures_body_and_counts_newline() {
        let mut lexer = Lexer::new("// hi\nx");
        let tokens: Vec<Token> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Comment);
        assert_eq!(tokens[0].text(), " hi");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].text(), "x");
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn empty_line_comment() {
        assert_eq!(
            scan_pairs("//\nx"),
            vec![
                (TokenKind::Comment, String::new()),
                (TokenKind::Identifier, "x".into()),
            ]
        );
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(
            scan_pairs("// trailing"),
            vec![(TokenKind::Comment, " trailing".into())]
        );
    }

    #[test]
    fn block_comment_captures_body_excluding_terminator() {
        let mut lexer = Lexer::new("/* a\nb */ x");
        let tokens: Vec<Token> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Comment);
        assert_eq!(tokens[0].text(), " a\nb ");
        assert_eq!(tokens[1].text(), "x");
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn unterminated_block_comment_is_kept() {
        assert_eq!(
            scan_pairs("/* abc"),
            vec![(TokenKind::Comment, " abc".into())]
        );
    }

    #[test]
    fn directive_captures_hash_and_line_verbatim() {
        let mut lexer = Lexer::new("#include <stdio.h>\nint x;");
        let tokens: Vec<Token> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Preprocessor);
        assert_eq!(tokens[0].text(), "#include <stdio.h>");
        assert_eq!(tokens[1].kind(), TokenKind::Keyword);
        assert_eq!(tokens[1].text(), "int");
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn directive_at_end_of_input() {
        assert_eq!(
            scan_pairs("#define N 10"),
            vec![(TokenKind::Preprocessor, "#define N 10".into())]
        );
    }

    #[test]
    fn unknown_bytes_become_placeholder_tokens() {
        assert_eq!(
            scan_pairs("@"),
            vec![(TokenKind::Unknown, "unk".into())]
        );
        assert_eq!(
            scan_pairs("x $ y"),
            vec![
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Unknown, "unk".into()),
                (TokenKind::Identifier, "y".into()),
            ]
        );
    }

    #[test]
    fn no_end_of_input_sentinel_is_appended() {
        let stream = scan("x").unwrap();
        assert_eq!(stream.len(), 1);
        assert!(stream.iter().all(|t| !t.kind().is_eof()));
    }

    #[test]
    fn newlines_advance_the_line_counter() {
        let mut lexer = Lexer::new("x\ny\nz");
        let tokens: Vec<Token> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(lexer.line(), 3);
    }

    #[test]
    fn newlines_inside_strings_are_counted() {
        let mut lexer = Lexer::new("\"a\nb\"");
        let tokens: Vec<Token> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens[0].text(), "a\nb");
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn error_lines_are_one_based_and_accurate() {
        let err = scan("x;\ny;\n1.5e").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedFloat);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn identifier_length_bound_is_enforced() {
        let long = "a".repeat(256);
        assert_eq!(scan_err(&long), ErrorKind::TokenTooLong);
        let ok = "a".repeat(255);
        assert_eq!(scan_pairs(&ok), vec![(TokenKind::Identifier, ok.clone())]);
    }

    #[test]
    fn custom_limits_are_respected() {
        let limits = ScanLimits {
            max_token_len: 4,
            max_char_len: 1,
        };
        let err = Lexer::with_limits("abcde", limits).scan().unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenTooLong);

        let err = Lexer::with_limits("'ab'", limits).scan().unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenTooLong);

        let stream = Lexer::with_limits("abcd 'a'", limits).scan().unwrap();
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn tokens_appear_in_source_order() {
        let stream = scan("int a = b + 1; // done").unwrap();
        let mut last_end = 0;
        for token in stream.iter() {
            assert!(token.span().start() >= last_end, "{token}");
            last_end = token.span().end();
        }
    }

    #[test]
    fn growth_past_initial_capacity_preserves_order() {
        let stream = scan("a b c d e f g h i j k").unwrap();
        assert_eq!(stream.len(), 11);
        let texts: Vec<&str> = stream.iter().map(Token::text).collect();
        assert_eq!(
            texts,
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
        );
    }

    #[test]
    fn representative_program() {
        let source = "#include <stdio.h>\n\
                      int main(void) {\n\
                      \x20   float f = .5e2; /* scale */\n\
                      \x20   return f >= 0 ? 1 : 0;\n\
                      }\n";
        let pairs = scan_pairs(source);
        let kinds: Vec<TokenKind> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Preprocessor,
                TokenKind::Keyword,    // int
                TokenKind::Identifier, // main
                TokenKind::ParenOpen,
                TokenKind::Keyword, // void
                TokenKind::ParenClose,
                TokenKind::BraceOpen,
                TokenKind::Keyword,    // float
                TokenKind::Identifier, // f
                TokenKind::Operator,   // =
                TokenKind::FloatLiteral,
                TokenKind::Semicolon,
                TokenKind::Comment,
                TokenKind::Keyword,    // return
                TokenKind::Identifier, // f
                TokenKind::Operator,   // >=
                TokenKind::IntLiteral, // 0
                TokenKind::Operator,   // ?
                TokenKind::IntLiteral, // 1
                TokenKind::Operator,   // :
                TokenKind::IntLiteral, // 0
                TokenKind::Semicolon,
                TokenKind::BraceClose,
            ]
        );
    }
}
