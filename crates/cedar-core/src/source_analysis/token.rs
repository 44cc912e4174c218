// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Cedar lexical analysis.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] classifying the lexeme
//! - The captured lexeme text, owned by the token
//! - A [`Span`] giving its byte range in the source
//!
//! For structural tokens the text equals the matched symbol (`"=="`, `";"`);
//! for literals, identifiers, comments, and directives it is the captured
//! content. Comments and preprocessor directives are *trivia*: they carry no
//! grammatical weight but are preserved in the stream.
//!
//! # Canonical Names
//!
//! Every kind has a stable canonical name (`TOKEN_IDENTIFIER`, ...) used in
//! the printed token listing. These names, and the `<KIND> : <TEXT>` line
//! format produced by [`Token`]'s `Display`, are the externally observable
//! output contract of the scanner.

use ecow::EcoString;

use super::Span;

/// The kind of token, not including the lexeme text or source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the token stream. Declared for the parser's benefit; the
    /// scanner itself never emits one — a finished stream simply ends.
    Eof,

    /// A byte no scanning rule recognises. Carries the placeholder text
    /// `unk` rather than the offending byte.
    Unknown,

    // === Literals ===
    /// An integer literal: `42`, `123`
    IntLiteral,

    /// A floating-point literal: `123.45`, `.5`, `10.`, `1.5e-3`
    FloatLiteral,

    /// A character literal: the content between single quotes, verbatim.
    /// Multi-byte content (`'ab'`) is accepted; escapes are not decoded.
    CharLiteral,

    /// A string literal: the content between double quotes. A backslash and
    /// the byte following it are preserved as two raw bytes, never decoded.
    StringLiteral,

    // === Names ===
    /// A preprocessor directive: the leading `#` and the remainder of the
    /// line, captured verbatim and never interpreted.
    Preprocessor,

    /// An identifier: `main`, `x`, `my_var`
    Identifier,

    /// One of the 32 reserved words: `return`, `int`, `if`, `while`, ...
    Keyword,

    // === Operators ===
    /// Assignment-family operator: `+`, `++`, `+=`, `-`, `--`, `-=`, `*=`, `&=`
    AssignmentOperator,

    /// General operator: `=`, `==`, `!=`, `<=`, `>=`, `/`, `/=`, `*`, `?`, `%`, `:`
    Operator,

    /// Bitwise operator: `&`, `|`, `<<`, `>>`, `<`, `>`, `^`, `~`, `` ` ``
    BitwiseOperator,

    /// Logical operator: `&&`, `||`, `!`, `?:`
    LogicOperator,

    // === Punctuation ===
    /// Member access dot: `.`
    Dot,

    /// Comma: `,`
    Comma,

    /// Statement terminator: `;`
    Semicolon,

    /// Struct pointer access: `->`
    Arrow,

    /// Left parenthesis: `(`
    ParenOpen,

    /// Right parenthesis: `)`
    ParenClose,

    /// Left brace: `{`
    BraceOpen,

    /// Right brace: `}`
    BraceClose,

    /// Left bracket: `[`
    BracketOpen,

    /// Right bracket: `]`
    BracketClose,

    // === Trivia ===
    /// A line or block comment body (delimiters excluded).
    Comment,
}

impl TokenKind {
    /// Returns the canonical name of this kind as printed in token listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "TOKEN_EOF",
            Self::Unknown => "TOKEN_UNKNOWN",
            Self::IntLiteral => "TOKEN_INT_LITERAL",
            Self::FloatLiteral => "TOKEN_FLOAT_LITERAL",
            Self::CharLiteral => "TOKEN_CHAR_LITERAL",
            Self::StringLiteral => "TOKEN_STRING_LITERAL",
            Self::Preprocessor => "TOKEN_PREPROCESSOR",
            Self::Identifier => "TOKEN_IDENTIFIER",
            Self::Keyword => "TOKEN_KEYWORD",
            Self::AssignmentOperator => "TOKEN_ASSIGNMENT_OPERATOR",
            Self::Operator => "TOKEN_OPERATOR",
            Self::BitwiseOperator => "TOKEN_BITWISE_OPERATOR",
            Self::LogicOperator => "TOKEN_LOGIC_OPERATOR",
            Self::Dot => "TOKEN_DOT",
            Self::Comma => "TOKEN_COMMA",
            Self::Semicolon => "TOKEN_SEMICOLON",
            Self::Arrow => "TOKEN_ARROW",
            Self::ParenOpen => "TOKEN_PAREN_OPEN",
            Self::ParenClose => "TOKEN_PAREN_CLOSE",
            Self::BraceOpen => "TOKEN_BRACE_OPEN",
            Self::BraceClose => "TOKEN_BRACE_CLOSE",
            Self::BracketOpen => "TOKEN_BRACKET_OPEN",
            Self::BracketClose => "TOKEN_BRACKET_CLOSE",
            Self::Comment => "TOKEN_COMMENT",
        }
    }

    /// Returns `true` if this token is a literal value.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLiteral | Self::FloatLiteral | Self::CharLiteral | Self::StringLiteral
        )
    }

    /// Returns `true` if this token is an operator of any family.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::AssignmentOperator
                | Self::Operator
                | Self::BitwiseOperator
                | Self::LogicOperator
        )
    }

    /// Returns `true` if this token is trivia (comments and directives):
    /// preserved in the stream, but carrying no grammatical weight.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Comment | Self::Preprocessor)
    }

    /// Returns `true` if this is the end-of-stream marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit: a classified lexeme with its source location.
///
/// The token exclusively owns its text; the stream in turn exclusively owns
/// its tokens. No sharing or reference counting is involved anywhere in the
/// scanner.
///
/// # Examples
///
/// ```
/// use cedar_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "foo".into(), Span::new(0, 3));
/// assert_eq!(token.kind(), TokenKind::Identifier);
/// assert_eq!(token.text(), "foo");
/// assert_eq!(token.to_string(), "TOKEN_IDENTIFIER : foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: EcoString,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: EcoString, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the captured lexeme text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the token and returns its text.
    #[must_use]
    pub fn into_text(self) -> EcoString {
        self.text
    }

    /// Returns the byte range of the lexeme in the source.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.kind.name(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(TokenKind::Eof.name(), "TOKEN_EOF");
        assert_eq!(TokenKind::Unknown.name(), "TOKEN_UNKNOWN");
        assert_eq!(TokenKind::IntLiteral.name(), "TOKEN_INT_LITERAL");
        assert_eq!(TokenKind::FloatLiteral.name(), "TOKEN_FLOAT_LITERAL");
        assert_eq!(TokenKind::CharLiteral.name(), "TOKEN_CHAR_LITERAL");
        assert_eq!(TokenKind::StringLiteral.name(), "TOKEN_STRING_LITERAL");
        assert_eq!(TokenKind::Preprocessor.name(), "TOKEN_PREPROCESSOR");
        assert_eq!(TokenKind::Identifier.name(), "TOKEN_IDENTIFIER");
        assert_eq!(TokenKind::Keyword.name(), "TOKEN_KEYWORD");
        assert_eq!(
            TokenKind::AssignmentOperator.name(),
            "TOKEN_ASSIGNMENT_OPERATOR"
        );
        assert_eq!(TokenKind::Operator.name(), "TOKEN_OPERATOR");
        assert_eq!(TokenKind::BitwiseOperator.name(), "TOKEN_BITWISE_OPERATOR");
        assert_eq!(TokenKind::LogicOperator.name(), "TOKEN_LOGIC_OPERATOR");
        assert_eq!(TokenKind::Dot.name(), "TOKEN_DOT");
        assert_eq!(TokenKind::Comma.name(), "TOKEN_COMMA");
        assert_eq!(TokenKind::Semicolon.name(), "TOKEN_SEMICOLON");
        assert_eq!(TokenKind::Arrow.name(), "TOKEN_ARROW");
        assert_eq!(TokenKind::ParenOpen.name(), "TOKEN_PAREN_OPEN");
        assert_eq!(TokenKind::ParenClose.name(), "TOKEN_PAREN_CLOSE");
        assert_eq!(TokenKind::BraceOpen.name(), "TOKEN_BRACE_OPEN");
        assert_eq!(TokenKind::BraceClose.name(), "TOKEN_BRACE_CLOSE");
        assert_eq!(TokenKind::BracketOpen.name(), "TOKEN_BRACKET_OPEN");
        assert_eq!(TokenKind::BracketClose.name(), "TOKEN_BRACKET_CLOSE");
        assert_eq!(TokenKind::Comment.name(), "TOKEN_COMMENT");
    }

    #[test]
    fn token_kind_predicates() {
        assert!(TokenKind::IntLiteral.is_literal());
        assert!(TokenKind::StringLiteral.is_literal());
        assert!(!TokenKind::Identifier.is_literal());

        assert!(TokenKind::Operator.is_operator());
        assert!(TokenKind::BitwiseOperator.is_operator());
        assert!(!TokenKind::Semicolon.is_operator());

        assert!(TokenKind::Comment.is_trivia());
        assert!(TokenKind::Preprocessor.is_trivia());
        assert!(!TokenKind::Keyword.is_trivia());

        assert!(TokenKind::Eof.is_eof());
        assert!(!TokenKind::Unknown.is_eof());
    }

    #[test]
    fn token_display_is_the_listing_line() {
        let token = Token::new(TokenKind::Keyword, "return".into(), Span::new(0, 6));
        assert_eq!(token.to_string(), "TOKEN_KEYWORD : return");

        // An empty comment still renders the separator
        let token = Token::new(TokenKind::Comment, "".into(), Span::new(0, 2));
        assert_eq!(token.to_string(), "TOKEN_COMMENT : ");
    }

    #[test]
    fn token_accessors() {
        let token = Token::new(TokenKind::Operator, "==".into(), Span::new(4, 6));
        assert_eq!(token.kind(), TokenKind::Operator);
        assert_eq!(token.text(), "==");
        assert_eq!(token.span(), Span::new(4, 6));
        assert_eq!(token.into_text(), "==");
    }
}
