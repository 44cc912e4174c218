// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by every stage of the Cedar pipeline.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics and
//! integrate with [`miette`] for rich error reporting. The scanner threads
//! them up as ordinary `Result` values; only the top-level driver decides to
//! halt, so the scanner can later be embedded in a long-lived process.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// Classification of every failure the front end can report.
///
/// The scanner raises only [`TokenTooLong`](ErrorKind::TokenTooLong),
/// [`MalformedFloat`](ErrorKind::MalformedFloat), and
/// [`Syntax`](ErrorKind::Syntax); the remaining kinds belong to the driver
/// or are reserved for the parser stage so the taxonomy stays uniform
/// across the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum ErrorKind {
    /// A textual capture exceeded the configured length bound.
    #[error("token exceeds the maximum capture length")]
    TokenTooLong,

    /// An exponent marker with no digits after it.
    #[error("malformed float exponent")]
    MalformedFloat,

    /// A malformed construct with no more specific classification,
    /// e.g. an empty or unterminated character literal.
    #[error("syntax error")]
    Syntax,

    /// Reserved: token storage could not be released. Stream destruction is
    /// infallible in this implementation.
    #[error("could not release token storage")]
    Free,

    /// The program was invoked with the wrong number of arguments.
    #[error("expected exactly one source file argument")]
    WrongArgumentCount,

    /// Reserved: an unexpected character. The scanner classifies unknown
    /// bytes as `TOKEN_UNKNOWN` instead of raising this.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// Reserved for the parser stage.
    #[error("unexpected token")]
    UnexpectedToken,

    /// Reserved for the parser stage.
    #[error("missing parenthesis")]
    MissingParenthesis,

    /// Reserved for the parser stage.
    #[error("unknown function")]
    UnknownFunction,

    /// Reserved: backing storage could not be obtained.
    #[error("memory allocation failed")]
    Allocation,

    /// The source file could not be opened for reading.
    #[error("file not found")]
    FileNotFound,
}

/// A scanning failure: what went wrong, where, and on which line.
///
/// Scanning is all-or-nothing: the first error aborts the scan and no
/// partial stream is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind} at line {line}")]
#[diagnostic(code(cedar::scan))]
pub struct ScanError {
    /// The kind of failure.
    #[source]
    pub kind: ErrorKind,
    /// The byte range of the offending lexeme.
    #[label("here")]
    pub span: Span,
    /// The 1-based source line the scanner was on.
    pub line: u32,
}

impl ScanError {
    /// Creates a new scan error.
    #[must_use]
    pub fn new(kind: ErrorKind, span: Span, line: u32) -> Self {
        Self { kind, span, line }
    }

    /// Creates a "capture too long" error.
    #[must_use]
    pub fn token_too_long(span: Span, line: u32) -> Self {
        Self::new(ErrorKind::TokenTooLong, span, line)
    }

    /// Creates a "malformed float exponent" error.
    #[must_use]
    pub fn malformed_float(span: Span, line: u32) -> Self {
        Self::new(ErrorKind::MalformedFloat, span, line)
    }

    /// Creates a generic syntax error.
    #[must_use]
    pub fn syntax(span: Span, line: u32) -> Self {
        Self::new(ErrorKind::Syntax, span, line)
    }
}
