// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for C-like source code.
//!
//! This module converts raw source text into an ordered [`TokenStream`] of
//! classified [`Token`]s. Comments and preprocessor directives are captured
//! verbatim as trivia tokens rather than discarded, so the stream reflects
//! the complete left-to-right content of the source.
//!
//! # Scanning
//!
//! The [`Lexer`] walks the source byte by byte with a single byte of
//! lookahead. It implements [`Iterator`] for incremental consumption, or
//! [`Lexer::scan`] (and the [`scan`] convenience function) to run to
//! exhaustion:
//!
//! ```
//! use cedar_core::source_analysis::{scan, TokenKind};
//!
//! let stream = scan("x = 1;").unwrap();
//! assert_eq!(stream.len(), 4);
//! assert_eq!(stream.get(0).unwrap().kind(), TokenKind::Identifier);
//! ```
//!
//! # Error Handling
//!
//! The scanner stops at the first malformed construct and returns a
//! [`ScanError`] carrying the error kind, the offending byte span, and the
//! 1-based source line. There is no recovery or multi-error accumulation;
//! the caller decides whether to halt.

mod error;
mod keywords;
mod lexer;
mod span;
mod stream;
mod token;


pub use error::{ErrorKind, ScanError};
pub use keywords::{classify, is_keyword};
pub use lexer::{Lexer, ScanLimits, scan};
pub use span::Span;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
