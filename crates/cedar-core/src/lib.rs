// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Cedar compiler core.
//!
//! This crate contains the core front-end functionality:
//! - Lexical analysis (tokenization of C-like source text)
//! - AST definitions (for the parser stage, not yet built)
//!
//! The scanner operates on in-memory source text and reports every failure
//! as a structured error value; deciding whether a failure is fatal belongs
//! to the caller (the `cedar` CLI stops at the first error).

pub mod ast;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::source_analysis::{Lexer, ScanError, Span, Token, TokenKind, TokenStream};
}
