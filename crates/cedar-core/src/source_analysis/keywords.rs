// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Reserved-word classification.
//!
//! C has a fixed set of 32 reserved words; everything else that is shaped
//! like an identifier *is* an identifier. Classification is a pure lookup
//! with no failure modes.

use super::TokenKind;

/// The 32 reserved words, sorted for binary search.
const KEYWORDS: [&str; 32] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

/// Returns `true` if `text` is one of the reserved words.
///
/// Matching is exact and case-sensitive: `While` is an ordinary identifier.
#[must_use]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Classifies identifier-shaped text as [`TokenKind::Keyword`] or
/// [`TokenKind::Identifier`].
///
/// The input must already be identifier-shaped (leading alpha or underscore,
/// alphanumeric or underscore thereafter); the scanner guarantees this.
#[must_use]
pub fn classify(text: &str) -> TokenKind {
    if is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}
