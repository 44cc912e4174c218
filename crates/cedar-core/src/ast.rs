// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Cedar.
//!
//! The AST represents the structure of a C program after parsing. The parser
//! that builds these nodes is a future stage; the scanner does not touch this
//! module. Each node kind is a distinct variant carrying only the fields
//! relevant to that kind — there is no single overlapping-fields record.
//!
//! # Example
//!
//! ```
//! use cedar_core::ast::AstNode;
//!
//! // 5 + 3
//! let sum = AstNode::BinaryOp {
//!     operator: "+".into(),
//!     left: Box::new(AstNode::IntLiteral(5)),
//!     right: Box::new(AstNode::IntLiteral(3)),
//! };
//! assert_eq!(sum.kind_name(), "binary op");
//! ```

use ecow::EcoString;

/// A node in the abstract syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// The root node: the functions and globals of a translation unit.
    Program {
        /// Top-level declarations in source order.
        statements: Vec<AstNode>,
    },

    /// A function declaration: `int main() { ... }`
    FunctionDecl {
        /// The function name.
        name: EcoString,
        /// The spelled return type.
        return_type: EcoString,
        /// The function body block.
        body: Box<AstNode>,
    },

    /// A variable declaration: `int x;`
    VarDecl {
        /// The variable name.
        name: EcoString,
        /// The spelled type.
        var_type: EcoString,
    },

    /// A binary operation: `5 + 3`, `a == b`
    BinaryOp {
        /// The operator lexeme: `"+"`, `"-"`, `"=="`, ...
        operator: EcoString,
        /// Left operand.
        left: Box<AstNode>,
        /// Right operand.
        right: Box<AstNode>,
    },

    /// An integer literal: `5`
    IntLiteral(i64),
}

impl AstNode {
    /// Returns a short human-readable name for this node's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Program { .. } => "program",
            Self::FunctionDecl { .. } => "function decl",
            Self::VarDecl { .. } => "var decl",
            Self::BinaryOp { .. } => "binary op",
            Self::IntLiteral(_) => "int literal",
        }
    }
}
