//! Structural analysis engine for Jade source text: indentation,
//! newline handling, defun navigation, symbol indexing, and token
//! classification over a host-provided buffer.

pub mod buffer;
pub mod highlight;
pub mod indent;
pub mod lex;
pub mod mode;
pub mod navigate;
pub mod scan;
pub mod symbols;
