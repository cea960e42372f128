//! Jade - structural editing support for the Jade language
//!
//! # Overview
//!
//! Jade is a small line-oriented language: functions with empty parameter
//! lists, brace-delimited bodies, four-space indentation, and `//` line
//! comments. This crate gives a host editor the structural behavior for
//! it:
//!
//! - Indentation calculation and re-indentation of the cursor line
//! - Newline handling, including expansion of a freshly opened block
//! - Navigation between function definitions and their body ends
//! - A flat, ordered index of the functions in a buffer
//! - Token classification for a highlighting layer
//!
//! # Quick Start
//!
//! ```
//! use jade::{Buffer, Position, TextBuffer, handle_newline, symbol_index};
//!
//! let mut buffer = TextBuffer::from_text("fn main() {");
//! buffer.set_cursor(Position::new(0, 11));
//!
//! // A newline right after the opening brace materializes the block.
//! handle_newline(&mut buffer);
//! buffer.insert_text("return");
//! assert_eq!(buffer.to_text(), "fn main() {\n    return\n}");
//!
//! let index = symbol_index(&buffer);
//! assert_eq!(index[0].name, "main");
//! ```
//!
//! # Host Integration
//!
//! The operations work on anything implementing [`Buffer`], so a host
//! exposes its own text storage instead of copying into ours. Editors
//! that manage several languages register modes in a [`ModeRegistry`]
//! and dispatch on file extension:
//!
//! ```
//! use jade::{ModeRegistry, TextBuffer};
//! use std::path::Path;
//!
//! let mut registry = ModeRegistry::new();
//! registry.register_jade();
//!
//! let mode = registry.mode_for_path(Path::new("scratch.jade")).unwrap();
//! let buffer = TextBuffer::from_text("fn alpha()\nfn beta()");
//! assert_eq!(mode.symbol_index(&buffer).len(), 2);
//! ```

// Re-export the engine surface from jade_core
pub use jade_core::buffer::{Buffer, Position, TextBuffer};
pub use jade_core::highlight::{TokenCategory, TokenSpan, classify_line, token_patterns};
pub use jade_core::indent::{INDENT_UNIT, compute_indent, handle_newline, indent_current_line};
pub use jade_core::mode::{EditingMode, JadeMode, ModeRegistry};
pub use jade_core::navigate::{beginning_of_defun, end_of_defun};
pub use jade_core::symbols::{FunctionSymbol, symbol_index};

// Module access for hosts that prefer qualified paths
pub use jade_core::{buffer, highlight, indent, lex, mode, navigate, scan, symbols};

// Batch re-indentation lives in its own crate; most hosts want it too
#[cfg(feature = "fmt")]
pub use jade_fmt as fmt;
