//! The flat function index over a buffer.

use crate::buffer::Buffer;
use crate::scan;

/// A function definition found in a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    /// Name captured from the definition line.
    pub name: String,
    /// 0-based line of the definition.
    pub line: usize,
}

/// Every function definition in the buffer, in buffer order.
///
/// The index is flat: Jade has no nesting of definitions, so there is no
/// hierarchy to build. Duplicate names stay in; which entry a host jumps
/// to is its own policy. Rebuilding on every change notification is fine,
/// the scan is one regex test per line.
pub fn symbol_index<B: Buffer + ?Sized>(buffer: &B) -> Vec<FunctionSymbol> {
    let mut symbols = Vec::new();
    for i in 0..buffer.line_count() {
        let Some(text) = buffer.line_text(i) else {
            break;
        };
        if let Some(name) = scan::defun_name(text) {
            symbols.push(FunctionSymbol {
                name: name.to_string(),
                line: i,
            });
        }
    }
    symbols
}
