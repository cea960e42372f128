//! Mode registration: how a host editor binds Jade's editing behavior.

use std::collections::HashMap;
use std::path::Path;

use crate::buffer::Buffer;
use crate::indent;
use crate::navigate;
use crate::symbols::{self, FunctionSymbol};

/// The editing capabilities a language mode contributes to a host.
///
/// A mode carries no state of its own; every method is a thin dispatch to
/// the engine functions, and hosts that only care about Jade can call
/// those directly. The trait exists so a registry can hold modes for
/// several languages behind one object type.
pub trait EditingMode {
    /// Short mode name, as shown by host UIs.
    fn name(&self) -> &'static str;

    /// Re-indent the cursor line.
    fn indent_current_line(&self, buffer: &mut dyn Buffer);

    /// Handle a newline keystroke at the cursor.
    fn handle_newline(&self, buffer: &mut dyn Buffer);

    /// Move to the start of the `count`-th previous function definition.
    fn beginning_of_defun(&self, buffer: &mut dyn Buffer, count: usize) -> bool;

    /// Move to the end of the `count`-th next function body.
    fn end_of_defun(&self, buffer: &mut dyn Buffer, count: usize) -> bool;

    /// Flat, ordered index of the buffer's function definitions.
    fn symbol_index(&self, buffer: &dyn Buffer) -> Vec<FunctionSymbol>;
}

/// Structural editing for `.jade` sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct JadeMode;

impl JadeMode {
    /// The extension the mode is conventionally registered under.
    pub const EXTENSION: &'static str = "jade";
}

impl EditingMode for JadeMode {
    fn name(&self) -> &'static str {
        "jade"
    }

    fn indent_current_line(&self, buffer: &mut dyn Buffer) {
        indent::indent_current_line(buffer);
    }

    fn handle_newline(&self, buffer: &mut dyn Buffer) {
        indent::handle_newline(buffer);
    }

    fn beginning_of_defun(&self, buffer: &mut dyn Buffer, count: usize) -> bool {
        navigate::beginning_of_defun(buffer, count)
    }

    fn end_of_defun(&self, buffer: &mut dyn Buffer, count: usize) -> bool {
        navigate::end_of_defun(buffer, count)
    }

    fn symbol_index(&self, buffer: &dyn Buffer) -> Vec<FunctionSymbol> {
        symbols::symbol_index(buffer)
    }
}

/// Host-owned table from file extension to mode.
///
/// There is no global registry. A host builds one, registers the modes it
/// wants, and looks modes up when it opens a file. Registering an
/// extension twice replaces the earlier binding.
#[derive(Default)]
pub struct ModeRegistry {
    modes: HashMap<String, Box<dyn EditingMode>>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `mode` to files with `extension`, given without the dot.
    pub fn register(&mut self, extension: &str, mode: Box<dyn EditingMode>) {
        self.modes.insert(extension.to_string(), mode);
    }

    /// Bind the Jade mode to its conventional `.jade` extension.
    pub fn register_jade(&mut self) {
        self.register(JadeMode::EXTENSION, Box::new(JadeMode));
    }

    /// The mode registered for `extension`, if any.
    pub fn mode_for_extension(&self, extension: &str) -> Option<&dyn EditingMode> {
        self.modes.get(extension).map(|mode| mode.as_ref())
    }

    /// The mode for `path`, chosen by its extension.
    pub fn mode_for_path(&self, path: &Path) -> Option<&dyn EditingMode> {
        let extension = path.extension()?.to_str()?;
        self.mode_for_extension(extension)
    }
}
