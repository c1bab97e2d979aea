//! Append-only record of what was applied to a candidate.

use super::{MacroLibrary, MacroRef};
use crate::error::Result;
use crate::moves::MoveToken;

/// One recorded step: a literal token or a macro by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryEntry {
    Move(MoveToken),
    Macro(MacroRef),
}

/// Ordered history of a candidate since its scramble.
///
/// # Examples
///
/// ```
/// use apiary_core::algorithm::{Catalog, MacroLibrary, MacroRef, MoveHistory};
/// use apiary_core::moves::format_sequence;
///
/// let mut history = MoveHistory::new();
/// history.push_move("U".parse().unwrap());
/// history.push_macro(MacroRef::new(Catalog::Edges, 0));
///
/// let tokens = history.translate(&MacroLibrary::builtin()).unwrap();
/// assert_eq!(format_sequence(&tokens), "U M2 U M2 U2 M2 U M2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_move(&mut self, token: MoveToken) {
        self.entries.push(HistoryEntry::Move(token));
    }

    pub fn push_macro(&mut self, reference: MacroRef) {
        self.entries.push(HistoryEntry::Macro(reference));
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Expands macro references into their tokens, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownMacro`](crate::CubeError::UnknownMacro) if a
    /// reference does not exist in `library`.
    pub fn translate(&self, library: &MacroLibrary) -> Result<Vec<MoveToken>> {
        let mut tokens = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match *entry {
                HistoryEntry::Move(token) => tokens.push(token),
                HistoryEntry::Macro(reference) => {
                    tokens.extend_from_slice(library.get(reference)?)
                }
            }
        }
        Ok(tokens)
    }
}
