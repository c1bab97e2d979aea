//! Macro permutations ("algorithms") and move history
//!
//! A macro is a fixed token sequence that cycles or swaps a handful of pieces.
//! Two catalogs exist: one targeting edges, one targeting corners. Candidates
//! record macros by reference and translate them back to tokens on demand.

mod catalog;
mod history;

use std::fmt;
use std::sync::{Arc, LazyLock};

use rand::Rng;

use crate::error::{CubeError, Result};
use crate::moves::{parse_sequence, MoveToken};

pub use history::{HistoryEntry, MoveHistory};

/// Which macro catalog a reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Catalog {
    Edges,
    Corners,
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Catalog::Edges => write!(f, "edge"),
            Catalog::Corners => write!(f, "corner"),
        }
    }
}

/// Reference to one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroRef {
    pub catalog: Catalog,
    pub index: usize,
}

impl MacroRef {
    pub const fn new(catalog: Catalog, index: usize) -> Self {
        Self { catalog, index }
    }
}

static BUILTIN: LazyLock<Arc<MacroLibrary>> = LazyLock::new(|| {
    Arc::new(
        MacroLibrary::from_notation(catalog::EDGE_MACROS, catalog::CORNER_MACROS)
            .expect("built-in macro notation is valid"),
    )
});

/// Parsed edge and corner catalogs.
///
/// # Examples
///
/// ```
/// use apiary_core::algorithm::{Catalog, MacroLibrary, MacroRef};
///
/// let library = MacroLibrary::builtin();
/// assert_eq!(library.len(Catalog::Edges), 5);
/// assert_eq!(library.len(Catalog::Corners), 14);
///
/// let tokens = library.get(MacroRef::new(Catalog::Edges, 0)).unwrap();
/// assert_eq!(tokens.len(), 7);
/// assert!(library.get(MacroRef::new(Catalog::Edges, 5)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroLibrary {
    edges: Vec<Vec<MoveToken>>,
    corners: Vec<Vec<MoveToken>>,
}

impl MacroLibrary {
    /// The shared built-in library.
    pub fn builtin() -> Arc<MacroLibrary> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a library from notation strings.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownMove`] for unparsable notation and
    /// [`CubeError::EmptyCatalog`] when either catalog has no entries.
    pub fn from_notation<S: AsRef<str>>(edges: &[S], corners: &[S]) -> Result<Self> {
        let parse = |notation: &[S]| -> Result<Vec<Vec<MoveToken>>> {
            notation.iter().map(|n| parse_sequence(n.as_ref())).collect()
        };
        let library = Self {
            edges: parse(edges)?,
            corners: parse(corners)?,
        };
        for catalog in [Catalog::Edges, Catalog::Corners] {
            if library.len(catalog) == 0 {
                return Err(CubeError::EmptyCatalog(catalog));
            }
        }
        Ok(library)
    }

    pub fn catalog(&self, catalog: Catalog) -> &[Vec<MoveToken>] {
        match catalog {
            Catalog::Edges => &self.edges,
            Catalog::Corners => &self.corners,
        }
    }

    pub fn len(&self, catalog: Catalog) -> usize {
        self.catalog(catalog).len()
    }

    /// Tokens of the referenced macro.
    pub fn get(&self, reference: MacroRef) -> Result<&[MoveToken]> {
        let entries = self.catalog(reference.catalog);
        entries
            .get(reference.index)
            .map(Vec::as_slice)
            .ok_or(CubeError::UnknownMacro {
                catalog: reference.catalog,
                index: reference.index,
                len: entries.len(),
            })
    }

    /// Draws a uniformly random entry of `catalog`.
    pub fn random<R: Rng + ?Sized>(&self, catalog: Catalog, rng: &mut R) -> MacroRef {
        MacroRef::new(catalog, rng.random_range(0..self.len(catalog)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;

    #[test]
    fn test_builtin_is_shared() {
        let a = MacroLibrary::builtin();
        let b = MacroLibrary::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(
            MacroLibrary::from_notation(&["R U R' U'"], &none),
            Err(CubeError::EmptyCatalog(Catalog::Corners))
        );
    }

    #[test]
    fn test_bad_notation_rejected() {
        assert_eq!(
            MacroLibrary::from_notation(&["R U Q"], &["R"]),
            Err(CubeError::UnknownMove("Q".to_string()))
        );
    }

    #[test]
    fn test_every_macro_disturbs_a_solved_cube() {
        let library = MacroLibrary::builtin();
        for catalog in [Catalog::Edges, Catalog::Corners] {
            for tokens in library.catalog(catalog) {
                let mut cube = Cube::solved();
                cube.apply_all(tokens);
                assert!(!cube.is_solved(), "{tokens:?}");
            }
        }
    }

    #[test]
    fn test_pure_edge_cycle() {
        let library = MacroLibrary::builtin();
        let mut cube = Cube::solved();
        cube.apply_all(library.get(MacroRef::new(Catalog::Edges, 2)).unwrap());
        let score = cube.score();
        assert_eq!(score.corners(), 0);
        assert_eq!(score.edges(), 3);
    }
}
