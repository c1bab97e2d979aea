//! Built-in macro notation.

/// Corner 3-cycles and swaps; edges are left where they are.
pub(crate) const CORNER_MACROS: &[&str] = &[
    "F R U' R' U' R U R' F' R U R' U' R' F R F'",
    "R U R' U' R' F R2 U' R' U' R U R' F'",
    "x L2 D2 L' U' L D2 L' U L'",
    "x' L2 D2 L U L' D2 L U' L",
    "R U R' F' R U R' U' R' F R2 U' R'",
    "x' L' U L D' L' U' L D L' U' L D' L' U L D",
    "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'",
    "R' U R' U' y R' F' R2 U' R' U R' F R F",
    "R' U' R U R' U' R U L R' U' R U R' U' R U L R' U' R U R' U' R U L2",
    "R U' R' U R U' R' U L R U' R' U R U' R' U L R U' R' U R U' R' U L2",
    "R' U' R U R' U' R U L2 R' U' R U R' U' R U R' U' R U R' U' R U L2",
    "R U' R' U R U' R' U L2 R U' R' U R U' R' U R U' R' U R U' R' U L2",
    "R U' R' U R U' R' U L R U' R' U R U' R' U R U' R' U R U' R' U L'",
    "R U' R' U R U' R' U R U' R' U R U' R' U L R U' R' U R U' R' U L'",
];

/// Edge 3-cycles and swaps on the top layer.
pub(crate) const EDGE_MACROS: &[&str] = &[
    "M2 U M2 U2 M2 U M2",
    "M2 U' M U2 M' U' M2",
    "R U' R U R U R U' R' U' R2",
    "R2 U R U R' U' R' U' R' U R'",
    "M' U M2 U M2 U M' U2 M2",
];
