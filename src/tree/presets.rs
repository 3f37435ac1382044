//! Named example inputs
//!
//! A small table of level-order literals covering the shapes worth teaching:
//! the LeetCode default, skewed chains, a balanced tree, and duplicate
//! values. The UI cycles through these; tests use them as fixtures.

/// One selectable example input.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub input: &'static str,
}

/// All presets, in UI cycling order. The first entry is the startup default.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "default",
        input: "[1,null,2,3]",
    },
    Preset {
        name: "basic",
        input: "[1,2,3]",
    },
    Preset {
        name: "left-skewed",
        input: "[1,2,null,3]",
    },
    Preset {
        name: "right-skewed",
        input: "[1,null,2,null,3]",
    },
    Preset {
        name: "balanced",
        input: "[4,2,6,1,3,5,7]",
    },
    Preset {
        name: "zigzag",
        input: "[5,4,7,3,null,2,null,-1,null,9]",
    },
    Preset {
        name: "duplicates",
        input: "[2,2,2]",
    },
];
