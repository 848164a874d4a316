//! JSON shape-set definitions.
//!
//! A shape set is a JSON array of definitions:
//!
//! ```json
//! [{"name": "S", "color": [0, 255, 0], "cells": [[1, 1], [1, 2], [2, 0], [2, 1]]}]
//! ```
//!
//! Cells are `(row, col)` with row 0 at the top.  Definitions are written
//! pre-anchored: some cell touches the left edge of the box, and some cell
//! rests on its bottom row, matching the built-in spawn tables.

use std::collections::HashSet;

use bitvec::prelude::BitArray;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::pattern::{MarkerKey, Pattern};

/// One shape definition from a parsed set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShapeDef {
    pub name: String,
    pub color: (u8, u8, u8),
    /// The side of the box the cells fit in.
    pub size: u8,
    /// Occupied `(row, col)` cells, sorted row-major.
    pub cells: SmallVec<[(u8, u8); 4]>,
}

impl ShapeDef {
    /// Stamp this definition into a fresh pattern under the given key.
    pub fn pattern(&self, key: MarkerKey) -> Pattern {
        let mut pattern = Pattern::empty(self.size);
        pattern.stamp(&self.cells, key);
        pattern
    }
}

/// Parse and validate a JSON shape set.
///
/// Returns `None` if the JSON is malformed, a definition is empty, unsized
/// (box side over 4), unanchored, or self-overlapping, a color is pure
/// black, or two definitions share a name.
pub fn parse(s: &str) -> Option<Vec<ShapeDef>> {
    #[derive(Deserialize)]
    struct DefInfo {
        name: String,
        color: [u8; 3],
        cells: Vec<(u8, u8)>,
    }

    let infos: Vec<DefInfo> = serde_json::from_str(s).ok()?;
    let mut defs: Vec<ShapeDef> = Vec::new();

    for info in infos {
        if info.color == [0, 0, 0] {
            return None;
        }

        let max_row = info.cells.iter().map(|(row, _)| *row).max()?;
        let max_col = info.cells.iter().map(|(_, col)| *col).max()?;
        let min_col = info.cells.iter().map(|(_, col)| *col).min()?;

        let size = max_row.max(max_col) + 1;
        if size > 4 || min_col != 0 || max_row + 1 != size {
            return None;
        }

        let mut seen: BitArray<[u16; 1]> = BitArray::new([0]);
        for &(row, col) in &info.cells {
            if seen.replace((row * 4 + col) as usize, true) {
                return None;
            }
        }

        let mut cells: SmallVec<[(u8, u8); 4]> = info.cells.into_iter().collect();
        cells.sort_unstable();

        defs.push(ShapeDef {
            name: info.name,
            color: (info.color[0], info.color[1], info.color[2]),
            size,
            cells,
        });
    }

    let names: HashSet<&str> = defs.iter().map(|def| def.name.as_ref()).collect();
    if names.len() != defs.len() {
        return None;
    }

    Some(defs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_shape_set() {
        let defs = parse(
            r#"[
                {"name": "S", "color": [0, 255, 0], "cells": [[2, 0], [2, 1], [1, 1], [1, 2]]},
                {"name": "domino", "color": [127, 127, 127], "cells": [[1, 0], [1, 1]]}
            ]"#,
        )
        .unwrap();

        assert_eq!(defs.len(), 2);

        assert_eq!(defs[0].size, 3);
        assert_eq!(defs[0].cells.as_slice(), &[(1, 1), (1, 2), (2, 0), (2, 1)]);

        assert_eq!(defs[1].name, "domino");
        assert_eq!(defs[1].size, 2);

        let pattern = defs[0].pattern(MarkerKey(0));
        assert_eq!(pattern.mask().count(), 4);
        assert_eq!(pattern.get(1, 1), Some(MarkerKey(0)));
    }

    #[test]
    fn rejects_duplicate_cells() {
        let set = r#"[{"name": "X", "color": [1, 2, 3], "cells": [[1, 0], [1, 0], [1, 1]]}]"#;
        assert_eq!(parse(set), None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let set = r#"[
            {"name": "X", "color": [1, 2, 3], "cells": [[0, 0]]},
            {"name": "X", "color": [4, 5, 6], "cells": [[0, 0]]}
        ]"#;
        assert_eq!(parse(set), None);
    }

    #[test]
    fn rejects_unanchored_cells() {
        // Nothing touches the left edge.
        let set = r#"[{"name": "X", "color": [1, 2, 3], "cells": [[1, 1], [1, 2]]}]"#;
        assert_eq!(parse(set), None);

        // Nothing rests on the bottom of the 3x3 box implied by column 2.
        let set = r#"[{"name": "X", "color": [1, 2, 3], "cells": [[0, 0], [0, 1], [0, 2]]}]"#;
        assert_eq!(parse(set), None);
    }

    #[test]
    fn rejects_oversized_boxes() {
        let set = r#"[{"name": "X", "color": [1, 2, 3], "cells": [[4, 0], [4, 1]]}]"#;
        assert_eq!(parse(set), None);
    }

    #[test]
    fn rejects_empty_definitions() {
        let set = r#"[{"name": "X", "color": [1, 2, 3], "cells": []}]"#;
        assert_eq!(parse(set), None);
    }
}
