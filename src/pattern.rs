//! Keyed occupancy grids.

use smallvec::SmallVec;

/// A key into a piece's marker table.
///
/// Occupied slots store a key instead of their own copy of the marker, so
/// every slot of one piece resolves to the same record.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MarkerKey(pub u8);

/// A packed bit representation of a pattern's occupancy.
///
/// Bit 0 is the top-left slot.  Rows are packed with a fixed stride of 4
/// bits regardless of the pattern's side, so bit `row * 4 + col` represents
/// the slot at `(row, col)`.
///
/// This type is `Copy` because it is intended to be cheap to compare.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CellMask(pub u16);

impl CellMask {
    /// An empty mask.
    pub fn empty() -> CellMask {
        CellMask(0)
    }

    /// Check whether the bit for the given slot is set.
    ///
    /// Requires that `row` and `col` are both at most 3.
    pub fn get(self, row: u8, col: u8) -> bool {
        assert!(row <= 3);
        assert!(col <= 3);

        let mask = 1 << (row * 4 + col);
        (self.0 & mask) != 0
    }

    /// The number of set slots.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// The slot grid of one piece.
///
/// A fixed-capacity square grid of optional [marker keys], row-major with
/// row 0 at the top.  The backing array always holds 16 slots at a stride
/// of 4 per row; a pattern of side `n` only ever sets the upper-left
/// `n`&times;`n` of them.
///
/// [marker keys]: MarkerKey
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pattern {
    size: u8,
    slots: [Option<MarkerKey>; 16],
}

impl Pattern {
    /// Create an empty pattern with the given box side.
    ///
    /// Requires that 1 &le; `size` &le; 4.
    pub fn empty(size: u8) -> Pattern {
        assert!(size >= 1);
        assert!(size <= 4);

        Pattern {
            size,
            slots: [None; 16],
        }
    }

    /// The side of this pattern's box.
    pub fn size(self) -> u8 {
        self.size
    }

    /// The slot at the given row and column.
    ///
    /// Requires that `row` and `col` are both within the box.
    pub fn get(self, row: u8, col: u8) -> Option<MarkerKey> {
        assert!(row < self.size);
        assert!(col < self.size);

        self.slots[(row * 4 + col) as usize]
    }

    /// Overwrite the slot at the given row and column.
    pub fn set(&mut self, row: u8, col: u8, slot: Option<MarkerKey>) {
        assert!(row < self.size);
        assert!(col < self.size);

        self.slots[(row * 4 + col) as usize] = slot;
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots = [None; 16];
    }

    /// Write `key` into each of the given cells, leaving other slots alone.
    pub fn stamp(&mut self, cells: &[(u8, u8)], key: MarkerKey) {
        for &(row, col) in cells {
            self.set(row, col, Some(key));
        }
    }

    /// The packed occupancy of this pattern.
    pub fn mask(self) -> CellMask {
        let mut bits = 0;

        for (i, slot) in self.slots.iter().enumerate() {
            if slot.is_some() {
                bits |= 1 << i;
            }
        }

        CellMask(bits)
    }

    /// The occupied cells of this pattern, in row-major order.
    pub fn cells(self) -> SmallVec<[(u8, u8); 4]> {
        let mut cells = SmallVec::new();

        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col).is_some() {
                    cells.push((row, col));
                }
            }
        }

        cells
    }

    /// This pattern turned a quarter clockwise within its box.
    ///
    /// The slot at `(row, col)` moves to `(col, n - 1 - row)`.
    #[must_use]
    pub fn rotated_cw(self) -> Pattern {
        let mut new = Pattern::empty(self.size);

        for row in 0..self.size {
            for col in 0..self.size {
                new.set(col, self.size - 1 - row, self.get(row, col));
            }
        }

        new
    }

    /// This pattern turned a quarter counter-clockwise within its box.
    #[must_use]
    pub fn rotated_ccw(self) -> Pattern {
        let mut new = Pattern::empty(self.size);

        for row in 0..self.size {
            for col in 0..self.size {
                new.set(self.size - 1 - col, row, self.get(row, col));
            }
        }

        new
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn stamped(shape: Shape) -> Pattern {
        let mut pattern = Pattern::empty(shape.box_size());
        pattern.stamp(shape.spawn_cells(), MarkerKey(0));
        pattern
    }

    #[test]
    fn stamp_and_mask() {
        let pattern = stamped(Shape::S);

        assert_eq!(pattern.mask().count(), 4);
        assert_eq!(pattern.get(1, 1), Some(MarkerKey(0)));
        assert_eq!(pattern.get(0, 0), None);
        assert!(pattern.mask().get(2, 0));
        assert!(!pattern.mask().get(0, 2));
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut pattern = stamped(Shape::T);
        pattern.clear();

        assert!(pattern.mask().is_empty());
        assert!(pattern.cells().is_empty());
    }

    #[test]
    fn rotated_s_cells() {
        let turned = stamped(Shape::S).rotated_cw();

        assert_eq!(
            turned.cells().as_slice(),
            &[(0, 0), (1, 0), (1, 1), (2, 1)],
        );
    }

    #[test]
    fn rotation_round_trips() {
        for shape in Shape::ALL {
            let pattern = stamped(shape);

            assert_eq!(pattern.rotated_cw().rotated_ccw(), pattern);
            assert_eq!(
                pattern.rotated_cw().rotated_cw().rotated_cw().rotated_cw(),
                pattern,
            );
        }
    }
}
