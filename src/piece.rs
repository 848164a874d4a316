//! Piece lifecycle: spawn, reset, turn.

use smallvec::{smallvec, SmallVec};

use crate::{
    draw::DrawSink,
    pattern::{MarkerKey, Pattern},
    shape::{Orientation, Shape},
};

/// The metadata record for a piece's occupied cells.
///
/// One record is shared by every occupied slot of its piece.  Slots refer
/// to it by [key] rather than holding their own copy, so reading through
/// one slot can never observe a stale version of another.
///
/// [key]: MarkerKey
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Square {
    pub shape: Shape,
    pub color: (u8, u8, u8),
}

/// A piece: a shape kind, its orientation, and its stamped pattern.
///
/// Mutating methods never draw.  [`apply_shape`] and [`reset`] report
/// whether any slot changed and leave the redraw decision to the caller;
/// [`spawn`] and [`reset_with`] bundle the common case of exactly one
/// redraw through a [`DrawSink`].
///
/// [`apply_shape`]: Piece::apply_shape
/// [`reset`]:       Piece::reset
/// [`spawn`]:       Piece::spawn
/// [`reset_with`]:  Piece::reset_with
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Piece {
    shape: Shape,
    orientation: Orientation,
    pattern: Pattern,
    markers: SmallVec<[Square; 1]>,
}

impl Piece {
    /// Create a new piece of the given shape, stamped with its spawn
    /// pattern.
    ///
    /// The piece's single [`Square`] is allocated here and reused for the
    /// rest of the piece's life.
    pub fn new(shape: Shape) -> Piece {
        let mut piece = Piece {
            shape,
            orientation: Orientation::North,
            pattern: Pattern::empty(shape.box_size()),
            markers: smallvec![Square {
                shape,
                color: shape.color(),
            }],
        };

        piece.apply_shape();
        piece
    }

    /// Create a piece and issue a single redraw for it.
    pub fn spawn(shape: Shape, sink: &mut impl DrawSink) -> Piece {
        let piece = Piece::new(shape);
        sink.redraw(&piece);
        piece
    }

    /// Re-stamp the spawn geometry for this piece's shape.
    ///
    /// Clears the pattern, writes the piece's marker key into each spawn
    /// cell, and returns the piece to the `North` orientation.  Returns
    /// whether any slot actually changed.
    pub fn apply_shape(&mut self) -> bool {
        let before = self.pattern;

        self.pattern.clear();
        self.pattern.stamp(self.shape.spawn_cells(), self.marker());
        self.orientation = Orientation::North;

        self.pattern != before
    }

    /// Reinitialize a pooled piece to its spawn state, overwriting any
    /// prior pattern state.
    ///
    /// The marker record is reused, never reallocated, so keys handed out
    /// before the reset stay valid.
    pub fn reset(&mut self) -> bool {
        self.apply_shape()
    }

    /// Reset and issue a single redraw, whether or not any slot changed.
    pub fn reset_with(&mut self, sink: &mut impl DrawSink) -> bool {
        let did_change = self.reset();
        sink.redraw(self);
        did_change
    }

    /// Turn the piece a quarter clockwise within its box.
    pub fn turn_cw(&mut self) {
        self.pattern = self.pattern.rotated_cw();
        self.orientation = self.orientation.cw();
    }

    /// Turn the piece a quarter counter-clockwise within its box.
    pub fn turn_ccw(&mut self) {
        self.pattern = self.pattern.rotated_ccw();
        self.orientation = self.orientation.ccw();
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Direct access to the slot grid.
    ///
    /// Engines that scribble on the grid can always recover the spawn
    /// state with [`reset`].
    ///
    /// [`reset`]: Piece::reset
    pub fn pattern_mut(&mut self) -> &mut Pattern {
        &mut self.pattern
    }

    /// The key of this piece's marker record.
    pub fn marker(&self) -> MarkerKey {
        MarkerKey(0)
    }

    /// Resolve a marker key to its record.
    pub fn square(&self, key: MarkerKey) -> &Square {
        &self.markers[key.0 as usize]
    }

    pub fn square_mut(&mut self, key: MarkerKey) -> &mut Square {
        &mut self.markers[key.0 as usize]
    }

    /// The occupied cells of the current pattern, in row-major order.
    pub fn cells(&self) -> SmallVec<[(u8, u8); 4]> {
        self.pattern.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSink(usize);

    impl DrawSink for CountingSink {
        fn redraw(&mut self, _piece: &Piece) {
            self.0 += 1;
        }
    }

    #[test]
    fn spawn_occupancy_is_keyed_and_exact() {
        let piece = Piece::new(Shape::S);
        let key = piece.marker();

        for (row, col) in [(1, 1), (1, 2), (2, 0), (2, 1)] {
            assert_eq!(piece.pattern().get(row, col), Some(key));
        }
        assert_eq!(piece.pattern().mask().count(), 4);
        assert_eq!(piece.square(key).shape, Shape::S);
    }

    #[test]
    fn other_slots_stay_empty() {
        let piece = Piece::new(Shape::S);
        let occupied = piece.cells();

        for row in 0..3 {
            for col in 0..3 {
                if !occupied.contains(&(row, col)) {
                    assert_eq!(piece.pattern().get(row, col), None);
                }
            }
        }
    }

    #[test]
    fn reset_restores_geometry_after_mutation() {
        let mut piece = Piece::new(Shape::S);
        let spawn = *piece.pattern();

        let key = piece.marker();
        piece.pattern_mut().set(1, 1, None);
        piece.pattern_mut().set(0, 0, Some(key));
        piece.turn_cw();
        assert_ne!(*piece.pattern(), spawn);

        assert!(piece.reset());
        assert_eq!(*piece.pattern(), spawn);
        assert_eq!(piece.orientation(), Orientation::North);
    }

    #[test]
    fn reset_keeps_marker_identity() {
        let mut piece = Piece::new(Shape::S);
        let key = piece.marker();
        let record = *piece.square(key);

        piece.pattern_mut().clear();
        piece.reset();

        assert_eq!(piece.marker(), key);
        assert_eq!(*piece.square(key), record);
    }

    #[test]
    fn apply_shape_reports_change() {
        let mut piece = Piece::new(Shape::Z);
        let key = piece.marker();

        assert!(!piece.apply_shape());

        piece.pattern_mut().set(0, 0, Some(key));
        assert!(piece.apply_shape());
    }

    #[test]
    fn redraw_counts() {
        let mut sink = CountingSink(0);

        let mut piece = Piece::spawn(Shape::S, &mut sink);
        assert_eq!(sink.0, 1);

        piece.reset_with(&mut sink);
        assert_eq!(sink.0, 2);

        // The plain mutation path never draws.
        piece.reset();
        piece.apply_shape();
        assert_eq!(sink.0, 2);
    }

    #[test]
    fn turning_four_times_is_identity() {
        for shape in Shape::ALL {
            let spawn = Piece::new(shape);

            let mut piece = spawn.clone();
            for _ in 0..4 {
                piece.turn_cw();
            }

            assert_eq!(piece, spawn);
        }
    }
}
