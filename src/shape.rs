//! Shape kinds and their spawn geometry.

use strum::{EnumString, IntoStaticStr};

/// Each of the conventional single-letter names of tetrominoes.
///
/// The `u8` numeric representation is used as an index into the static
/// geometry tables.
#[derive(Clone, Copy, Debug, EnumString, Eq, Hash, IntoStaticStr, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// Each possible orientation of a piece within its box.
#[derive(Clone, Copy, Debug, EnumString, Eq, Hash, IntoStaticStr, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Orientation {
    /// The orientation a piece spawns in.
    North,
    /// One 90° clockwise turn from spawn.
    East,
    /// One half turn from spawn.
    South,
    /// One 90° counter-clockwise turn from spawn.
    West,
}

impl Shape {
    /// Array of all shapes.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Get the single-character name of a shape.
    pub fn name(self) -> &'static str {
        ["I", "J", "L", "O", "S", "T", "Z"][self as usize]
    }

    /// Try to convert back from a `u8`.
    pub fn try_from(n: u8) -> Option<Shape> {
        match n {
            0 => Some(Shape::I),
            1 => Some(Shape::J),
            2 => Some(Shape::L),
            3 => Some(Shape::O),
            4 => Some(Shape::S),
            5 => Some(Shape::T),
            6 => Some(Shape::Z),
            _ => None,
        }
    }

    /// The side of the square box this shape spawns in.
    ///
    /// The I piece needs a 4×4 box and the O piece fits in 2×2; everything
    /// else uses 3×3.
    pub fn box_size(self) -> u8 {
        BOX_SIZES[self as usize]
    }

    /// The occupied `(row, col)` cells of this shape's spawn pattern.
    ///
    /// Row 0 is the top of the box.  Cells are listed in row-major order.
    pub fn spawn_cells(self) -> &'static [(u8, u8)] {
        SPAWN_CELLS[self as usize]
    }

    /// The conventional fill color of this shape, as `(r, g, b)`.
    pub fn color(self) -> (u8, u8, u8) {
        COLORS[self as usize]
    }
}

impl TryFrom<char> for Shape {
    type Error = ();

    fn try_from(value: char) -> Result<Self, ()> {
        match value {
            'I' => Ok(Shape::I),
            'J' => Ok(Shape::J),
            'L' => Ok(Shape::L),
            'O' => Ok(Shape::O),
            'S' => Ok(Shape::S),
            'T' => Ok(Shape::T),
            'Z' => Ok(Shape::Z),
            _ => Err(()),
        }
    }
}

impl From<Shape> for char {
    fn from(value: Shape) -> Self {
        match value {
            Shape::I => 'I',
            Shape::J => 'J',
            Shape::L => 'L',
            Shape::O => 'O',
            Shape::S => 'S',
            Shape::T => 'T',
            Shape::Z => 'Z',
        }
    }
}

impl Orientation {
    /// The orientation one quarter turn clockwise from the given one.
    pub fn cw(self) -> Orientation {
        use Orientation::*;
        match self {
            North => East,
            East => South,
            South => West,
            West => North,
        }
    }

    /// The orientation one quarter turn counter-clockwise from the given one.
    pub fn ccw(self) -> Orientation {
        use Orientation::*;
        match self {
            North => West,
            East => North,
            South => East,
            West => South,
        }
    }

    /// The orientation one half turn from the given one.
    pub fn half(self) -> Orientation {
        use Orientation::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

/// The spawn pattern of each shape, as occupied `(row, col)` cells.
///
/// Indexed by [shape].  Shapes always rest on the bottom row of their box,
/// but not necessarily in its bottom-left corner.
///
/// [shape]: Shape
static SPAWN_CELLS: [&[(u8, u8)]; 7] = [
    &[(3, 0), (3, 1), (3, 2), (3, 3)], // I
    &[(1, 0), (2, 0), (2, 1), (2, 2)], // J
    &[(1, 2), (2, 0), (2, 1), (2, 2)], // L
    &[(0, 0), (0, 1), (1, 0), (1, 1)], // O
    &[(1, 1), (1, 2), (2, 0), (2, 1)], // S
    &[(1, 1), (2, 0), (2, 1), (2, 2)], // T
    &[(1, 0), (1, 1), (2, 1), (2, 2)], // Z
];

/// The box side of each shape.
static BOX_SIZES: [u8; 7] = [4, 3, 3, 2, 3, 3, 3];

/// Conventional guideline colors, one per shape.
static COLORS: [(u8, u8, u8); 7] = [
    (0, 255, 255), // I
    (0, 0, 255),   // J
    (255, 127, 0), // L
    (255, 255, 0), // O
    (0, 255, 0),   // S
    (255, 0, 255), // T
    (255, 0, 0),   // Z
];
