//! Shared types used across cropcenter.
//! Includes the `Intensity` sample trait, `BoundingBox`, and `CenterOfMass`.
use serde::{Deserialize, Serialize};

/// Gray-scale sample type a grid can hold.
pub trait Intensity: Copy + PartialOrd + Send + Sync + 'static {
    /// Full-scale value of the type; inversion maps `v` to `MAX - v`.
    const MAX: Self;

    fn to_u32(self) -> u32;

    fn to_f64(self) -> f64;

    /// Plain narrowing cast, no rescaling.
    fn narrow_to_u8(self) -> u8;

    fn invert(self) -> Self;
}

impl Intensity for u8 {
    const MAX: Self = u8::MAX;

    fn to_u32(self) -> u32 {
        self as u32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn narrow_to_u8(self) -> u8 {
        self
    }

    fn invert(self) -> Self {
        Self::MAX - self
    }
}

impl Intensity for u16 {
    const MAX: Self = u16::MAX;

    fn to_u32(self) -> u32 {
        self as u32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn narrow_to_u8(self) -> u8 {
        self as u8
    }

    fn invert(self) -> Self {
        Self::MAX - self
    }
}

/// Half-open rectangle `[top, bottom) x [left, right)` into a grid.
///
/// A box found on an all-background grid is degenerate: `top > bottom` and/or
/// `left > right`. Such a box selects nothing.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl BoundingBox {
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows {}..{}, cols {}..{}",
            self.top, self.bottom, self.left, self.right
        )
    }
}

/// Intensity-weighted centroid of a grid, in (row, col) pixel coordinates.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CenterOfMass {
    pub row: f64,
    pub col: f64,
}

impl CenterOfMass {
    /// Integer pixel the centroid falls in.
    pub fn floor(&self) -> (isize, isize) {
        (self.row.floor() as isize, self.col.floor() as isize)
    }
}
