//! Tile-space geometry: points, bounds, collision tests and drag tracking.
//!
//! Flat value types with explicit conversions between them; nothing here knows
//! about a GUI toolkit. Mouse handlers feed positions into a [`Drag`] and hit
//! tests into [`Rect`], then raise signals with the results.
//!
//! Arithmetic saturates at the `i32`/`u32` bounds instead of overflowing.

use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Lift into 3D on layer `z`.
    pub const fn with_z(self, z: i32) -> Point3 {
        Point3::new(self.x, self.y, z)
    }

    /// Manhattan distance, the number of tile steps between two points.
    pub fn manhattan(self, other: Point2) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// A tile position on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Drop the layer.
    pub const fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2> for Point3 {
    fn from(p: Point2) -> Self {
        p.with_z(0)
    }
}

impl Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(
            self.x.saturating_add(rhs.x),
            self.y.saturating_add(rhs.y),
            self.z.saturating_add(rhs.z),
        )
    }
}

impl Sub for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(
            self.x.saturating_sub(rhs.x),
            self.y.saturating_sub(rhs.y),
            self.z.saturating_sub(rhs.z),
        )
    }
}

/// Axis-aligned bounds. `origin` is inclusive, `origin + size` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point2,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(origin: Point2, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn right(&self) -> i64 {
        self.origin.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.origin.y as i64 + self.height as i64
    }

    pub fn contains(&self, p: Point2) -> bool {
        let (x, y) = (p.x as i64, p.y as i64);
        x >= self.origin.x as i64
            && x < self.right()
            && y >= self.origin.y as i64
            && y < self.bottom()
    }

    /// Collision test. Rectangles that only share an edge don't intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.origin.x as i64) < other.right()
            && (other.origin.x as i64) < self.right()
            && (self.origin.y as i64) < other.bottom()
            && (other.origin.y as i64) < self.bottom()
    }

    pub fn translate(self, by: Point2) -> Rect {
        Rect::new(self.origin + by, self.width, self.height)
    }
}

/// Tracks a drag gesture from press to release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    anchor: Point2,
    current: Point2,
}

impl Drag {
    pub fn start(at: Point2) -> Self {
        Self {
            anchor: at,
            current: at,
        }
    }

    /// Record a new pointer position and return the step since the last one.
    pub fn move_to(&mut self, at: Point2) -> Point2 {
        let step = at - self.current;
        self.current = at;
        step
    }

    pub fn anchor(&self) -> Point2 {
        self.anchor
    }

    pub fn current(&self) -> Point2 {
        self.current
    }

    /// Total offset from where the drag started.
    pub fn offset(&self) -> Point2 {
        self.current - self.anchor
    }

    /// Bounds spanned by the anchor and the current position, both inclusive.
    /// A span over the whole `i32` range is one tile short, since the size
    /// tops out at `u32::MAX`.
    pub fn selection(&self) -> Rect {
        let x = self.anchor.x.min(self.current.x);
        let y = self.anchor.y.min(self.current.y);
        let width = self.anchor.x.abs_diff(self.current.x).saturating_add(1);
        let height = self.anchor.y.abs_diff(self.current.y).saturating_add(1);
        Rect::new(Point2::new(x, y), width, height)
    }
}
