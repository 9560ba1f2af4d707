// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// Outline capacity of a single shadow: two endpoints, two exits and at most
/// three viewport corners (a sub-180° wedge never contains all four).
pub const MAX_SHADOW_VERTICES: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn sub(&self, other: &Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }

    /// Rounds a solved point onto the renderer's pixel lattice.
    pub fn from_dvec2_rounded(v: DVec2) -> Self {
        Self::new(v.x.round() as f32, v.y.round() as f32)
    }
}

/// Integer grid intersection, addressed by multiplier rather than pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    pub col: i32,
    pub row: i32,
}

impl GridPoint {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn to_pixel(&self, grid_size: u32) -> Point2 {
        let g = grid_size as f32;
        Point2::new(self.col as f32 * g, self.row as f32 * g)
    }
}

/// Which side of the play area an edge or exit belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// The lit play area. Axis aligned, y grows downwards, fixed for a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn diagonal(&self) -> f64 {
        (self.width() as f64).hypot(self.height() as f64)
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    pub fn clamp(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x.clamp(self.left, self.right),
            p.y.clamp(self.top, self.bottom),
        )
    }

    /// Boundary edges in the order exits are searched: left, top, right, bottom.
    pub fn edges(&self) -> [(Edge, Point2, Point2); 4] {
        let tl = Point2::new(self.left, self.top);
        let tr = Point2::new(self.right, self.top);
        let br = Point2::new(self.right, self.bottom);
        let bl = Point2::new(self.left, self.bottom);
        [
            (Edge::Left, tl, bl),
            (Edge::Top, tl, tr),
            (Edge::Right, tr, br),
            (Edge::Bottom, bl, br),
        ]
    }

    /// Corners clockwise from the top-left.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.left, self.top),
            Point2::new(self.right, self.top),
            Point2::new(self.right, self.bottom),
            Point2::new(self.left, self.bottom),
        ]
    }
}

/// One occluded region: `endpoint1, exit1, corners.., exit2, endpoint2`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowPolygon {
    vertices: [Point2; MAX_SHADOW_VERTICES], // Kept private for controlled access
    count: usize,
}

impl ShadowPolygon {
    /// Assembles the outline. Corners beyond the vertex capacity are dropped,
    /// which cannot happen for a wedge narrower than a half-plane.
    pub fn new(
        endpoint1: Point2,
        exit1: Point2,
        corners: &[Point2],
        exit2: Point2,
        endpoint2: Point2,
    ) -> Self {
        let mut vertices = [Point2::default(); MAX_SHADOW_VERTICES];
        let corner_count = corners.len().min(MAX_SHADOW_VERTICES - 4);
        vertices[0] = endpoint1;
        vertices[1] = exit1;
        vertices[2..2 + corner_count].copy_from_slice(&corners[..corner_count]);
        vertices[2 + corner_count] = exit2;
        vertices[3 + corner_count] = endpoint2;
        Self {
            vertices,
            count: corner_count + 4,
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices[..self.count]
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn endpoints(&self) -> (Point2, Point2) {
        (self.vertices[0], self.vertices[self.count - 1])
    }

    pub fn exits(&self) -> (Point2, Point2) {
        (self.vertices[1], self.vertices[self.count - 2])
    }

    pub fn corners(&self) -> &[Point2] {
        &self.vertices[2..self.count - 2]
    }

    /// The fill triangles: `(e1, exit1, exit2)`, `(e2, e1, exit2)`, then one
    /// triangle per wrapped corner fanned around `exit2`.
    pub fn triangles(&self) -> impl Iterator<Item = [Point2; 3]> + '_ {
        let (e1, e2) = self.endpoints();
        let (exit1, exit2) = self.exits();
        let corners = self.corners();
        let base = [[e1, exit1, exit2], [e2, e1, exit2]];
        let wrap = corners.iter().enumerate().map(move |(i, &corner)| {
            let previous = if i == 0 { exit1 } else { corners[i - 1] };
            [corner, previous, exit2]
        });
        base.into_iter().chain(wrap)
    }

    pub fn area(&self) -> f32 {
        if self.count < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..self.count {
            let j = (i + 1) % self.count;
            area += self.vertices[i].x * self.vertices[j].y;
            area -= self.vertices[j].x * self.vertices[i].y;
        }
        area.abs() / 2.0
    }
}
