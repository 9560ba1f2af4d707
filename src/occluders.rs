// src/occluders.rs

use std::hash::{Hash, Hasher};

use log::debug;

use crate::geometry::{GridPoint, Point2};

/// An undirected wall between two grid intersections.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Segment {
    pub a: GridPoint,
    pub b: GridPoint,
}

impl Segment {
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        Self { a, b }
    }

    pub fn touches(&self, p: GridPoint) -> bool {
        self.a == p || self.b == p
    }

    /// Endpoints in a canonical order, so `{a, b}` and `{b, a}` agree.
    fn ordered(&self) -> (GridPoint, GridPoint) {
        if self.a <= self.b { (self.a, self.b) } else { (self.b, self.a) }
    }

    pub fn to_pixels(&self, grid_size: u32) -> (Point2, Point2) {
        (self.a.to_pixel(grid_size), self.b.to_pixel(grid_size))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

/// Insertion-ordered set of occluders.
#[derive(Clone, Debug, Default)]
pub struct OccluderSet {
    segments: Vec<Segment>,
}

impl OccluderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `{a, b}` unless an equal segment is already stored.
    /// Returns whether the set changed.
    pub fn try_insert(&mut self, a: GridPoint, b: GridPoint) -> bool {
        let segment = Segment::new(a, b);
        if self.segments.contains(&segment) {
            debug!("Ignoring duplicate occluder {:?} - {:?}", a, b);
            return false;
        }
        debug!("Adding occluder {:?} - {:?}", a, b);
        self.segments.push(segment);
        true
    }

    /// Removes every segment with an endpoint at `p`; returns how many went.
    pub fn delete_touching(&mut self, p: GridPoint) -> usize {
        let before = self.segments.len();
        self.segments.retain(|segment| !segment.touches(p));
        let removed = before - self.segments.len();
        if removed > 0 {
            debug!("Removed {} occluder(s) touching {:?}", removed, p);
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} occluder(s)", self.segments.len());
        self.segments.clear();
    }

    /// Current segments in insertion order. The iterator is `Clone`, so it can
    /// be restarted without touching the set.
    pub fn all(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn contains(&self, a: GridPoint, b: GridPoint) -> bool {
        self.segments.contains(&Segment::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<'a> IntoIterator for &'a OccluderSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
