// src/rendering_lib/mesh.rs

use shadow_caster::canvas::{Canvas, Color};
use shadow_caster::geometry::Point2;

use super::vertex::Vertex;

const LINE_WIDTH: f32 = 1.0;
const CIRCLE_SEGMENTS: usize = 24;

/// Triangle list for one frame, built from canvas calls.
#[derive(Default)]
pub struct FrameMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl FrameMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Fans a convex outline around its first vertex.
    fn add_convex(&mut self, points: &[Point2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let start = self.vertices.len() as u32;
        self.vertices
            .extend(points.iter().map(|p| Vertex::new([p.x, p.y], color)));
        for i in 1..(points.len() as u32 - 1) {
            self.indices.extend([start, start + i, start + i + 1]);
        }
    }

    /// A line as a quad `LINE_WIDTH` wide, centred on the segment.
    fn add_thick_line(&mut self, from: Point2, to: Point2, color: Color) {
        let d = to.sub(&from);
        let length = d.dot(&d).sqrt();
        if length == 0.0 {
            return;
        }
        let half = LINE_WIDTH * 0.5;
        let nx = -d.y / length * half;
        let ny = d.x / length * half;
        self.add_convex(
            &[
                Point2::new(from.x + nx, from.y + ny),
                Point2::new(to.x + nx, to.y + ny),
                Point2::new(to.x - nx, to.y - ny),
                Point2::new(from.x - nx, from.y - ny),
            ],
            color,
        );
    }
}

impl Canvas for FrameMesh {
    fn fill_rect(&mut self, min: Point2, max: Point2, color: Color) {
        self.add_convex(
            &[min, Point2::new(max.x, min.y), max, Point2::new(min.x, max.y)],
            color,
        );
    }

    fn line(&mut self, from: Point2, to: Point2, color: Color) {
        self.add_thick_line(from, to, color);
    }

    fn circle(&mut self, center: Point2, radius: f32, color: Color) {
        let point_at = |i: usize| {
            let angle = i as f32 * std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
            Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        };
        for i in 0..CIRCLE_SEGMENTS {
            self.add_thick_line(point_at(i), point_at(i + 1), color);
        }
    }

    fn fill_triangle(&mut self, a: Point2, b: Point2, c: Point2, color: Color) {
        self.add_convex(&[a, b, c], color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_two_triangles() {
        let mut mesh = FrameMesh::new();
        mesh.fill_rect(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0), [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let mut mesh = FrameMesh::new();
        mesh.line(Point2::new(3.0, 3.0), Point2::new(3.0, 3.0), [1.0; 4]);
        assert!(mesh.is_empty());
    }

    #[test]
    fn circle_outline_closes() {
        let mut mesh = FrameMesh::new();
        mesh.circle(Point2::new(10.0, 10.0), 5.0, [1.0; 4]);
        assert_eq!(mesh.indices.len(), CIRCLE_SEGMENTS * 6);
    }
}
