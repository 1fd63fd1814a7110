//! Drawing surface for filled circles
//!
//! The simulation only ever needs to clear the screen and draw filled
//! circles. [`Canvas`] is that surface; [`CircleBatch`] implements it by
//! tessellating each circle into triangles that the GPU renderer uploads
//! once per frame.

use std::f32::consts::TAU;

use common::Vertex;
use glam::Vec2;

pub trait Canvas {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);

    /// Color used by subsequent fills
    fn set_color(&mut self, color: [f32; 4]);

    /// Fill a circle approximated by `segments` edge segments
    fn fill_circle(&mut self, center: Vec2, radius: f32, segments: u32);
}

/// Triangle list built from circle fans, ready for upload
#[derive(Debug, Clone)]
pub struct CircleBatch {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
    color: [f32; 4],
}

impl CircleBatch {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Preallocate room for `circles` circles of `segments` segments each
    pub fn with_capacity(circles: usize, segments: u32) -> Self {
        let mut batch = Self::new();
        batch.vertices.reserve(circles * Self::vertices_per_circle(segments));
        batch
    }

    /// A fan of `segments` slices expands to three vertices per slice
    pub fn vertices_per_circle(segments: u32) -> usize {
        segments as usize * 3
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

impl Default for CircleBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for CircleBatch {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, segments: u32) {
        if segments < 3 {
            return;
        }

        // Rim point i sits at angle TAU * i / segments; the last slice closes
        // back onto point 0.
        let rim = |i: u32| {
            let angle = TAU * (i as f32 / segments as f32);
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        };

        let hub = Vertex::new(center.to_array(), self.color);
        for i in 0..segments {
            self.vertices.push(hub);
            self.vertices.push(Vertex::new(rim(i).to_array(), self.color));
            self.vertices.push(Vertex::new(rim(i + 1).to_array(), self.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_expands_to_one_triangle_per_segment() {
        let mut batch = CircleBatch::new();
        batch.fill_circle(Vec2::new(0.2, -0.1), 0.05, 50);

        assert_eq!(batch.vertex_count(), 150);
        assert_eq!(batch.vertices().len(), CircleBatch::vertices_per_circle(50));
    }

    #[test]
    fn rim_vertices_lie_on_the_circle() {
        let center = Vec2::new(0.3, 0.4);
        let mut batch = CircleBatch::new();
        batch.fill_circle(center, 0.1, 12);

        for triangle in batch.vertices().chunks(3) {
            assert_eq!(triangle[0].position, center.to_array());
            for rim in &triangle[1..] {
                let distance = Vec2::from_array(rim.position).distance(center);
                assert_relative_eq!(distance, 0.1, max_relative = 1e-4);
            }
        }
    }

    #[test]
    fn fan_closes_on_its_first_rim_point() {
        let mut batch = CircleBatch::new();
        batch.fill_circle(Vec2::ZERO, 1.0, 8);

        let vertices = batch.vertices();
        let first = Vec2::from_array(vertices[1].position);
        let last = Vec2::from_array(vertices[vertices.len() - 1].position);
        assert_relative_eq!(first.x, last.x, epsilon = 1e-5);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-5);
    }

    #[test]
    fn clear_drops_previous_frame_and_keeps_color() {
        let mut batch = CircleBatch::new();
        batch.set_color([1.0, 0.0, 0.0, 1.0]);
        batch.fill_circle(Vec2::ZERO, 0.5, 10);
        batch.clear([0.0, 0.0, 0.0, 1.0]);
        batch.fill_circle(Vec2::ZERO, 0.5, 10);

        assert_eq!(batch.vertex_count(), 30);
        assert!(batch.vertices().iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn degenerate_circle_draws_nothing() {
        let mut batch = CircleBatch::new();
        batch.fill_circle(Vec2::ZERO, 0.5, 2);

        assert_eq!(batch.vertex_count(), 0);
    }
}
