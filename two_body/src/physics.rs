//! Bodies, the fixed body registry, and the pairwise physics between them

use glam::Vec2;

use crate::config::SimConfig;

/// A body in the simulation.
///
/// `position` is stored in simulation space while `velocity` is in real
/// meters per second; [`Body::update_position`] converts between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radius on screen, also used for collision tests (simulation units)
    pub display_radius: f32,
    /// Mass in kg
    pub mass: f32,
    /// Physical radius in meters
    pub real_radius: f32,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, display_radius: f32, mass: f32, real_radius: f32) -> Self {
        debug_assert!(display_radius > 0.0, "display radius must be positive");
        debug_assert!(mass > 0.0, "mass must be positive");
        debug_assert!(real_radius > 0.0, "real radius must be positive");

        Self {
            position,
            velocity,
            display_radius,
            mass,
            real_radius,
        }
    }

    /// Earth at the origin, at rest
    pub fn earth() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, 0.1, 5.97e24, 6_371_000.0)
    }

    /// Moon 384,400 km to the right of the origin with its mean orbital speed
    pub fn moon() -> Self {
        Self::new(Vec2::new(0.384, 0.0), Vec2::new(0.0, 1022.0), 0.05, 7.35e22, 1_737_000.0)
    }

    /// Apply an acceleration (m/s²) for one frame of simulated time
    pub fn accelerate(&mut self, acceleration: Vec2, config: &SimConfig) {
        self.velocity += acceleration * config.time_scale;
    }

    /// Explicit Euler step: advance position by one frame of velocity
    pub fn update_position(&mut self, config: &SimConfig) {
        self.position += self.velocity * config.time_scale * config.space_scale;
    }

    /// Keep the body inside the [-1, 1] viewport.
    ///
    /// Each axis that crosses a wall is pinned exactly at the wall and its
    /// velocity component is flipped.
    pub fn reflect_off_walls(&mut self) {
        let r = self.display_radius;

        if self.position.y - r < -1.0 {
            self.position.y = -1.0 + r;
            self.velocity.y = -self.velocity.y;
        } else if self.position.y + r > 1.0 {
            self.position.y = 1.0 - r;
            self.velocity.y = -self.velocity.y;
        }

        if self.position.x - r < -1.0 {
            self.position.x = -1.0 + r;
            self.velocity.x = -self.velocity.x;
        } else if self.position.x + r > 1.0 {
            self.position.x = 1.0 - r;
            self.velocity.x = -self.velocity.x;
        }
    }

    /// Reverse both bodies if their discs overlap on screen.
    ///
    /// Returns whether a collision was detected.
    pub fn check_collision(&mut self, other: &mut Body) -> bool {
        let distance = (other.position - self.position).length();

        if distance < self.display_radius + other.display_radius {
            self.velocity = -self.velocity;
            other.velocity = -other.velocity;
            true
        } else {
            false
        }
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

/// Gravitational acceleration (m/s²) exerted on `body` by `other`.
///
/// Returns zero when the two bodies' real radii touch or overlap.
pub fn gravitational_acceleration(body: &Body, other: &Body, config: &SimConfig) -> Vec2 {
    let offset = other.position - body.position;
    let distance_sim = offset.length();
    let distance_real = config.to_meters(distance_sim);

    if distance_real < body.real_radius + other.real_radius {
        return Vec2::ZERO;
    }

    let direction = offset / distance_sim;
    let force = config.gravitational_constant * body.mass * other.mass / (distance_real * distance_real);

    direction * (force / body.mass)
}

/// Fixed-size, ordered collection of bodies.
///
/// Bodies are never added or removed after construction.
#[derive(Debug, Clone)]
pub struct BodyRegistry<const N: usize> {
    bodies: [Body; N],
}

impl<const N: usize> BodyRegistry<N> {
    pub fn new(bodies: [Body; N]) -> Self {
        Self { bodies }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    /// Mutable access to two distinct bodies at once
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Body, &mut Body)> {
        if a == b || a >= N || b >= N {
            return None;
        }

        if a < b {
            let (head, tail) = self.bodies.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.bodies.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }

    /// Get the center of mass of all bodies
    pub fn center_of_mass(&self) -> Vec2 {
        let mut total_mass = 0.0;
        let mut com = Vec2::ZERO;

        for body in &self.bodies {
            com += body.position * body.mass;
            total_mass += body.mass;
        }

        if total_mass > 0.0 {
            com / total_mass
        } else {
            Vec2::ZERO
        }
    }

    /// Sum of `mass * velocity` over all bodies (kg·m/s)
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}

impl BodyRegistry<2> {
    /// The Earth-Moon system
    pub fn earth_moon() -> Self {
        Self::new([Body::earth(), Body::moon()])
    }
}

impl<const N: usize> std::ops::Index<usize> for BodyRegistry<N> {
    type Output = Body;

    fn index(&self, index: usize) -> &Body {
        &self.bodies[index]
    }
}

impl<const N: usize> std::ops::IndexMut<usize> for BodyRegistry<N> {
    fn index_mut(&mut self, index: usize) -> &mut Body {
        &mut self.bodies[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, 0.05, 1.0e22, 1.0e6)
    }

    #[test]
    fn gravity_obeys_newtons_third_law() {
        let config = SimConfig::default();
        let a = Body::earth();
        let b = Body::moon();

        let on_a = gravitational_acceleration(&a, &b, &config) * a.mass;
        let on_b = gravitational_acceleration(&b, &a, &config) * b.mass;

        assert_relative_eq!(on_a.x, -on_b.x, max_relative = 1e-5);
        assert_relative_eq!(on_a.y, -on_b.y, epsilon = 1e-3);
    }

    #[test]
    fn gravity_points_toward_other_body() {
        let config = SimConfig::default();
        let a = body_at(-0.2, 0.1);
        let b = body_at(0.3, -0.4);

        let accel = gravitational_acceleration(&a, &b, &config);
        let toward = (b.position - a.position).normalize();

        assert!(accel.length() > 0.0);
        assert_relative_eq!(accel.normalize().dot(toward), 1.0, max_relative = 1e-5);
    }

    #[test]
    fn touching_bodies_exert_no_force() {
        let config = SimConfig::default();
        let a = body_at(0.0, 0.0);
        // 1.5e6 m apart, less than the 2e6 m sum of real radii
        let b = body_at(0.0015, 0.0);

        assert_eq!(gravitational_acceleration(&a, &b, &config), Vec2::ZERO);
        assert_eq!(gravitational_acceleration(&b, &a, &config), Vec2::ZERO);
    }

    #[test]
    fn coincident_bodies_exert_no_force() {
        let config = SimConfig::default();
        let a = body_at(0.25, 0.25);
        let b = a;
        let accel = gravitational_acceleration(&a, &b, &config);

        assert_eq!(accel, Vec2::ZERO);
        assert!(!accel.is_nan());
    }

    #[test]
    fn accelerate_scales_by_time_step() {
        let config = SimConfig::default();
        let mut body = body_at(0.0, 0.0);
        body.accelerate(Vec2::new(1.0e-3, -2.0e-3), &config);

        assert_relative_eq!(body.velocity.x, 50.0, max_relative = 1e-5);
        assert_relative_eq!(body.velocity.y, -100.0, max_relative = 1e-5);
    }

    #[test]
    fn update_position_without_velocity_is_a_no_op() {
        let config = SimConfig::default();
        let mut body = body_at(0.3, -0.7);
        body.update_position(&config);

        assert_eq!(body.position, Vec2::new(0.3, -0.7));
    }

    #[test]
    fn update_position_converts_meters_to_simulation_space() {
        let config = SimConfig::default();
        let mut body = Body::moon();
        body.update_position(&config);

        // 1022 m/s * 50,000 s * 1e-9
        assert_relative_eq!(body.position.x, 0.384);
        assert_relative_eq!(body.position.y, 0.0511, max_relative = 1e-5);
    }

    #[test]
    fn wall_bounce_clamps_to_boundary_and_flips_velocity() {
        let mut body = Body::new(Vec2::new(0.97, -0.99), Vec2::new(300.0, -40.0), 0.1, 1.0, 1.0);
        body.reflect_off_walls();

        assert_relative_eq!(body.position.x, 0.9, max_relative = 1e-6);
        assert_relative_eq!(body.position.y, -0.9, max_relative = 1e-6);
        assert_eq!(body.velocity, Vec2::new(-300.0, 40.0));
    }

    #[test]
    fn wall_bounce_only_touches_crossing_axis() {
        let mut body = Body::new(Vec2::new(-0.99, 0.2), Vec2::new(-5.0, 7.0), 0.05, 1.0, 1.0);
        body.reflect_off_walls();

        assert_relative_eq!(body.position.x, -0.95, max_relative = 1e-6);
        assert_eq!(body.position.y, 0.2);
        assert_eq!(body.velocity, Vec2::new(5.0, 7.0));
    }

    #[test]
    fn body_inside_viewport_is_left_alone() {
        let mut body = Body::moon();
        let before = body;
        body.reflect_off_walls();

        assert_eq!(body, before);
    }

    #[test]
    fn overlapping_bodies_reverse_velocities() {
        let mut a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, -3.0), 0.1, 1.0, 1.0);
        let mut b = Body::new(Vec2::new(0.12, 0.0), Vec2::new(-2.0, 8.0), 0.05, 1.0, 1.0);

        assert!(a.check_collision(&mut b));
        assert_eq!(a.velocity, Vec2::new(-10.0, 3.0));
        assert_eq!(b.velocity, Vec2::new(2.0, -8.0));
    }

    #[test]
    fn separated_bodies_do_not_collide() {
        let mut a = Body::earth();
        let mut b = Body::moon();
        b.velocity = Vec2::new(4.0, 4.0);

        assert!(!a.check_collision(&mut b));
        assert_eq!(b.velocity, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut registry = BodyRegistry::earth_moon();

        let (moon, earth) = registry.pair_mut(1, 0).unwrap();
        assert_eq!(moon.mass, 7.35e22);
        assert_eq!(earth.mass, 5.97e24);

        assert!(registry.pair_mut(1, 1).is_none());
        assert!(registry.pair_mut(0, 2).is_none());
    }

    #[test]
    fn center_of_mass_sits_near_the_heavier_body() {
        let registry = BodyRegistry::earth_moon();
        let com = registry.center_of_mass();

        // 0.384 * m_moon / (m_earth + m_moon)
        assert_relative_eq!(com.x, 0.004670, max_relative = 1e-3);
        assert_eq!(com.y, 0.0);
    }
}
