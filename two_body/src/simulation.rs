//! Frame-by-frame integration of the body registry

use crate::canvas::Canvas;
use crate::config::{SimConfig, BACKGROUND_COLOR, BODY_COLOR, CIRCLE_SEGMENTS, SECONDS_PER_DAY};
use crate::physics::{gravitational_acceleration, BodyRegistry};

/// The physics simulation state
pub struct Simulation<const N: usize> {
    pub bodies: BodyRegistry<N>,
    pub config: SimConfig,
    frames: u64,
}

impl Simulation<2> {
    /// Earth and Moon with the default scales
    pub fn earth_moon() -> Self {
        Self::new(BodyRegistry::earth_moon(), SimConfig::default())
    }
}

impl<const N: usize> Simulation<N> {
    pub fn new(bodies: BodyRegistry<N>, config: SimConfig) -> Self {
        Self {
            bodies,
            config,
            frames: 0,
        }
    }

    /// Advance one frame and draw every body onto `canvas`.
    ///
    /// Bodies are handled one at a time in registry order: gravity, move,
    /// draw, wall bounce, then a collision test against every other body.
    /// Gravity reads the positions from the start of the frame, so it does
    /// not depend on that order. Collisions do: a body moves with any
    /// reversal applied by an earlier body before its own test runs.
    pub fn step(&mut self, canvas: &mut impl Canvas) {
        self.frames += 1;

        canvas.clear(BACKGROUND_COLOR);
        canvas.set_color(BODY_COLOR);

        let start = self.bodies.clone();
        for i in 0..N {
            self.advance_body(i, &start);

            let body = &mut self.bodies[i];
            canvas.fill_circle(body.position, body.display_radius, CIRCLE_SEGMENTS);
            body.reflect_off_walls();

            for j in 0..N {
                if let Some((body, other)) = self.bodies.pair_mut(i, j) {
                    if body.check_collision(other) {
                        log::trace!("Bodies {} and {} overlap on frame {}", i, j, self.frames);
                    }
                }
            }
        }
    }

    /// Gravity from every other body, then an explicit Euler position update.
    ///
    /// The body's velocity is complete before its position moves.
    fn advance_body(&mut self, i: usize, start: &BodyRegistry<N>) {
        let config = self.config;
        let body = &mut self.bodies[i];

        for (j, other) in start.iter().enumerate() {
            if i == j {
                continue;
            }
            let acceleration = gravitational_acceleration(&start[i], other, &config);
            body.accelerate(acceleration, &config);
        }

        body.update_position(&config);
    }

    /// Number of frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulated time elapsed, in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.frames as f64 * self.config.time_scale as f64
    }

    /// Simulated time elapsed, in days
    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_seconds() / SECONDS_PER_DAY as f64
    }
}

impl Default for Simulation<2> {
    fn default() -> Self {
        Self::earth_moon()
    }
}
