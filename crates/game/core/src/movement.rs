//! Direct position integration for the controllable entity.
//!
//! There is no velocity state: every call adds `direction * speed * elapsed`
//! to one position and clamps it to the viewport minus the entity size.
use crate::config::PlayerConfig;
use crate::geometry::Size;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
}

impl PlayerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Logical movement direction decoded from held keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen space (y grows downward).
    pub const fn delta(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MovementIntegrator {
    position: PlayerPosition,
    speed: f64,
    entity_size: i32,
    viewport: Size,
}

impl MovementIntegrator {
    pub fn new(config: &PlayerConfig, viewport: Size) -> Self {
        let mut integrator = Self {
            position: PlayerPosition::new(config.start_x, config.start_y),
            speed: config.speed,
            entity_size: config.size,
            viewport,
        };
        integrator.clamp();
        integrator
    }

    pub fn position(&self) -> PlayerPosition {
        self.position
    }

    pub fn entity_size(&self) -> i32 {
        self.entity_size
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Updates the clamp bounds and pulls the position back inside them.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.clamp();
        }
    }

    /// Integrates one directional contribution.
    ///
    /// Negative or non-finite `elapsed_seconds` contribute nothing, so a
    /// frame clock that has not measured a rate yet cannot push the entity.
    pub fn move_by(&mut self, dx: f64, dy: f64, elapsed_seconds: f64) {
        let elapsed = if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            elapsed_seconds
        } else {
            0.0
        };

        self.position.x += dx * self.speed * elapsed;
        self.position.y += dy * self.speed * elapsed;
        self.clamp();
    }

    pub fn step(&mut self, direction: Direction, elapsed_seconds: f64) {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy, elapsed_seconds);
    }

    /// Upper clamp bound on each axis. Never negative, even when the entity
    /// is larger than the viewport.
    pub fn max_position(&self) -> PlayerPosition {
        PlayerPosition::new(
            f64::from((self.viewport.width - self.entity_size).max(0)),
            f64::from((self.viewport.height - self.entity_size).max(0)),
        )
    }

    fn clamp(&mut self) {
        let max = self.max_position();
        self.position.x = sanitize(self.position.x).clamp(0.0, max.x);
        self.position.y = sanitize(self.position.y).clamp(0.0, max.y);
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integrator() -> MovementIntegrator {
        MovementIntegrator::new(&PlayerConfig::default(), Size::new(800, 600))
    }

    #[test]
    fn left_at_origin_stays_clamped() {
        let mut m = integrator();
        m.move_by(-1.0, 0.0, 1.0 / 60.0);
        assert_eq!(m.position(), PlayerPosition::new(0.0, 0.0));
    }

    #[test]
    fn one_second_right_moves_speed_units() {
        let mut m = integrator();
        m.step(Direction::Right, 1.0);
        assert_eq!(m.position().x, 96.0);
        assert_eq!(m.position().y, 0.0);
    }

    #[test]
    fn diagonal_is_sum_of_axis_calls() {
        let mut m = integrator();
        m.step(Direction::Right, 0.5);
        m.step(Direction::Down, 0.5);
        assert_eq!(m.position(), PlayerPosition::new(48.0, 48.0));
    }

    #[test]
    fn large_elapsed_clamps_to_far_edge() {
        let mut m = integrator();
        m.step(Direction::Right, 1000.0);
        m.step(Direction::Down, 1000.0);
        assert_eq!(m.position(), PlayerPosition::new(768.0, 568.0));
    }

    #[test]
    fn invalid_elapsed_is_ignored() {
        let mut m = integrator();
        m.step(Direction::Right, 1.0);
        m.step(Direction::Right, -5.0);
        m.step(Direction::Right, f64::NAN);
        m.step(Direction::Right, f64::INFINITY);
        assert_eq!(m.position().x, 96.0);
    }

    #[test]
    fn shrinking_viewport_reclamps() {
        let mut m = integrator();
        m.step(Direction::Right, 1000.0);
        m.set_viewport(Size::new(400, 300));
        assert_eq!(m.position().x, 368.0);
    }

    #[test]
    fn randomized_walk_stays_in_bounds() {
        let mut m = integrator();
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        for _ in 0..10_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let direction = match seed % 4 {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            let elapsed = (seed >> 8) as f64 / u64::MAX as f64 * 2.0;
            m.step(direction, elapsed);

            let p = m.position();
            assert!((0.0..=768.0).contains(&p.x));
            assert!((0.0..=568.0).contains(&p.y));
        }
    }
}
