//! Mass-spring-damper smoothing for the scroll signal.

/// Largest integration step; longer frames are split into sub-steps.
const MAX_STEP: f64 = 1.0 / 120.0;
/// Frames longer than this (a backgrounded tab, a debugger pause) are treated
/// as this long.
const MAX_FRAME: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_tolerance: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            rest_tolerance: 0.001,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Moves straight to `value` with no motion in flight. Non-finite values
    /// are ignored.
    pub fn jump_to(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_resting(&self) -> bool {
        let tolerance = self.config.rest_tolerance;
        (self.target - self.value).abs() < tolerance && self.velocity.abs() < tolerance
    }

    /// Advances the spring by `dt` seconds. Returns whether it is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.settle() {
            return false;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.integrate(h);
            remaining -= h;
            if self.settle() {
                return false;
            }
        }
        true
    }

    fn integrate(&mut self, dt: f64) {
        let SpringConfig {
            stiffness, damping, ..
        } = self.config;
        self.velocity += (stiffness * (self.target - self.value) - damping * self.velocity) * dt;
        self.value += self.velocity * dt;
    }

    fn settle(&mut self) -> bool {
        if self.is_resting() {
            self.value = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_default_is_overdamped() {
        let config = SpringConfig::default();
        assert_eq!(config.stiffness, 100.0);
        assert_eq!(config.damping, 30.0);
        assert_eq!(config.rest_tolerance, 0.001);
        // at or above critical damping for a unit mass
        assert!(config.damping >= 2.0 * config.stiffness.sqrt());
    }

    #[test]
    fn test_idempotent_at_rest() {
        let mut spring = Spring::new(SpringConfig::default(), 0.4);
        let before = spring.clone();
        for _ in 0..10 {
            assert!(!spring.step(FRAME));
        }
        assert_eq!(spring, before);
    }

    #[test]
    fn test_step_response_converges_without_overshoot() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);

        let mut ticks = 0;
        let mut peak = 0.0_f64;
        while spring.step(FRAME) {
            peak = peak.max(spring.value());
            ticks += 1;
            assert!(ticks < 600, "spring failed to settle within ten seconds");
        }

        assert!(peak <= 1.0 + 1e-6, "overshoot to {peak}");
        assert!((spring.value() - 1.0).abs() < spring.config.rest_tolerance);
        assert!(spring.is_resting());
        assert_eq!(spring.velocity, 0.0);
    }

    #[test]
    fn test_long_frame_is_substepped() {
        let mut coarse = Spring::new(SpringConfig::default(), 0.0);
        coarse.set_target(1.0);
        coarse.step(0.2);

        let mut fine = Spring::new(SpringConfig::default(), 0.0);
        fine.set_target(1.0);
        for _ in 0..24 {
            fine.step(MAX_STEP);
        }

        assert!((coarse.value() - fine.value()).abs() < 1e-9);
        assert!(coarse.value() > 0.0 && coarse.value() < 1.0);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        for _ in 0..10 {
            spring.step(FRAME);
        }
        assert!(spring.velocity > 0.0);

        spring.set_target(0.0);
        while spring.step(FRAME) {}
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_jump_to_rests_immediately() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(FRAME);
        spring.jump_to(0.5);
        assert!(spring.is_resting());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 0.5);
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(f64::NAN);
        spring.set_target(f64::INFINITY);
        spring.jump_to(f64::NEG_INFINITY);
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 0.0);

        spring.set_target(1.0);
        let mut ticks = 0;
        while spring.step(FRAME) {
            ticks += 1;
            assert!(ticks < 600, "spring failed to settle within ten seconds");
        }
        assert_eq!(spring.value(), 1.0);
    }
}
