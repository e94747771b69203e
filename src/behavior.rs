//! Scene behavior interpreter.
//!
//! Per-frame scene callbacks are modeled as a tagged enum of commands
//! executed by a small interpreter against a `Display`, rather than a raw
//! function pointer plus an `(argc, argv)` tuple.

use crate::math::Vec3;

/// A single scene mutation, addressed by mesh index into `Display::meshes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Rotate the target mesh about `axis` by `degrees_per_second * dt`
    /// degrees, about its own center (`mesh_rel`).
    Rotate {
        target: usize,
        axis: Vec3,
        degrees_per_second: f32,
    },
    /// Translate the target mesh by `delta` (absolute, `mesh_abs`).
    Translate { target: usize, delta: Vec3 },
    /// Move the target mesh's center toward `destination` at `speed` units
    /// per second, never overshooting.
    MoveToward {
        target: usize,
        destination: Vec3,
        speed: f32,
    },
    /// Scale the target mesh by `factor` about its own center (`mesh_rel`).
    Scale { target: usize, factor: Vec3 },
}

/// When a `ScheduledBehavior` is permitted to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires only on the frame where `frame_count == 0`.
    Startup,
    /// Fires on every frame.
    Continuous,
}

/// A `Behavior` paired with the `Trigger` that gates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledBehavior {
    pub trigger: Trigger,
    pub behavior: Behavior,
}

impl ScheduledBehavior {
    pub fn new(trigger: Trigger, behavior: Behavior) -> Self {
        ScheduledBehavior { trigger, behavior }
    }

    /// Whether this entry should run on the frame numbered `frame_count`.
    pub fn should_run(&self, frame_count: u64) -> bool {
        match self.trigger {
            Trigger::Startup => frame_count == 0,
            Trigger::Continuous => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_only_runs_on_frame_zero() {
        let b = ScheduledBehavior::new(
            Trigger::Startup,
            Behavior::Translate {
                target: 0,
                delta: Vec3::zeros(),
            },
        );
        assert!(b.should_run(0));
        assert!(!b.should_run(1));
        assert!(!b.should_run(100));
    }

    #[test]
    fn continuous_always_runs() {
        let b = ScheduledBehavior::new(
            Trigger::Continuous,
            Behavior::Rotate {
                target: 0,
                axis: Vec3::new(0.0, 1.0, 0.0),
                degrees_per_second: 10.0,
            },
        );
        assert!(b.should_run(0));
        assert!(b.should_run(42));
    }
}
