use crate::MIN_LEVEL;

/*
Breakpoint Automation Curves
============================

Every sound in this crate is shaped by time-stamped parameter trajectories:
a gain that ramps up over 30ms and decays away by 120ms, a frequency that
glides from 800Hz down to 400Hz. A Curve is the value of one such parameter
as a pure function of time, described by a list of breakpoints.

Vocabulary
----------

  breakpoint  A (time, value, ramp) triple. The curve arrives at `value`
              at `time`, approaching it with the given ramp shape from
              the previous breakpoint.

  t0          The trigger instant. All times are in seconds relative to
              t0; a node evaluates its curves against its own elapsed time.

Ramp Shapes
-----------

Step:         Holds the previous value, then jumps at the breakpoint time.
              Used to place a parameter "now" (gain starts at full volume).

Linear:       A straight line from the previous value to the target.
                  v(t) = v0 + (v1 - v0) * progress

Exponential:  A constant-ratio sweep, which the ear hears as an even
              glide for both pitch and loudness:
                  v(t) = v0 * (v1 / v0)^progress
              Zero has no defined ratio, so both endpoints are floored
              at MIN_LEVEL. A "decay to silence" therefore targets
              MIN_LEVEL rather than 0.

Before the first breakpoint the curve holds its initial value (the first
ramp, if any, anchors at t = 0). After the last breakpoint it holds the
last target forever. Breakpoints must be pushed in non-decreasing time
order; evaluation is O(n) in the breakpoint count, which is at most three
for the recipes in this crate.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
enum Ramp {
    Step,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, Copy)]
struct Breakpoint {
    time: f32,
    value: f32,
    ramp: Ramp,
}

/// A scalar parameter automated over time by breakpoints.
#[derive(Debug, Clone)]
pub struct Curve {
    initial: f32,
    points: Vec<Breakpoint>,
}

impl Curve {
    /// A curve that holds `initial` until the first breakpoint (forever,
    /// if none are added).
    pub fn new(initial: f32) -> Self {
        Self {
            initial,
            points: Vec::new(),
        }
    }

    /// A constant parameter. Alias for `new` that reads better at call
    /// sites that never add breakpoints.
    pub fn constant(value: f32) -> Self {
        Self::new(value)
    }

    /// Jump to `value` at `time`.
    pub fn set_at(mut self, value: f32, time: f32) -> Self {
        self.push(Breakpoint {
            time,
            value,
            ramp: Ramp::Step,
        });
        self
    }

    /// Ramp linearly from the previous breakpoint (or the initial value
    /// at t = 0) to `value`, arriving at `time`.
    pub fn linear_to(mut self, value: f32, time: f32) -> Self {
        self.push(Breakpoint {
            time,
            value,
            ramp: Ramp::Linear,
        });
        self
    }

    /// Ramp exponentially to `value`, arriving at `time`. Endpoints are
    /// floored at MIN_LEVEL so the ratio stays defined.
    pub fn exp_to(mut self, value: f32, time: f32) -> Self {
        self.push(Breakpoint {
            time,
            value,
            ramp: Ramp::Exponential,
        });
        self
    }

    fn push(&mut self, point: Breakpoint) {
        debug_assert!(
            self.points.last().map_or(true, |p| p.time <= point.time),
            "breakpoints must be pushed in time order"
        );
        self.points.push(point);
    }

    /// Time of the last breakpoint, or 0.0 for a constant curve.
    pub fn end_time(&self) -> f32 {
        self.points.last().map_or(0.0, |p| p.time)
    }

    /// Evaluate the curve at `t` seconds after the trigger instant.
    pub fn value_at(&self, t: f32) -> f32 {
        // Anchor of the segment currently in effect
        let mut prev_time = 0.0f32;
        let mut prev_value = self.initial;

        for point in &self.points {
            if t < point.time {
                return match point.ramp {
                    Ramp::Step => prev_value,
                    Ramp::Linear => {
                        let span = point.time - prev_time;
                        if span <= 0.0 {
                            return point.value;
                        }
                        let progress = (t - prev_time) / span;
                        prev_value + (point.value - prev_value) * progress
                    }
                    Ramp::Exponential => {
                        let span = point.time - prev_time;
                        if span <= 0.0 {
                            return point.value;
                        }
                        let progress = (t - prev_time) / span;
                        let v0 = prev_value.max(MIN_LEVEL);
                        let v1 = point.value.max(MIN_LEVEL);
                        v0 * (v1 / v0).powf(progress)
                    }
                };
            }
            prev_time = point.time;
            prev_value = point.value;
        }

        prev_value
    }
}
