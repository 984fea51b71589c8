//! Interruptible timed action sequencer.
//!
//! An [`ActionSequencer`] owns a small set of continuous parameters (panel
//! positions, a glow intensity, or nothing at all for pure timing) and runs
//! one labelled action at a time as a queue of [`Step`]s:
//!
//! - [`Step::MoveTo`] – move every parameter toward a target at a fixed rate
//! - [`Step::Wait`] – let a fixed amount of time pass
//!
//! The sequencer has no clock of its own. The owner calls
//! [`tick`](ActionSequencer::tick) once per frame with the frame delta and a
//! step may stay incomplete across any number of ticks.
//!
//! # Preemption
//!
//! [`request`](ActionSequencer::request) always succeeds. A running sequence
//! is dropped on the spot and its action is handed back to the caller so that
//! ancillary effects (a looping sound, a displayed line) can be stopped before
//! the new action's effects start. Parameters keep whatever partial progress
//! they made, so a door that was half open starts closing from where it is.
//!
//! # Example
//!
//! ```
//! use stagehand::sequencer::{ActionSequencer, Step, TickOutcome};
//!
//! let mut seq: ActionSequencer<&str, f32> = ActionSequencer::new([0.0]);
//! seq.request("raise", [Step::move_to([2.0], 1.0)]);
//! assert_eq!(seq.tick(1.0), TickOutcome::Running("raise"));
//! assert_eq!(seq.tick(1.0), TickOutcome::Finished("raise"));
//! assert_eq!(seq.params(), &[2.0]);
//! assert!(seq.is_complete());
//! ```

use std::collections::VecDeque;

use glam::Vec3;
use smallvec::SmallVec;

/// Default completion tolerance (absolute distance).
pub const DEFAULT_EPSILON: f32 = 1e-3;

/// Parameter list; doors have at most two panels so this stays inline.
pub type Params<P> = SmallVec<[P; 2]>;

/// A value the sequencer can move toward a target at a bounded rate.
pub trait Tweenable: Copy + std::fmt::Debug {
    /// Absolute distance between two values.
    fn distance_to(self, other: Self) -> f32;
    /// Move toward `target` by at most `max_step`, landing exactly on it when
    /// it is within reach.
    fn step_towards(self, target: Self, max_step: f32) -> Self;
}

impl Tweenable for f32 {
    fn distance_to(self, other: f32) -> f32 {
        (other - self).abs()
    }

    fn step_towards(self, target: f32, max_step: f32) -> f32 {
        let delta = target - self;
        if delta.abs() <= max_step {
            target
        } else {
            self + max_step.copysign(delta)
        }
    }
}

impl Tweenable for Vec3 {
    fn distance_to(self, other: Vec3) -> f32 {
        self.distance(other)
    }

    fn step_towards(self, target: Vec3, max_step: f32) -> Vec3 {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step || dist == 0.0 {
            target
        } else {
            self + delta * (max_step / dist)
        }
    }
}

/// One unit of an action sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<P> {
    /// Move every parameter toward `targets` at `rate` units per second.
    /// A non-positive rate snaps on the next tick.
    MoveTo { targets: Params<P>, rate: f32 },
    /// Let `duration` seconds pass.
    Wait { duration: f32, elapsed: f32 },
}

impl<P> Step<P> {
    pub fn move_to(targets: impl IntoIterator<Item = P>, rate: f32) -> Self {
        Step::MoveTo {
            targets: targets.into_iter().collect(),
            rate,
        }
    }

    pub fn wait(duration: f32) -> Self {
        Step::Wait {
            duration,
            elapsed: 0.0,
        }
    }
}

/// Result of advancing a sequencer by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome<A> {
    /// Nothing was running.
    Idle,
    /// The action is still in progress.
    Running(A),
    /// The action's last step completed during this tick.
    Finished(A),
}

#[derive(Debug, Clone)]
struct ActiveSequence<A, P> {
    action: A,
    steps: VecDeque<Step<P>>,
}

/// Runs one labelled action at a time over a fixed set of parameters.
#[derive(Debug, Clone)]
pub struct ActionSequencer<A, P> {
    params: Params<P>,
    /// Targets of the current (or most recently run) `MoveTo` step.
    targets: Params<P>,
    active: Option<ActiveSequence<A, P>>,
    epsilon: f32,
}

impl<A: Copy, P: Tweenable> ActionSequencer<A, P> {
    /// Create an idle sequencer whose parameters rest at `rest`.
    pub fn new(rest: impl IntoIterator<Item = P>) -> Self {
        let params: Params<P> = rest.into_iter().collect();
        Self {
            targets: params.clone(),
            params,
            active: None,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Current parameter values.
    pub fn params(&self) -> &[P] {
        &self.params
    }

    /// Targets of the current or last `MoveTo` step. Equal to the rest values
    /// until the first move.
    pub fn targets(&self) -> &[P] {
        &self.targets
    }

    pub fn current_action(&self) -> Option<A> {
        self.active.as_ref().map(|a| a.action)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// True when nothing is running and every parameter sits on its target.
    pub fn is_complete(&self) -> bool {
        self.active.is_none() && self.is_at(&self.targets)
    }

    /// Whether every parameter is within tolerance of `values`.
    pub fn is_at(&self, values: &[P]) -> bool {
        same_within(&self.params, values, self.epsilon)
    }

    /// Start `action`, replacing whatever was running.
    ///
    /// Returns the preempted action, if any. Leading steps that are already
    /// satisfied are settled immediately, so asking for the state the
    /// parameters already rest in leaves the sequencer complete.
    pub fn request(&mut self, action: A, steps: impl IntoIterator<Item = Step<P>>) -> Option<A> {
        let preempted = self.cancel();
        let steps: VecDeque<Step<P>> = steps
            .into_iter()
            .map(|step| self.fit_step(step))
            .collect();
        self.active = Some(ActiveSequence { action, steps });
        self.settle();
        preempted
    }

    /// Drop the running sequence, keeping the parameters where they are.
    pub fn cancel(&mut self) -> Option<A> {
        self.active.take().map(|a| a.action)
    }

    /// Advance the current step by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickOutcome<A> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Idle;
        };
        let action = active.action;
        match active.steps.front_mut() {
            Some(Step::MoveTo { targets, rate }) => {
                let max_step = if *rate > 0.0 { *rate * dt } else { f32::INFINITY };
                for (param, target) in self.params.iter_mut().zip(targets.iter()) {
                    // Inside the tolerance band counts as arrived.
                    if param.distance_to(*target) <= max_step + self.epsilon {
                        *param = *target;
                    } else {
                        *param = param.step_towards(*target, max_step);
                    }
                }
            }
            Some(Step::Wait { elapsed, .. }) => *elapsed += dt,
            None => {}
        }
        self.settle();
        if self.active.is_some() {
            TickOutcome::Running(action)
        } else {
            TickOutcome::Finished(action)
        }
    }

    /// Complete the current step right away (a move snaps to its targets)
    /// and settle whatever follows.
    pub fn skip_step(&mut self) -> TickOutcome<A> {
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Idle;
        };
        let action = active.action;
        if let Some(Step::MoveTo { targets, .. }) = active.steps.front() {
            self.params.clone_from(targets);
        }
        active.steps.pop_front();
        self.settle();
        if self.active.is_some() {
            TickOutcome::Running(action)
        } else {
            TickOutcome::Finished(action)
        }
    }

    /// Make a `MoveTo` carry exactly one target per parameter. Missing
    /// targets hold the parameter in place; extra ones are dropped.
    fn fit_step(&self, step: Step<P>) -> Step<P> {
        match step {
            Step::MoveTo { mut targets, rate } => {
                if targets.len() != self.params.len() {
                    log::warn!(
                        "MoveTo carries {} targets for {} parameters",
                        targets.len(),
                        self.params.len()
                    );
                    targets.truncate(self.params.len());
                    let held = self.params[targets.len()..].to_vec();
                    targets.extend(held);
                }
                Step::MoveTo { targets, rate }
            }
            wait => wait,
        }
    }

    /// Pop every leading step that is already complete. Ends the sequence
    /// when the queue runs dry.
    fn settle(&mut self) {
        let Self {
            params,
            targets,
            active,
            epsilon,
        } = self;
        let Some(seq) = active.as_mut() else {
            return;
        };
        loop {
            match seq.steps.front() {
                Some(Step::MoveTo { targets: step_targets, .. }) => {
                    targets.clone_from(step_targets);
                    if !same_within(&params[..], &step_targets[..], *epsilon) {
                        return;
                    }
                    params.clone_from(step_targets);
                }
                Some(Step::Wait { duration, elapsed }) => {
                    if elapsed < duration {
                        return;
                    }
                }
                None => {
                    *active = None;
                    return;
                }
            }
            seq.steps.pop_front();
        }
    }
}

fn same_within<P: Tweenable>(a: &[P], b: &[P], epsilon: f32) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| x.distance_to(*y) <= epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        Open,
        Close,
    }

    fn door() -> ActionSequencer<Act, Vec3> {
        ActionSequencer::new([Vec3::ZERO, Vec3::ZERO])
    }

    const OPEN: [Vec3; 2] = [Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];

    #[test]
    fn test_step_towards_never_overshoots() {
        assert_eq!(0.0f32.step_towards(1.0, 0.4), 0.4);
        assert_eq!(0.9f32.step_towards(1.0, 0.4), 1.0);
        assert_eq!(1.0f32.step_towards(-1.0, 0.5), 0.5);
        let v = Vec3::ZERO.step_towards(Vec3::new(3.0, 4.0, 0.0), 2.5);
        assert!((v - Vec3::new(1.5, 2.0, 0.0)).length() < 1e-6);
        assert_eq!(Vec3::ZERO.step_towards(Vec3::X, 5.0), Vec3::X);
    }

    #[test]
    fn test_ticks_covering_distance_land_exactly_on_target() {
        for (rate, dt) in [(1.0, 0.1), (0.7, 1.0 / 60.0), (3.3, 0.033), (10.0, 0.25)] {
            let mut seq = door();
            seq.request(Act::Open, [Step::move_to(OPEN, rate)]);
            let needed = 1.0 / rate;
            let mut total = 0.0;
            while total < needed {
                seq.tick(dt);
                total += dt;
            }
            assert_eq!(seq.params(), &OPEN, "rate {rate} dt {dt}");
            assert!(seq.is_complete());
        }
    }

    #[test]
    fn test_tick_reports_running_then_finished() {
        let mut seq = door();
        assert_eq!(seq.tick(0.1), TickOutcome::Idle);
        seq.request(Act::Open, [Step::move_to(OPEN, 1.0)]);
        assert_eq!(seq.tick(0.5), TickOutcome::Running(Act::Open));
        assert!(!seq.is_complete());
        assert_eq!(seq.tick(0.5), TickOutcome::Finished(Act::Open));
        assert_eq!(seq.tick(0.5), TickOutcome::Idle);
    }

    #[test]
    fn test_request_for_current_rest_state_stays_complete() {
        let mut seq = door();
        seq.request(Act::Open, [Step::move_to(OPEN, 2.0)]);
        seq.tick(1.0);
        assert!(seq.is_complete());

        let preempted = seq.request(Act::Open, [Step::move_to(OPEN, 2.0)]);
        assert_eq!(preempted, None);
        assert!(seq.is_complete());
        assert!(!seq.is_running());
        assert_eq!(seq.params(), &OPEN);
    }

    #[test]
    fn test_preemption_reverses_from_partial_position() {
        let mut seq = door();
        seq.request(Act::Open, [Step::move_to(OPEN, 1.0)]);
        seq.tick(0.4);
        let partial = seq.params()[1].x;
        assert!((partial - 0.4).abs() < 1e-6);

        let preempted = seq.request(Act::Close, [Step::move_to([Vec3::ZERO; 2], 1.0)]);
        assert_eq!(preempted, Some(Act::Open));
        seq.tick(0.1);
        let after = seq.params()[1].x;
        assert!(after < partial, "should move back toward closed");
        assert!(after > 0.0, "must not snap back to the rest value");
        assert!((after - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_wait_step_counts_elapsed_time() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([]);
        seq.request(Act::Open, [Step::wait(1.0)]);
        assert_eq!(seq.tick(0.6), TickOutcome::Running(Act::Open));
        assert_eq!(seq.tick(0.4), TickOutcome::Finished(Act::Open));
        assert!(seq.is_complete());
    }

    #[test]
    fn test_move_then_wait_then_move() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0]);
        seq.request(
            Act::Open,
            [Step::move_to([1.0], 1.0), Step::wait(0.5), Step::move_to([0.0], 2.0)],
        );
        seq.tick(1.0);
        assert_eq!(seq.params(), &[1.0]);
        assert!(seq.is_running());
        seq.tick(0.5);
        assert_eq!(seq.targets(), &[0.0]);
        assert_eq!(seq.tick(0.5), TickOutcome::Finished(Act::Open));
        assert_eq!(seq.params(), &[0.0]);
    }

    #[test]
    fn test_negative_and_nan_dt_do_not_move() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0]);
        seq.request(Act::Open, [Step::move_to([1.0], 1.0)]);
        seq.tick(-5.0);
        seq.tick(f32::NAN);
        assert_eq!(seq.params(), &[0.0]);
        assert!(seq.is_running());
    }

    #[test]
    fn test_zero_rate_snaps() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0]);
        seq.request(Act::Open, [Step::move_to([4.0], 0.0)]);
        assert_eq!(seq.tick(0.0), TickOutcome::Finished(Act::Open));
        assert_eq!(seq.params(), &[4.0]);
    }

    #[test]
    fn test_within_epsilon_counts_as_arrived() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0]).with_epsilon(0.01);
        seq.request(Act::Open, [Step::move_to([0.005], 1.0)]);
        assert!(!seq.is_running());
        assert_eq!(seq.params(), &[0.005]);
    }

    #[test]
    fn test_skip_step_completes_current_step() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0]);
        seq.request(Act::Open, [Step::wait(10.0), Step::move_to([2.0], 1.0)]);
        assert_eq!(seq.skip_step(), TickOutcome::Running(Act::Open));
        assert_eq!(seq.skip_step(), TickOutcome::Finished(Act::Open));
        assert_eq!(seq.params(), &[2.0]);
        assert_eq!(seq.skip_step(), TickOutcome::Idle);
    }

    #[test]
    fn test_mismatched_targets_hold_missing_parameters() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0, 5.0]);
        seq.request(Act::Open, [Step::move_to([1.0], 1.0)]);
        seq.tick(1.0);
        assert_eq!(seq.params(), &[1.0, 5.0]);
    }

    #[test]
    fn test_cancel_keeps_partial_progress() {
        let mut seq: ActionSequencer<Act, f32> = ActionSequencer::new([0.0]);
        seq.request(Act::Open, [Step::move_to([1.0], 1.0)]);
        seq.tick(0.25);
        assert_eq!(seq.cancel(), Some(Act::Open));
        assert_eq!(seq.params(), &[0.25]);
        assert!(!seq.is_complete());
    }
}
