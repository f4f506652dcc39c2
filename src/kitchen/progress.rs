//! A pausable, cancellable timer that fills up in fixed increments.
//!
//! [`ProgressTimer`] knows nothing about appliances or entities. The host calls
//! [`ProgressTimer::tick`] once per frame with the frame delta and reacts to the
//! returned [`ProgressStep`].

use bevy::prelude::*;
use std::time::Duration;

/// Progress added by one tick unless configured otherwise.
pub const DEFAULT_INCREMENT: f32 = 0.25;
/// Time between two ticks unless configured otherwise.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(450);

#[derive(Debug, Clone, Reflect)]
pub struct ProgressTimer {
    elapsed: f32,
    increment: f32,
    cadence: Timer,
    paused: bool,
    active: bool,
}

/// What happened during one call to [`ProgressTimer::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStep {
    /// Increments applied this frame. Each one is a discrete audio cue.
    pub ticks: u32,
    /// Set on the frame the timer filled up. Reported once per run.
    pub completed: bool,
}

impl Default for ProgressTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INCREMENT, DEFAULT_TICK_INTERVAL)
    }
}

impl ProgressTimer {
    pub fn new(increment: f32, tick_interval: Duration) -> Self {
        Self {
            elapsed: 0.0,
            increment: increment.clamp(f32::EPSILON, 1.0),
            cadence: Timer::new(tick_interval, TimerMode::Repeating),
            paused: false,
            active: false,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.active && self.paused
    }

    /// Begins a fresh run. A run that is already going is cancelled first so
    /// two cadences never stack.
    pub fn start(&mut self) {
        self.cancel();
        self.active = true;
        self.elapsed = 0.0;
        self.paused = false;
        self.cadence.reset();
    }

    /// Halts or resumes the cadence. Resuming restarts the interval from zero.
    pub fn pause(&mut self, paused: bool) {
        if !self.active || self.paused == paused {
            return;
        }
        self.paused = paused;
        if !paused {
            self.cadence.reset();
        }
    }

    /// Stops the run without reporting completion. Returns `false` if there
    /// was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.reset();
        true
    }

    pub fn tick(&mut self, delta: Duration) -> ProgressStep {
        let mut step = ProgressStep::default();
        if !self.active || self.paused {
            return step;
        }

        self.cadence.tick(delta);
        for _ in 0..self.cadence.times_finished_this_tick() {
            self.elapsed = (self.elapsed + self.increment).min(1.0);
            step.ticks += 1;
            if self.elapsed >= 1.0 {
                step.completed = true;
                self.reset();
                break;
            }
        }
        step
    }

    fn reset(&mut self) {
        self.active = false;
        self.paused = false;
        self.elapsed = 0.0;
        self.cadence.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = DEFAULT_TICK_INTERVAL;

    fn started() -> ProgressTimer {
        let mut timer = ProgressTimer::default();
        timer.start();
        timer
    }

    #[test]
    fn completes_after_four_ticks_exactly_once() {
        let mut timer = started();
        for expected in [0.25, 0.5, 0.75] {
            let step = timer.tick(INTERVAL);
            assert_eq!(step.ticks, 1);
            assert!(!step.completed);
            assert_eq!(timer.elapsed(), expected);
        }

        let step = timer.tick(INTERVAL);
        assert!(step.completed);
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 0.0);

        // nothing more once it has fired
        assert_eq!(timer.tick(INTERVAL * 10), ProgressStep::default());
    }

    #[test]
    fn partial_intervals_accumulate() {
        let mut timer = started();
        assert_eq!(timer.tick(Duration::from_millis(300)).ticks, 0);
        assert_eq!(timer.tick(Duration::from_millis(200)).ticks, 1);
        assert_eq!(timer.elapsed(), 0.25);
    }

    #[test]
    fn long_frame_stops_at_completion() {
        let mut timer = started();
        let step = timer.tick(INTERVAL * 9);
        assert_eq!(step.ticks, 4);
        assert!(step.completed);
    }

    #[test]
    fn pause_freezes_progress() {
        let mut timer = started();
        timer.tick(INTERVAL * 2);
        timer.pause(true);
        assert!(timer.is_paused());
        assert_eq!(timer.tick(INTERVAL * 3), ProgressStep::default());
        assert_eq!(timer.elapsed(), 0.5);

        timer.pause(false);
        timer.tick(INTERVAL);
        assert_eq!(timer.elapsed(), 0.75);
    }

    #[test]
    fn pause_toggle_without_ticks_keeps_elapsed() {
        let mut timer = started();
        timer.tick(INTERVAL);
        timer.pause(true);
        timer.pause(false);
        assert_eq!(timer.elapsed(), 0.25);
        assert!(timer.is_active());
    }

    #[test]
    fn resume_restarts_the_interval() {
        let mut timer = started();
        timer.tick(Duration::from_millis(400));
        timer.pause(true);
        timer.pause(false);
        // the 400ms banked before the pause are gone
        assert_eq!(timer.tick(Duration::from_millis(100)).ticks, 0);
        assert_eq!(timer.tick(Duration::from_millis(350)).ticks, 1);
    }

    #[test]
    fn cancel_resets_and_is_idempotent() {
        let mut timer = started();
        timer.tick(INTERVAL * 2);
        assert!(timer.cancel());
        assert_eq!(timer.elapsed(), 0.0);
        assert!(!timer.is_active());
        assert!(!timer.cancel());
    }

    #[test]
    fn restart_does_not_stack_cadences() {
        let mut timer = started();
        timer.tick(INTERVAL * 3);
        timer.start();
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.tick(INTERVAL).ticks, 1);
        assert_eq!(timer.elapsed(), 0.25);
    }

    #[test]
    fn inactive_timer_ignores_pause() {
        let mut timer = ProgressTimer::default();
        timer.pause(true);
        assert!(!timer.is_paused());
        timer.start();
        assert!(!timer.is_paused());
    }
}
