//! One run of a station working on an ingredient, from the first interact
//! press until the result is ready or the run is interrupted.

use crate::kitchen::ingredient::{Ingredient, Process};
use crate::kitchen::progress::{ProgressStep, ProgressTimer};
use bevy::prelude::*;
use std::fmt;
use std::time::Duration;

/// Animation trigger fired when an actor starts working a station.
pub const START_ANIMATION: &str = "startCut";

/// Something that can work a station. Implemented by the player animator, but
/// the session only needs these two capabilities.
pub trait Actor {
    fn set_can_interact(&mut self, can_interact: bool);
    fn trigger_animation(&mut self, name: &'static str);
}

pub type CompletionCallback = Box<dyn FnOnce() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoTarget,
    AlreadyProcessed,
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    Started,
    Resumed,
    Ignored(IgnoreReason),
}

/// Who and what a run was working on when it ended, by completion or
/// cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunEnded {
    /// `None` for unattended runs.
    pub actor: Option<Entity>,
    pub target: Entity,
}

/// Per-frame result of [`InteractionSession::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStep {
    pub ticks: u32,
    /// Set on the frame the run completed.
    pub completed: Option<RunEnded>,
}

/// What the progress bar should show this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarView {
    pub visible: bool,
    pub value: f32,
}

pub struct InteractionSession {
    process: Process,
    timer: ProgressTimer,
    actor: Option<Entity>,
    target: Option<Entity>,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for InteractionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionSession")
            .field("process", &self.process)
            .field("timer", &self.timer)
            .field("actor", &self.actor)
            .field("target", &self.target)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl InteractionSession {
    pub fn new(process: Process, timer: ProgressTimer) -> Self {
        Self {
            process,
            timer,
            actor: None,
            target: None,
            on_complete: None,
        }
    }

    pub fn process(&self) -> Process {
        self.process
    }

    pub fn actor(&self) -> Option<Entity> {
        self.actor
    }

    /// The ingredient entity the current run started on.
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.timer.elapsed()
    }

    pub fn state(&self) -> SessionState {
        if self.timer.is_paused() {
            SessionState::Paused
        } else if self.timer.is_active() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    /// Active or paused.
    pub fn is_running(&self) -> bool {
        self.timer.is_active()
    }

    /// Asks the session to start working `target` on behalf of `actor`.
    ///
    /// A paused run is resumed instead, and a run already in progress is left
    /// alone. Requests that fail a precondition are ignored rather than
    /// treated as errors, they only mean the interact prompt did nothing.
    pub fn begin(
        &mut self,
        actor_id: Entity,
        actor: &mut dyn Actor,
        target: Option<(Entity, &Ingredient)>,
        on_complete: Option<CompletionCallback>,
    ) -> BeginOutcome {
        match self.state() {
            SessionState::Active => {
                return BeginOutcome::Ignored(IgnoreReason::AlreadyRunning);
            }
            SessionState::Paused => {
                self.timer.pause(false);
                self.actor = Some(actor_id);
                actor.set_can_interact(true);
                return BeginOutcome::Resumed;
            }
            SessionState::Idle => {}
        }

        let Some((target_id, target)) = target else {
            return BeginOutcome::Ignored(IgnoreReason::NoTarget);
        };
        if target.is_done_for(self.process) {
            return BeginOutcome::Ignored(IgnoreReason::AlreadyProcessed);
        }

        self.timer.start();
        self.actor = Some(actor_id);
        self.target = Some(target_id);
        self.on_complete = on_complete;
        actor.trigger_animation(START_ANIMATION);
        actor.set_can_interact(true);
        BeginOutcome::Started
    }

    /// Starts a run that no actor has to attend, like a pot left on the heat.
    pub fn begin_unattended(&mut self, target: Option<(Entity, &Ingredient)>) -> BeginOutcome {
        match self.state() {
            SessionState::Active => BeginOutcome::Ignored(IgnoreReason::AlreadyRunning),
            SessionState::Paused => {
                self.timer.pause(false);
                BeginOutcome::Resumed
            }
            SessionState::Idle => match target {
                None => BeginOutcome::Ignored(IgnoreReason::NoTarget),
                Some((_, target)) if target.is_done_for(self.process) => {
                    BeginOutcome::Ignored(IgnoreReason::AlreadyProcessed)
                }
                Some((target_id, _)) => {
                    self.timer.start();
                    self.actor = None;
                    self.target = Some(target_id);
                    self.on_complete = None;
                    BeginOutcome::Started
                }
            },
        }
    }

    pub fn pause(&mut self, paused: bool) {
        self.timer.pause(paused);
    }

    /// Drops the current run without calling the completion callback.
    /// Returns `None` if there was nothing to cancel.
    pub fn cancel(&mut self) -> Option<RunEnded> {
        if !self.timer.cancel() {
            return None;
        }
        self.on_complete = None;
        self.end_run()
    }

    pub fn advance(&mut self, delta: Duration) -> SessionStep {
        let ProgressStep { ticks, completed } = self.timer.tick(delta);
        let mut step = SessionStep {
            ticks,
            completed: None,
        };
        if completed {
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
            step.completed = self.end_run();
        }
        step
    }

    fn end_run(&mut self) -> Option<RunEnded> {
        let actor = self.actor.take();
        self.target.take().map(|target| RunEnded { actor, target })
    }

    pub fn progress_bar(&self) -> ProgressBarView {
        ProgressBarView {
            visible: self.is_running(),
            value: self.timer.elapsed(),
        }
    }
}
