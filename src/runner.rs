//! The owning simulation handle
//!
//! Wires the pure sim to its three timed callbacks: the frame tick, the
//! continuous-input ticker and the one-shot recovery timer. The handle owns
//! the state and the scheduler outright; there are no globals, so several
//! simulations can coexist. Tearing the handle down cancels all three
//! registrations, and a torn-down handle ignores everything - teardown also
//! runs on `Drop`, so no exit path leaks a live callback.

use std::time::Duration;

use crate::scheduler::{Scheduler, TaskId, TimerTask};
use crate::sim::input::InputEvent;
use crate::sim::state::{RunPhase, SimEvent, SimState};
use crate::sim::{player, tick};
use crate::tuning::Tuning;

/// Presentation callback surface.
///
/// `frame` runs after every simulated frame with the full pose state;
/// `phase_changed` runs on both the run-over and the recovery transition.
pub trait Presenter {
    fn frame(&mut self, state: &SimState);
    fn phase_changed(&mut self, from: RunPhase, to: RunPhase);
}

/// Presenter that discards everything; for headless runs.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn frame(&mut self, _state: &SimState) {}
    fn phase_changed(&mut self, _from: RunPhase, _to: RunPhase) {}
}

/// A live simulation and its callback registrations.
pub struct Simulation {
    state: SimState,
    scheduler: Scheduler,
    frame_task: Option<TaskId>,
    input_task: Option<TaskId>,
    reset_task: Option<TaskId>,
    torn_down: bool,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut scheduler = Scheduler::new();
        let frame_task = scheduler.schedule_repeating(tuning.frame_interval(), TimerTask::Frame);
        let input_task = scheduler.schedule_repeating(tuning.input_tick(), TimerTask::InputPulse);
        log::info!("simulation started (seed {seed})");
        Self {
            state: SimState::with_tuning(seed, tuning),
            scheduler,
            frame_task: Some(frame_task),
            input_task: Some(input_task),
            reset_task: None,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Forward a raw input event from the presentation layer.
    ///
    /// Key presses step the actor immediately; pointer events only flip the
    /// held flags sampled by the input ticker.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.torn_down {
            return;
        }
        log::trace!("input {event:?}");
        match event {
            InputEvent::KeyPressed(direction) => player::steer(&mut self.state, direction),
            InputEvent::KeyReleased(_) => {}
            InputEvent::PointerPressed(direction) => self.state.actor.held.press(direction),
            InputEvent::PointerReleased(direction) => self.state.actor.held.release(direction),
        }
    }

    /// Run every timed callback due by `now` and forward the results to the
    /// presenter. `now` is host time; tests pass synthetic values.
    pub fn pump(&mut self, now: Duration, presenter: &mut dyn Presenter) {
        if self.torn_down {
            return;
        }
        for task in self.scheduler.fire_due(now) {
            match task {
                TimerTask::Frame => {
                    tick::step(&mut self.state);
                    self.dispatch_events(presenter);
                    presenter.frame(&self.state);
                }
                TimerTask::InputPulse => player::pulse_held(&mut self.state),
                TimerTask::ResetRun => {
                    self.reset_task = None;
                    self.state.reset_run();
                    self.dispatch_events(presenter);
                }
            }
        }
    }

    /// Cancel the frame tick, the input ticker and any pending reset.
    /// Idempotent; every later call on the handle is a no-op.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let registered = [
            self.frame_task.take(),
            self.input_task.take(),
            self.reset_task.take(),
        ];
        for task in registered.into_iter().flatten() {
            self.scheduler.cancel(task);
        }
        log::info!("simulation torn down at tick {}", self.state.time_ticks);
    }

    fn dispatch_events(&mut self, presenter: &mut dyn Presenter) {
        for event in self.state.drain_events() {
            let SimEvent::PhaseChanged { from, to } = event;
            if to == RunPhase::Over && self.reset_task.is_none() {
                let delay = self.state.tuning.reset_delay();
                self.reset_task = Some(self.scheduler.schedule_once(delay, TimerTask::ResetRun));
            }
            presenter.phase_changed(from, to);
        }
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.teardown();
    }
}
