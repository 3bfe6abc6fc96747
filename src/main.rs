//! Corridor Runner entry point
//!
//! Headless demo: drives the simulation with a synthetic clock and a
//! scripted input timeline, logging what a presentation layer would see.
//! A renderer would register its own `Presenter` instead.

use std::time::Duration;

use corridor_runner::runner::{Presenter, Simulation};
use corridor_runner::sim::input::{Direction, InputEvent};
use corridor_runner::sim::state::{RunPhase, SimState};

#[derive(Default)]
struct LogPresenter {
    frames: u64,
    crashes: u32,
}

impl Presenter for LogPresenter {
    fn frame(&mut self, state: &SimState) {
        self.frames += 1;
        if self.frames % 300 == 0 {
            let deepest = state
                .obstacles
                .slots()
                .iter()
                .map(|o| o.position.z)
                .fold(f32::MIN, f32::max);
            log::info!(
                "tick {}: actor x {:.0}, deepest obstacle z {:.0}",
                state.time_ticks,
                state.actor.position.x,
                deepest,
            );
        }
    }

    fn phase_changed(&mut self, from: RunPhase, to: RunPhase) {
        if to == RunPhase::Over {
            self.crashes += 1;
        }
        log::info!("phase {from:?} -> {to:?}");
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("corridor-runner headless demo (seed {seed})");

    let mut sim = Simulation::new(seed);
    let mut presenter = LogPresenter::default();

    // Weave across the corridor for half a minute of simulated time.
    let mut now = Duration::ZERO;
    let step = Duration::from_millis(8);
    while now < Duration::from_secs(30) {
        now += step;
        match now.as_millis() {
            2_000 => sim.handle_input(InputEvent::PointerPressed(Direction::Right)),
            6_000 => {
                sim.handle_input(InputEvent::PointerReleased(Direction::Right));
                sim.handle_input(InputEvent::PointerPressed(Direction::Left));
            }
            12_000 => sim.handle_input(InputEvent::PointerReleased(Direction::Left)),
            _ => {}
        }
        sim.pump(now, &mut presenter);
    }

    sim.teardown();
    log::info!(
        "demo finished: {} frames, {} crash(es), actor at x {:.0}",
        presenter.frames,
        presenter.crashes,
        sim.state().actor.position.x,
    );
}
