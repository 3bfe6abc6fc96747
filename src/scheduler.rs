//! Polled timer queue
//!
//! The host owns wall time; the queue only compares against the instants it
//! is handed, so tests drive it with synthetic time. Everything fires on the
//! caller's thread, in due order, when [`Scheduler::fire_due`] is polled.

use std::time::Duration;

/// Opaque registration handle for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(u32);

/// What a due timer wants done; interpreted by the simulation runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Advance the world by one frame
    Frame,
    /// Apply held continuous-input directions
    InputPulse,
    /// Bring the run back after a crash
    ResetRun,
}

/// How many missed periods a repeating task may replay in one poll before
/// the remainder is dropped.
const MAX_CATCH_UP: u32 = 8;

#[derive(Debug, Clone)]
struct Entry {
    id: TaskId,
    task: TimerTask,
    due: Duration,
    period: Option<Duration>,
}

/// Timer registrations polled with [`Scheduler::fire_due`].
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u32,
    now: Duration,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task firing every `period`, first due one period from now.
    pub fn schedule_repeating(&mut self, period: Duration, task: TimerTask) -> TaskId {
        self.insert(self.now + period, Some(period), task)
    }

    /// Register a task firing once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TaskId {
        self.insert(self.now + delay, None, task)
    }

    /// Remove a registration. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Drop every registration.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance to `now` and return every firing since the last poll, in due
    /// order. One-shots are removed once fired. A repeating task more than
    /// `MAX_CATCH_UP` periods behind skips the excess instead of replaying
    /// it all.
    pub fn fire_due(&mut self, now: Duration) -> Vec<TimerTask> {
        // Time never runs backwards; a stale poll fires nothing new.
        self.now = self.now.max(now);
        let now = self.now;

        let mut fired: Vec<(Duration, TimerTask)> = Vec::new();
        self.entries.retain_mut(|entry| match entry.period {
            Some(period) => {
                let mut replays = 0;
                while entry.due <= now && replays < MAX_CATCH_UP {
                    fired.push((entry.due, entry.task));
                    entry.due += period;
                    replays += 1;
                }
                if entry.due <= now {
                    let mut skipped = 0u32;
                    while entry.due <= now {
                        entry.due += period;
                        skipped += 1;
                    }
                    log::debug!("{:?} fell behind; skipped {skipped} firings", entry.task);
                }
                true
            }
            None => {
                if entry.due <= now {
                    fired.push((entry.due, entry.task));
                    false
                } else {
                    true
                }
            }
        });

        // Stable: ties keep registration order.
        fired.sort_by_key(|(due, _)| *due);
        fired.into_iter().map(|(_, task)| task).collect()
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, task: TimerTask) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            task,
            due,
            period,
        });
        id
    }
}
