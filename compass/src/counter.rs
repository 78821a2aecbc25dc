//! Percentage count-up animation.
//!
//! A counter climbs from `0%` to its target one step at a time. The step
//! interval is the total duration divided by the target (integer
//! milliseconds), so every counter finishes in roughly the same wall time
//! regardless of its target. The host drives the animation by calling
//! [`CounterAnimation::tick`] once per interval and cancelling its timer
//! when the tick reports [`Tick::Finished`].
//!
//! A zero target has no meaningful interval; it starts out complete and
//! the host never creates a timer for it.
//!
//! ```rust
//! use std::time::Duration;
//! use compass_page::counter::{CounterAnimation, CounterStart, Tick};
//!
//! let CounterStart::Running(mut anim) = CounterAnimation::start(3, Duration::from_millis(1500)) else {
//!     unreachable!()
//! };
//! assert_eq!(anim.interval(), Duration::from_millis(500));
//! assert_eq!(anim.tick(), Tick::Continue(1));
//! assert_eq!(anim.tick(), Tick::Continue(2));
//! assert_eq!(anim.tick(), Tick::Finished(3));
//! ```

use std::time::Duration;

use serde::Serialize;

/// One stat counter on the page and the percentage it counts up to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CounterSpec {
    /// Stable key of the counter element
    pub key: &'static str,
    /// Final percentage shown when the animation completes
    pub target: u32,
}

/// Outcome of starting an animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterStart {
    /// Nothing to animate; the display is already final.
    Complete,
    /// Drive this animation with a repeating timer.
    Running(CounterAnimation),
}

/// Result of advancing a running animation by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// New value to display; keep the timer running.
    Continue(u32),
    /// Target reached; display it and cancel the timer.
    Finished(u32),
}

impl Tick {
    pub fn value(self) -> u32 {
        match self {
            Tick::Continue(v) | Tick::Finished(v) => v,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Tick::Finished(_))
    }
}

/// State of a single running count-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    current: u32,
    interval: Duration,
}

impl CounterAnimation {
    pub fn start(target: u32, duration: Duration) -> CounterStart {
        match step_interval(duration, target) {
            None => CounterStart::Complete,
            Some(interval) => CounterStart::Running(Self {
                target,
                current: 0,
                interval,
            }),
        }
    }

    /// Advance by one. Never moves past the target.
    pub fn tick(&mut self) -> Tick {
        if self.current < self.target {
            self.current += 1;
        }
        if self.current >= self.target {
            Tick::Finished(self.current)
        } else {
            Tick::Continue(self.current)
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }

    pub fn display(&self) -> String {
        format_percent(self.current)
    }
}

/// Time between two steps, or `None` for a zero target.
///
/// Integer division of the duration in milliseconds by the target, floored
/// to 1 ms so targets above the duration still advance.
pub fn step_interval(duration: Duration, target: u32) -> Option<Duration> {
    if target == 0 {
        return None;
    }
    let millis = duration.as_millis() as u64 / u64::from(target);
    Some(Duration::from_millis(millis.max(1)))
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DURATION: Duration = Duration::from_millis(1500);

    fn running(target: u32) -> CounterAnimation {
        match CounterAnimation::start(target, DURATION) {
            CounterStart::Running(anim) => anim,
            CounterStart::Complete => panic!("target {target} should animate"),
        }
    }

    /// Drive to completion, collecting every displayed value.
    fn run_to_end(target: u32) -> Vec<String> {
        let mut anim = running(target);
        let mut shown = vec![anim.display()];
        loop {
            let tick = anim.tick();
            shown.push(format_percent(tick.value()));
            if tick.is_finished() {
                break;
            }
            assert!(shown.len() <= target as usize + 1, "animation ran past target");
        }
        shown
    }

    #[test]
    fn displays_every_step_up_to_target() {
        for target in [1, 2, 7, 52, 100, 250] {
            let expected: Vec<String> = (0..=target).map(format_percent).collect();
            assert_eq!(run_to_end(target), expected);
        }
    }

    #[test]
    fn fifty_two_ends_at_fifty_two_percent() {
        let shown = run_to_end(52);
        assert_eq!(shown.last().map(String::as_str), Some("52%"));
    }

    #[test]
    fn zero_target_is_complete_without_timer() {
        assert_eq!(CounterAnimation::start(0, DURATION), CounterStart::Complete);
        assert_eq!(step_interval(DURATION, 0), None);
        assert_eq!(format_percent(0), "0%");
    }

    #[test]
    fn interval_is_integer_division_of_duration() {
        assert_eq!(step_interval(DURATION, 52), Some(Duration::from_millis(28)));
        assert_eq!(step_interval(DURATION, 1), Some(DURATION));
        assert_eq!(step_interval(DURATION, 7), Some(Duration::from_millis(214)));
    }

    #[test]
    fn interval_never_collapses_to_zero() {
        assert_eq!(step_interval(DURATION, 5000), Some(Duration::from_millis(1)));
    }

    #[test]
    fn ticking_after_finish_does_not_overshoot() {
        let mut anim = running(2);
        anim.tick();
        assert_eq!(anim.tick(), Tick::Finished(2));
        assert_eq!(anim.tick(), Tick::Finished(2));
        assert_eq!(anim.current(), 2);
        assert!(anim.is_finished());
    }
}
