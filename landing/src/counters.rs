//! Interval timers driving the stat counters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use compass_page::components::CounterDisplay;
use compass_page::counter::{CounterAnimation, CounterStart};
use leptos::prelude::*;

use crate::error::{LandingError, Result};

/// Every interval started for the counters.
///
/// Dropping the set clears whatever is still running, so an unmount in
/// the middle of an animation leaves no timer behind.
#[derive(Default)]
pub struct CounterTimers {
    handles: RefCell<Vec<IntervalHandle>>,
}

impl CounterTimers {
    /// Start one animation per display.
    ///
    /// Zero targets are final immediately and get no timer.
    pub fn start_all(&self, displays: &[CounterDisplay], duration: Duration) -> Result<()> {
        for display in displays {
            match CounterAnimation::start(display.spec.target, duration) {
                CounterStart::Complete => display.value.set(display.spec.target),
                CounterStart::Running(animation) => self.start_one(display.value, animation)?,
            }
        }
        Ok(())
    }

    fn start_one(&self, value: RwSignal<u32>, animation: CounterAnimation) -> Result<()> {
        let interval = animation.interval();
        let animation = RefCell::new(animation);
        let own_handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));
        let own_handle_tick = Rc::clone(&own_handle);

        value.set(0);
        let handle = set_interval_with_handle(
            move || {
                let tick = animation.borrow_mut().tick();
                value.set(tick.value());
                if tick.is_finished() {
                    if let Some(handle) = own_handle_tick.get() {
                        handle.clear();
                    }
                }
            },
            interval,
        )
        .map_err(|err| LandingError::js("start counter interval", err))?;

        own_handle.set(Some(handle));
        self.handles.borrow_mut().push(handle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handles.borrow().len()
    }
}

impl Drop for CounterTimers {
    fn drop(&mut self) {
        for handle in self.handles.get_mut().drain(..) {
            handle.clear();
        }
    }
}
