//! Drives the poll schedule with browser timers.

use gloo_timers::callback::Interval;
use homewatch_app::schedule::RefreshTask;
use leptos::prelude::*;

use crate::state::DashboardContext;

fn run(ctx: &DashboardContext, tasks: &[RefreshTask]) {
    for task in tasks {
        ctx.refresh(*task);
    }
}

/// Refresh every panel once, then keep the fast and slow cycles running
/// until the calling owner is cleaned up. Dropping the timers cancels them,
/// so leaving a route never leaves a cycle behind.
pub fn start(ctx: &DashboardContext) {
    let schedule = ctx.services.schedule;
    leptos::logging::log!(
        "polling every {}ms (live) and {}ms (event log)",
        schedule.fast_interval_ms,
        schedule.slow_interval_ms
    );

    run(ctx, schedule.on_load());

    let fast = ctx.clone();
    let fast = Interval::new(schedule.fast_interval_ms, move || run(&fast, schedule.fast()));

    let slow = ctx.clone();
    let slow = Interval::new(schedule.slow_interval_ms, move || run(&slow, schedule.slow()));

    hold_until_cleanup((fast, slow));
}

/// Keep `value` alive until the current owner is cleaned up, then drop it.
fn hold_until_cleanup<T: 'static>(value: T) {
    let held = StoredValue::new_local(value);
    on_cleanup(move || {
        leptos::logging::log!("stopping poll cycles");
        held.dispose();
    });
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn should_drop_timers_when_route_is_cleaned_up() {
        let dropped = Rc::new(Cell::new(false));
        let owner = Owner::new();

        owner.with(|| hold_until_cleanup(DropFlag(dropped.clone())));
        assert!(!dropped.get());

        owner.cleanup();
        assert!(dropped.get());
    }
}
