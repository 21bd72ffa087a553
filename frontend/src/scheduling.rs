//! Timer, viewport and clock capabilities.
//!
//! Pages never touch `setInterval`, `IntersectionObserver` or `Date.now()`
//! directly. They take one of the traits below, so countdown and sticky-button
//! behaviour can be driven by hand in tests.

use chrono::Utc;
use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Keeps a registration alive. Dropping it (or calling `cancel`) stops the
/// callbacks.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    fn every(&self, interval_ms: u32, callback: Box<dyn FnMut()>) -> Subscription;
}

pub trait VisibilityObserver {
    type Region;

    /// Calls `callback(true)` while at least `threshold` of `region` is on
    /// screen and `callback(false)` once it drops below.
    fn watch(&self, region: &Self::Region, threshold: f64, callback: Box<dyn Fn(bool)>) -> Subscription;
}

pub trait Clock {
    fn now_ms(&self) -> i64;
}

pub fn meets_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, interval_ms: u32, mut callback: Box<dyn FnMut()>) -> Subscription {
        let interval = Interval::new(interval_ms, move || callback());
        Subscription::new(move || drop(interval))
    }
}

pub struct IntersectionVisibility;

impl VisibilityObserver for IntersectionVisibility {
    type Region = Element;

    fn watch(&self, region: &Element, threshold: f64, callback: Box<dyn Fn(bool)>) -> Subscription {
        let on_change = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            // Only the most recent entry matters for a single target
            if let Some(entry) = entries.iter().last() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                callback(meets_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold));
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(region);
                Subscription::new(move || {
                    observer.disconnect();
                    drop(on_change);
                })
            }
            Err(_) => {
                warn!("IntersectionObserver unavailable, visibility will not be tracked");
                Subscription::noop()
            }
        }
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    pub struct ManualClock {
        now: Cell<i64>,
    }

    impl ManualClock {
        pub fn at(now: i64) -> Self {
            Self { now: Cell::new(now) }
        }

        pub fn advance(&self, ms: i64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.now.get()
        }
    }

    type Registration = (Rc<RefCell<Box<dyn FnMut()>>>, Rc<Cell<bool>>);

    /// Fires registered callbacks only when told to.
    #[derive(Default)]
    pub struct ManualScheduler {
        registrations: RefCell<Vec<Registration>>,
    }

    impl ManualScheduler {
        pub fn fire(&self) {
            let live: Vec<_> = self
                .registrations
                .borrow()
                .iter()
                .filter(|(_, active)| active.get())
                .map(|(callback, _)| callback.clone())
                .collect();
            for callback in live {
                (&mut *callback.borrow_mut())();
            }
        }

        pub fn active(&self) -> usize {
            self.registrations.borrow().iter().filter(|(_, active)| active.get()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        fn every(&self, _interval_ms: u32, callback: Box<dyn FnMut()>) -> Subscription {
            let active = Rc::new(Cell::new(true));
            self.registrations
                .borrow_mut()
                .push((Rc::new(RefCell::new(callback)), active.clone()));
            Subscription::new(move || active.set(false))
        }
    }

    /// Reports whatever visible fraction the test sets.
    #[derive(Default)]
    pub struct ManualVisibility {
        watchers: RefCell<Vec<(f64, Rc<dyn Fn(bool)>, Rc<Cell<bool>>)>>,
    }

    impl ManualVisibility {
        pub fn show_fraction(&self, fraction: f64) {
            for (threshold, callback, active) in self.watchers.borrow().iter() {
                if active.get() {
                    callback(meets_threshold(fraction > 0.0, fraction, *threshold));
                }
            }
        }
    }

    impl VisibilityObserver for ManualVisibility {
        type Region = ();

        fn watch(&self, _region: &(), threshold: f64, callback: Box<dyn Fn(bool)>) -> Subscription {
            let active = Rc::new(Cell::new(true));
            self.watchers
                .borrow_mut()
                .push((threshold, Rc::from(callback), active.clone()));
            Subscription::new(move || active.set(false))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::*;
    use super::*;

    #[test]
    fn test_subscription_cancels_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        sub.cancel();
        assert_eq!(count.get(), 1);

        let c = count.clone();
        drop(Subscription::new(move || c.set(c.get() + 1)));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_manual_scheduler_stops_after_cancel() {
        let scheduler = ManualScheduler::default();
        let ticks = Rc::new(Cell::new(0));
        let t = ticks.clone();
        let sub = scheduler.every(1000, Box::new(move || t.set(t.get() + 1)));
        scheduler.fire();
        scheduler.fire();
        assert_eq!(ticks.get(), 2);
        drop(sub);
        scheduler.fire();
        assert_eq!(ticks.get(), 2);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_threshold() {
        assert!(meets_threshold(true, 0.35, 0.35));
        assert!(meets_threshold(true, 1.0, 0.35));
        assert!(!meets_threshold(true, 0.2, 0.35));
        assert!(!meets_threshold(false, 0.0, 0.35));
    }
}
