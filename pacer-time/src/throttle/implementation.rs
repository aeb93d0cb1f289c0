// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::callback::Callback;
use crate::throttle::ThrottleOptions;
use crate::timer_slot::TimerSlot;
use core::fmt;
use core::time::Duration;
use pacer_runtime::{Clock, Scheduler};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// A throttled callable.
///
/// Built by [`throttle`](crate::throttle()) or
/// [`ThrottleExt::throttle_with`](crate::ThrottleExt::throttle_with).
/// Clones are handles to the same state; the pending trailing call is cancelled
/// when the last handle is dropped.
pub struct Throttled<T, R, S: Scheduler, K: Clock> {
    shared: Arc<ThrottleShared<T, R, S, K>>,
}

/// Non-owning handle to a [`Throttled`], for callables that call their own wrapper.
pub struct WeakThrottled<T, R, S: Scheduler, K: Clock> {
    shared: Weak<ThrottleShared<T, R, S, K>>,
}

struct ThrottleShared<T, R, S: Scheduler, K: Clock> {
    wait: Duration,
    leading: bool,
    trailing: bool,
    scheduler: S,
    clock: K,
    callback: Callback<T, R>,
    state: Mutex<ThrottleState<T, R, S::Handle, K::Instant>>,
}

struct ThrottleState<T, R, H, I> {
    last_invoke: Option<I>,
    timer: TimerSlot<H>,
    captured: Option<T>,
    result: Option<R>,
}

impl<T, R, S, K> Throttled<T, R, S, K>
where
    T: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
    K: Clock,
{
    pub fn new<F>(func: F, wait: Duration, options: ThrottleOptions, scheduler: S, clock: K) -> Self
    where
        F: FnMut(T) -> R + Send + 'static,
    {
        Self {
            shared: Arc::new(ThrottleShared {
                wait,
                leading: options.leading,
                trailing: options.trailing,
                scheduler,
                clock,
                callback: Callback::new(func),
                state: Mutex::new(ThrottleState {
                    last_invoke: None,
                    timer: TimerSlot::new(),
                    captured: None,
                    result: None,
                }),
            }),
        }
    }

    /// Calls the throttled callable.
    ///
    /// Outside an active window the callable runs synchronously (leading edge) or,
    /// with `leading` disabled, a window starts without a call. Inside a window the
    /// input is captured for the trailing call, which is scheduled for the end of
    /// the window.
    ///
    /// Returns the result of the most recent invocation, `None` before the first one.
    pub fn call(&self, input: T) -> Option<R> {
        let shared = &self.shared;
        // Read under the lock so concurrent callers observe instants in lock order.
        let mut state = shared.state.lock();
        let now = shared.clock.now();

        let remaining = match state.last_invoke {
            None => Duration::ZERO,
            Some(last) if now < last => {
                warn!("clock moved backwards; resynchronising throttle window");
                Duration::ZERO
            }
            Some(last) => shared.wait.saturating_sub(now - last),
        };

        let remaining = if !remaining.is_zero() {
            remaining
        } else if shared.leading {
            state.timer.disarm(&shared.scheduler);
            state.last_invoke = Some(now);
            state.captured = None;
            drop(state);
            trace!("throttle leading invocation");
            return shared.invoke(input);
        } else {
            // Without a leading edge the window opens on this call and its input
            // waits for the trailing edge.
            state.last_invoke = Some(now);
            shared.wait
        };

        if shared.trailing {
            state.captured = Some(input);
            if !state.timer.is_armed() {
                shared.arm(&mut state, remaining);
                trace!(?remaining, "throttle trailing timer armed");
            }
        }
        state.result.clone()
    }

    /// Runs the pending trailing invocation now, if there is one.
    ///
    /// The flushed invocation counts as an invocation for window purposes.
    /// Returns the result of the most recent invocation.
    pub fn flush(&self) -> Option<R> {
        let shared = &self.shared;
        let mut state = shared.state.lock();
        let now = shared.clock.now();
        if !state.timer.disarm(&shared.scheduler) {
            return state.result.clone();
        }
        state.last_invoke = shared.leading.then_some(now);
        match state.captured.take() {
            Some(input) => {
                drop(state);
                shared.invoke(input)
            }
            None => state.result.clone(),
        }
    }

    /// Drops the pending trailing call and forgets the current window.
    pub fn cancel(&self) {
        let shared = &self.shared;
        let mut state = shared.state.lock();
        if state.timer.disarm(&shared.scheduler) {
            debug!("throttle trailing timer cancelled");
        }
        state.captured = None;
        state.last_invoke = None;
    }

    /// Whether a trailing call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().timer.is_armed()
    }

    /// Result of the most recent invocation.
    pub fn last_result(&self) -> Option<R> {
        self.shared.state.lock().result.clone()
    }

    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    pub fn downgrade(&self) -> WeakThrottled<T, R, S, K> {
        WeakThrottled {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<T, R, S, K> ThrottleShared<T, R, S, K>
where
    T: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
    K: Clock,
{
    fn arm(
        self: &Arc<Self>,
        state: &mut ThrottleState<T, R, S::Handle, K::Instant>,
        delay: Duration,
    ) {
        let weak = Arc::downgrade(self);
        state.timer.arm(&self.scheduler, delay, move |generation| {
            if let Some(shared) = weak.upgrade() {
                shared.fire(generation);
            }
        });
    }

    fn fire(self: &Arc<Self>, generation: u64) {
        let mut state = self.state.lock();
        if !state.timer.claim(generation) {
            trace!(generation, "ignoring stale throttle timer");
            return;
        }
        let now = self.clock.now();
        // Without a leading edge the next call must open a fresh window.
        state.last_invoke = self.leading.then_some(now);
        let Some(input) = state.captured.take() else {
            return;
        };
        drop(state);
        trace!("throttle trailing invocation");
        self.invoke(input);
    }

    fn invoke(self: &Arc<Self>, input: T) -> Option<R> {
        match self.callback.try_invoke(input) {
            Ok(result) => {
                self.state.lock().result = Some(result.clone());
                Some(result)
            }
            Err(input) => {
                debug!("throttled callable is already running; deferring invocation");
                let mut state = self.state.lock();
                if state.captured.is_none() {
                    state.captured = Some(input);
                }
                if !state.timer.is_armed() {
                    self.arm(&mut state, Duration::ZERO);
                }
                state.result.clone()
            }
        }
    }
}

impl<T, R, S: Scheduler, K: Clock> Drop for ThrottleShared<T, R, S, K> {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        state.timer.disarm(&self.scheduler);
    }
}

impl<T, R, S: Scheduler, K: Clock> WeakThrottled<T, R, S, K> {
    pub fn upgrade(&self) -> Option<Throttled<T, R, S, K>> {
        self.shared.upgrade().map(|shared| Throttled { shared })
    }
}

impl<T, R, S: Scheduler, K: Clock> Clone for Throttled<T, R, S, K> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, R, S: Scheduler, K: Clock> Clone for WeakThrottled<T, R, S, K> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, R, S: Scheduler, K: Clock> fmt::Debug for Throttled<T, R, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Throttled")
            .field("wait", &self.shared.wait)
            .field("leading", &self.shared.leading)
            .field("trailing", &self.shared.trailing)
            .field("last_invoke", &state.last_invoke)
            .field("pending", &state.timer.is_armed())
            .finish()
    }
}

impl<T, R, S: Scheduler, K: Clock> fmt::Debug for WeakThrottled<T, R, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakThrottled")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}
