// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::callback::Callback;
use crate::debounce::DebounceOptions;
use crate::timer_slot::TimerSlot;
use core::fmt;
use core::time::Duration;
use pacer_runtime::Scheduler;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// A debounced callable.
///
/// Built by [`debounce`](crate::debounce()) or
/// [`DebounceExt::debounce_with_scheduler`](crate::DebounceExt::debounce_with_scheduler).
/// Clones are handles to the same state; the pending deferred call is cancelled
/// when the last handle is dropped.
pub struct Debounced<T, R, S: Scheduler> {
    shared: Arc<DebounceShared<T, R, S>>,
}

/// Non-owning handle to a [`Debounced`], for callables that call their own wrapper.
pub struct WeakDebounced<T, R, S: Scheduler> {
    shared: Weak<DebounceShared<T, R, S>>,
}

struct DebounceShared<T, R, S: Scheduler> {
    wait: Duration,
    immediate: bool,
    scheduler: S,
    callback: Callback<T, R>,
    state: Mutex<DebounceState<T, R, S::Handle>>,
}

struct DebounceState<T, R, H> {
    timer: TimerSlot<H>,
    captured: Option<T>,
    result: Option<R>,
}

impl<T, R, S> Debounced<T, R, S>
where
    T: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    pub fn new<F>(func: F, wait: Duration, options: DebounceOptions, scheduler: S) -> Self
    where
        F: FnMut(T) -> R + Send + 'static,
    {
        Self {
            shared: Arc::new(DebounceShared {
                wait,
                immediate: options.immediate,
                scheduler,
                callback: Callback::new(func),
                state: Mutex::new(DebounceState {
                    timer: TimerSlot::new(),
                    captured: None,
                    result: None,
                }),
            }),
        }
    }

    /// Calls the debounced callable.
    ///
    /// Restarts the quiet period. In trailing mode `input` replaces any captured
    /// input and is replayed once `wait` passes without further calls. In immediate
    /// mode the first call of a burst invokes synchronously and later calls of the
    /// same burst are dropped.
    ///
    /// A call made from inside the running callable never re-enters it. In trailing
    /// mode its input is deferred to the next scheduler turn. In immediate mode it
    /// normally joins the current burst; if the burst already ended (its timer fired
    /// on another thread while the callable was still running) the nested input is
    /// dropped rather than starting a new burst.
    ///
    /// Returns the result of the most recent invocation, `None` before the first one.
    pub fn call(&self, input: T) -> Option<R> {
        let shared = &self.shared;
        let mut state = shared.state.lock();
        let fresh_burst = !state.timer.is_armed();

        let weak = Arc::downgrade(shared);
        state.timer.arm(&shared.scheduler, shared.wait, move |generation| {
            if let Some(shared) = weak.upgrade() {
                shared.fire(generation);
            }
        });
        trace!(wait = ?shared.wait, fresh_burst, "debounce timer armed");

        if !shared.immediate {
            state.captured = Some(input);
            return state.result.clone();
        }
        if !fresh_burst {
            return state.result.clone();
        }

        // The burst marker is armed before invoking, so a call made from inside the
        // callable joins the burst instead of starting a new one.
        drop(state);
        shared.invoke(input)
    }

    /// Runs the pending trailing invocation now, if there is one.
    ///
    /// Returns the result of the most recent invocation.
    pub fn flush(&self) -> Option<R> {
        let shared = &self.shared;
        let mut state = shared.state.lock();
        let input = if state.timer.disarm(&shared.scheduler) {
            state.captured.take()
        } else {
            None
        };

        match input {
            Some(input) => {
                drop(state);
                shared.invoke(input)
            }
            None => state.result.clone(),
        }
    }

    /// Drops the pending deferred call and its captured input.
    pub fn cancel(&self) {
        let shared = &self.shared;
        let mut state = shared.state.lock();
        if state.timer.disarm(&shared.scheduler) {
            debug!("debounce timer cancelled");
        }
        state.captured = None;
    }

    /// Whether a quiet-period timer is outstanding.
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

    pub fn downgrade(&self) -> WeakDebounced<T, R, S> {
        WeakDebounced {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<T, R, S> DebounceShared<T, R, S>
where
    T: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    fn fire(self: &Arc<Self>, generation: u64) {
        let mut state = self.state.lock();
        if !state.timer.claim(generation) {
            trace!(generation, "ignoring stale debounce timer");
            return;
        }
        if self.immediate {
            trace!("debounce burst ended");
            return;
        }
        let Some(input) = state.captured.take() else {
            return;
        };
        drop(state);
        self.invoke(input);
    }

    fn invoke(self: &Arc<Self>, input: T) -> Option<R> {
        match self.callback.try_invoke(input) {
            Ok(result) => {
                self.state.lock().result = Some(result.clone());
                Some(result)
            }
            Err(input) => self.defer(input),
        }
    }

    /// Re-queues an invocation that found the callable already running on this thread.
    fn defer(self: &Arc<Self>, input: T) -> Option<R> {
        debug!("debounced callable is already running; deferring invocation");
        let mut state = self.state.lock();
        // Immediate mode has no trailing call to carry the input.
        if self.immediate {
            return state.result.clone();
        }
        // A newer capture wins over the deferred one.
        if state.captured.is_none() {
            state.captured = Some(input);
        }
        if !state.timer.is_armed() {
            let weak = Arc::downgrade(self);
            state.timer.arm(&self.scheduler, Duration::ZERO, move |generation| {
                if let Some(shared) = weak.upgrade() {
                    shared.fire(generation);
                }
            });
        }
        state.result.clone()
    }
}

impl<T, R, S: Scheduler> Drop for DebounceShared<T, R, S> {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        state.timer.disarm(&self.scheduler);
    }
}

impl<T, R, S: Scheduler> WeakDebounced<T, R, S> {
    pub fn upgrade(&self) -> Option<Debounced<T, R, S>> {
        self.shared.upgrade().map(|shared| Debounced { shared })
    }
}

impl<T, R, S: Scheduler> Clone for Debounced<T, R, S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, R, S: Scheduler> Clone for WeakDebounced<T, R, S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, R, S: Scheduler> fmt::Debug for Debounced<T, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.shared.wait)
            .field("immediate", &self.shared.immediate)
            .field("pending", &self.shared.state.lock().timer.is_armed())
            .finish()
    }
}

impl<T, R, S: Scheduler> fmt::Debug for WeakDebounced<T, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakDebounced")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}
