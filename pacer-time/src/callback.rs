// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cell::RefCell;
use parking_lot::ReentrantMutex;

type BoxedFn<T, R> = Box<dyn FnMut(T) -> R + Send>;

/// The wrapped callable.
///
/// Invocations from different threads are serialized. An invocation attempted
/// from inside the callable's own body (same thread) cannot alias the `FnMut`,
/// so the input is handed back to the caller instead.
pub(crate) struct Callback<T, R> {
    func: ReentrantMutex<RefCell<BoxedFn<T, R>>>,
}

impl<T, R> Callback<T, R> {
    pub(crate) fn new<F>(func: F) -> Self
    where
        F: FnMut(T) -> R + Send + 'static,
    {
        Self {
            func: ReentrantMutex::new(RefCell::new(Box::new(func))),
        }
    }

    /// Runs the callable, or returns `Err(input)` when it is already running on
    /// this thread.
    pub(crate) fn try_invoke(&self, input: T) -> Result<R, T> {
        let guard = self.func.lock();
        let Ok(mut borrowed) = guard.try_borrow_mut() else {
            return Err(input);
        };
        let func = &mut *borrowed;
        Ok(func(input))
    }
}
