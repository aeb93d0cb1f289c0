// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Ordered record of the inputs a callable received.
#[derive(Debug)]
pub struct CallLog<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallLog<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, input: T) {
        self.calls.lock().push(input);
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T: Clone> CallLog<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<T: Send + 'static> CallLog<T> {
    /// A callable recording its input and returning how many calls were recorded.
    pub fn recorder(&self) -> impl FnMut(T) -> usize + Send + 'static {
        let log = self.clone();
        move |input| {
            let mut calls = log.calls.lock();
            calls.push(input);
            calls.len()
        }
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
