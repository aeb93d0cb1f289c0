// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Stack of follow-up inputs, popped from the back.
///
/// Re-entrant test callables pop one entry per invocation and feed it back into
/// their own wrapper until the stack runs dry.
#[derive(Debug)]
pub struct Sequence<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    pub fn pop(&self) -> Option<T> {
        self.items.lock().pop()
    }

    pub fn remaining(&self) -> usize {
        self.items.lock().len()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}
