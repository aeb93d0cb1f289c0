// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Shared string that callables append to; its final value shows the call order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    text: Arc<Mutex<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, fragment: &str) {
        self.text.lock().push_str(fragment);
    }

    pub fn value(&self) -> String {
        self.text.lock().clone()
    }
}
