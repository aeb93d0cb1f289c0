// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every wrapper.
//!
//! ```rust
//! use pacer_func::prelude::*;
//!
//! let mut greet_once = once(|name: &'static str| format!("hello {name}"));
//! assert_eq!(greet_once("moe"), "hello moe");
//! assert_eq!(greet_once("curly"), "hello moe");
//! ```

pub use crate::compose;
pub use crate::{after, before, negate, once, wrap, Invocation};
