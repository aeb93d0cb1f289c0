// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Counting and combinator wrappers for callables.
//!
//! Every wrapper takes ownership of the callable and returns a plain `FnMut`
//! closure. Calling the returned closure requires exclusive access, so a wrapped
//! callable can never re-enter itself and none of the wrappers need a recursion guard.
//!
//! # Overview
//!
//! | Wrapper | Invokes the callable |
//! |---------|----------------------|
//! | [`once`] | on the first call; later calls return the memoized result |
//! | [`after`] | on every call from the `n`-th onward |
//! | [`before`] | on every call strictly before the `n`-th, then freezes |
//! | [`wrap`] | through a wrapper that receives the callable and the input |
//! | [`compose()`] / [`compose!`] | right to left, each feeding the next |
//! | [`negate`] | and complements its result |
//!
//! A callable that cares about its calling context takes an
//! [`Invocation`] as input; the receiver then travels with the arguments through
//! every wrapper.
//!
//! # Example
//!
//! ```rust
//! use pacer_func::{after, compose, negate};
//!
//! let is_odd = |n: u32| n % 2 == 1;
//! let mut is_even = negate(is_odd);
//! assert!(is_even(4));
//!
//! let mut shout = compose(|s: String| s + "!", |name: &str| format!("hi: {name}"));
//! assert_eq!(shout("moe"), "hi: moe!");
//!
//! let mut on_third = after(3, |n: u32| n * 10);
//! assert_eq!(on_third(1), None);
//! assert_eq!(on_third(2), None);
//! assert_eq!(on_third(3), Some(30));
//! ```

mod compose;
mod counting;
mod negate;
mod wrap;

pub mod prelude;

pub use compose::compose;
pub use counting::{after, before, once};
pub use negate::negate;
pub use pacer_core::Invocation;
pub use wrap::wrap;
