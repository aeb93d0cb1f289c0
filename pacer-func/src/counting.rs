// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cell::OnceCell;

/// Invokes `func` on the first call only.
///
/// Every later call returns a clone of the first result without invoking again.
///
/// # Example
///
/// ```rust
/// use pacer_func::once;
///
/// let mut runs = 0;
/// let mut init = once(|base: u32| {
///     runs += 1;
///     base * 2
/// });
///
/// assert_eq!(init(21), 42);
/// assert_eq!(init(100), 42);
/// drop(init);
/// assert_eq!(runs, 1);
/// ```
pub fn once<F, T, R>(mut func: F) -> impl FnMut(T) -> R
where
    F: FnMut(T) -> R,
    R: Clone,
{
    let memo = OnceCell::new();
    move |input| memo.get_or_init(|| func(input)).clone()
}

/// Invokes `func` on every call from the `times`-th onward.
///
/// Earlier calls return `None` without invoking. `after(0, ..)` and `after(1, ..)`
/// both invoke from the first call.
pub fn after<F, T, R>(times: usize, mut func: F) -> impl FnMut(T) -> Option<R>
where
    F: FnMut(T) -> R,
{
    let mut calls = 0usize;
    move |input| {
        calls = calls.saturating_add(1);
        (calls >= times).then(|| func(input))
    }
}

/// Invokes `func` on every call strictly before the `times`-th.
///
/// Each call returns the result of the most recent invocation (`None` if there
/// has been none). From the `times`-th call on the result is frozen and `func`
/// is dropped. `before(0, ..)` and `before(1, ..)` never invoke.
///
/// # Example
///
/// ```rust
/// use pacer_func::before;
///
/// let mut count = 0;
/// let mut incr = before(3, move |()| {
///     count += 1;
///     count
/// });
///
/// assert_eq!(incr(()), Some(1));
/// assert_eq!(incr(()), Some(2));
/// assert_eq!(incr(()), Some(2));
/// ```
pub fn before<F, T, R>(times: usize, func: F) -> impl FnMut(T) -> Option<R>
where
    F: FnMut(T) -> R,
    R: Clone,
{
    let mut remaining = times;
    let mut func = Some(func);
    let mut memo = None;
    move |input| {
        remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            if let Some(func) = func.as_mut() {
                memo = Some(func(input));
            }
        }
        if remaining <= 1 {
            func = None;
        }
        memo.clone()
    }
}
