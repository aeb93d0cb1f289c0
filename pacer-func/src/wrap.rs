// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Routes every call through `wrapper`, which receives the wrapped callable
/// followed by the call's input.
///
/// The wrapper decides whether, when and how often `func` runs, and may adjust
/// its input or result.
///
/// # Example
///
/// ```rust
/// use pacer_func::wrap;
///
/// let greet = |name: String| format!("hi: {name}");
/// let mut backwards = wrap(greet, |greet, name: String| {
///     let reversed: String = name.chars().rev().collect();
///     format!("{} {reversed}", greet(name))
/// });
///
/// assert_eq!(backwards("moe".to_string()), "hi: moe eom");
/// ```
pub fn wrap<F, W, T, R>(mut func: F, mut wrapper: W) -> impl FnMut(T) -> R
where
    W: FnMut(&mut F, T) -> R,
{
    move |input| wrapper(&mut func, input)
}
