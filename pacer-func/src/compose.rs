// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Composes two callables right to left: `compose(f, g)(x) == f(g(x))`.
///
/// `g` receives the original input and `f` receives `g`'s result. Use
/// [`compose!`](crate::compose!) for more than two callables.
pub fn compose<F, G, T, U, R>(mut f: F, mut g: G) -> impl FnMut(T) -> R
where
    F: FnMut(U) -> R,
    G: FnMut(T) -> U,
{
    move |input| f(g(input))
}

/// Composes any number of callables right to left.
///
/// The rightmost callable receives the original input; every other callable
/// receives the single result of the one to its right.
///
/// # Example
///
/// ```rust
/// use pacer_func::compose;
///
/// let mut pipeline = compose!(
///     |n: i32| n.to_string(),
///     |n: i32| n * 2,
///     |(x, y, z): (i32, i32, i32)| x * y * z,
/// );
///
/// assert_eq!(pipeline((1, 2, 3)), "12");
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($f, $crate::compose!($($rest),+))
    };
}
