// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::Not;

/// Returns the complement of `predicate`'s result.
pub fn negate<P, T, R>(mut predicate: P) -> impl FnMut(T) -> R::Output
where
    P: FnMut(T) -> R,
    R: Not,
{
    move |input| !predicate(input)
}
