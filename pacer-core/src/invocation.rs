// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Captured call input: an explicit receiver travelling next to the arguments.
//!
//! Wrapped callables take a single input value. Plain arguments (a value or a tuple)
//! are enough for most callables; when the callable also cares about the context it
//! is called on, it takes an [`Invocation`] instead, and the receiver is captured and
//! replayed together with the arguments.

/// A call's receiver and arguments, captured verbatim for later replay.
///
/// # Example
///
/// ```
/// use pacer_core::Invocation;
///
/// let call = Invocation::new("a1", ("a2", 3));
/// assert_eq!(call.receiver, "a1");
/// assert_eq!(call.args, ("a2", 3));
///
/// let bare: Invocation<i32> = Invocation::from(7);
/// assert_eq!(bare.into_parts(), ((), 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Invocation<A, C = ()> {
    /// The calling context
    pub receiver: C,
    /// The ordered call arguments
    pub args: A,
}

impl<A, C> Invocation<A, C> {
    /// Captures a call made on `receiver` with `args`.
    pub const fn new(receiver: C, args: A) -> Self {
        Self { receiver, args }
    }

    /// Splits the capture back into `(receiver, args)`.
    pub fn into_parts(self) -> (C, A) {
        (self.receiver, self.args)
    }

    /// Replaces the receiver, keeping the arguments.
    pub fn with_receiver<D>(self, receiver: D) -> Invocation<A, D> {
        Invocation {
            receiver,
            args: self.args,
        }
    }

    /// Transforms the arguments, keeping the receiver.
    pub fn map_args<B>(self, f: impl FnOnce(A) -> B) -> Invocation<B, C> {
        Invocation {
            receiver: self.receiver,
            args: f(self.args),
        }
    }
}

impl<A> From<A> for Invocation<A, ()> {
    fn from(args: A) -> Self {
        Self { receiver: (), args }
    }
}
