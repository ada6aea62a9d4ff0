//! A module for routing the diagnostics of the front-end.
//!
//! The scanner and the later phases never abort on a malformed input; they describe the
//! problem to a [`Handler`] and carry on. What happens to a received error is the receiving
//! end's business: a [`Storage`] collects it for later inspection, and a [`Contexts`] stack
//! buffers it while a speculative consumer decides whether to keep or discard the attempt
//! that produced it.

use std::{
    fmt::Debug,
    sync::{RwLock, RwLockReadGuard},
};

/// Represents a trait responsible for handling diagnostics in the front-end.
pub trait Handler<T> {
    /// Receives an error and handles it.
    fn receive(&self, error: T);
}

/// Is a [`Handler`] that collects every received error, in arrival order.
///
/// This is the collector batch consumers and test suites use to inspect what a scan
/// reported once it is over.
#[derive(Debug)]
pub struct Storage<T> {
    errors: RwLock<Vec<T>>,
}

impl<T> Storage<T> {
    /// Creates a new empty [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(Vec::new()),
        }
    }

    /// Returns the number of errors received so far.
    #[must_use]
    pub fn len(&self) -> usize { self.errors.read().unwrap().len() }

    /// Returns `true` if no error was received.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns a reference to the received errors.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.errors.read().unwrap() }

    /// Consumes the [`Storage`] and returns the received errors.
    pub fn into_vec(self) -> Vec<T> { self.errors.into_inner().unwrap() }
}

impl<T> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Handler<T> for Storage<T> {
    fn receive(&self, error: T) { self.errors.write().unwrap().push(error); }
}

/// Is a marker returned by [`Contexts::save`], identifying the context to later commit or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "a saved context must be either committed or cleared"]
pub struct Context {
    depth: usize,
}

/// Is a [`Handler`] layering a stack of error buffers over a fallback handler.
///
/// While at least one context is saved, received errors accumulate in the innermost buffer
/// instead of reaching the fallback handler. Committing a context merges its buffer into the
/// enclosing one, or forwards everything to the fallback handler when it was the outermost;
/// clearing a context discards its buffer. This is what allows a speculative consumer to try
/// an interpretation of the input, keep its diagnostics on success, and drop them on
/// backtracking.
///
/// Contexts must be committed or cleared in the reverse order of their saves.
pub struct Contexts<'h, T> {
    fallback: &'h dyn Handler<T>,
    buffers: RwLock<Vec<Vec<T>>>,
}

impl<T: Debug> Debug for Contexts<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contexts")
            .field("buffers", &self.buffers)
            .finish()
    }
}

impl<'h, T> Contexts<'h, T> {
    /// Creates a new [`Contexts`] forwarding uncontextualized errors to the given handler.
    #[must_use]
    pub fn new(fallback: &'h dyn Handler<T>) -> Self {
        Self {
            fallback,
            buffers: RwLock::new(Vec::new()),
        }
    }

    /// Installs a fresh error buffer and returns the marker identifying it.
    pub fn save(&self) -> Context {
        let mut buffers = self.buffers.write().unwrap();
        buffers.push(Vec::new());
        Context {
            depth: buffers.len(),
        }
    }

    /// Accepts the errors of the given context.
    ///
    /// The buffer is appended to the enclosing context when there is one, otherwise every
    /// buffered error is forwarded to the fallback handler.
    pub fn commit(&self, context: Context) {
        let mut buffers = self.buffers.write().unwrap();
        assert_eq!(
            buffers.len(),
            context.depth,
            "contexts must be committed in the reverse order of their saves"
        );

        let buffer = buffers.pop().unwrap();
        if let Some(enclosing) = buffers.last_mut() {
            enclosing.extend(buffer);
        } else {
            drop(buffers);
            for error in buffer {
                self.fallback.receive(error);
            }
        }
    }

    /// Discards the errors of the given context.
    pub fn clear(&self, context: Context) {
        let mut buffers = self.buffers.write().unwrap();
        assert_eq!(
            buffers.len(),
            context.depth,
            "contexts must be cleared in the reverse order of their saves"
        );
        buffers.pop();
    }

    /// Returns the number of errors buffered in the innermost context.
    #[must_use]
    pub fn count(&self) -> usize {
        self.buffers
            .read()
            .unwrap()
            .last()
            .map_or(0, Vec::len)
    }
}

impl<T> Handler<T> for Contexts<'_, T> {
    fn receive(&self, error: T) {
        let mut buffers = self.buffers.write().unwrap();
        if let Some(buffer) = buffers.last_mut() {
            buffer.push(error);
        } else {
            drop(buffers);
            self.fallback.receive(error);
        }
    }
}

#[cfg(test)]
mod tests;
