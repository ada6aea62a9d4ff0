//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing.
//!
//! A test spells out an input (a literal, a name, a token sequence), feeds it through the
//! front-end, and asserts the output against the input that produced it. The lifting impls
//! below let one input assertion reach through the shapes the outputs come in: shared nodes,
//! optional values, and sequences.

use std::sync::Arc;

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents an input generated for testing purposes.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

/// Nodes are shared through reference counting, so an input asserts against the pointee.
impl<T, U> Input<&Arc<T>> for &U
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &Arc<T>) -> TestCaseResult { self.assert(output.as_ref()) }
}

impl<T, U> Input<Option<T>> for Option<U>
where
    U: Input<T>,
{
    fn assert(self, output: Option<T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (Some(_), None) => Err(TestCaseError::fail("expected Some, found None")),
            (None, Some(_)) => Err(TestCaseError::fail("expected None, found Some")),
        }
    }
}

/// Sequences match element-wise, e.g. the scanned values of a token stream against the
/// inputs that spelled them.
impl<T, U> Input<&[T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &[T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output)?;
        }

        Ok(())
    }
}
