//! Structural equality with failure localization.

use std::cmp::Ordering;
use std::io::Read;

use affirm_core::{numerics, Array, ByteStream, ReadSeek, Result, Value};
use smallvec::SmallVec;
use tracing::trace;

use crate::constraint::Modifiers;
use crate::writer::text::{chars_equal, strings_equal};

/// Indices locating the first mismatch, outermost level first.
///
/// Collections contribute an element index, arrays their flat row-major
/// index and streams a byte offset.
pub type FailurePath = SmallVec<[u64; 4]>;

const STREAM_BLOCK_SIZE: usize = 4096;

/// Compares values structurally under a set of [`Modifiers`].
///
/// The comparer holds no state of its own; each call fills the path it is
/// given, so it can be shared freely.
///
/// # Example
///
/// ```
/// use affirm_constraints::{EqualityComparer, FailurePath, Modifiers};
/// use affirm_core::Value;
///
/// let modifiers = Modifiers::default();
/// let comparer = EqualityComparer::new(&modifiers);
/// let mut path = FailurePath::new();
///
/// let expected = Value::from(vec![1, 2, 3]);
/// let actual = Value::from(vec![1, 5, 3]);
/// assert!(!comparer.objects_equal(&expected, &actual, &mut path).unwrap());
/// assert_eq!(path.as_slice(), &[1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EqualityComparer<'m> {
    modifiers: &'m Modifiers,
}

impl<'m> EqualityComparer<'m> {
    pub fn new(modifiers: &'m Modifiers) -> Self {
        Self { modifiers }
    }

    pub fn modifiers(&self) -> &'m Modifiers {
        self.modifiers
    }

    /// Tests equality, discarding the failure location.
    pub fn are_equal(&self, expected: &Value, actual: &Value) -> Result<bool> {
        let mut path = FailurePath::new();
        self.objects_equal(expected, actual, &mut path)
    }

    /// Tests equality, recording where the first mismatch was found.
    ///
    /// On a mismatch inside a collection or stream, the index of the
    /// mismatch is inserted at the front of `path` as the recursion
    /// unwinds.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from stream reads.
    pub fn objects_equal(
        &self,
        expected: &Value,
        actual: &Value,
        path: &mut FailurePath,
    ) -> Result<bool> {
        match (expected, actual) {
            (Value::Null, Value::Null) => return Ok(true),
            (Value::Null, _) | (_, Value::Null) => return Ok(false),
            (Value::Array(e), Value::Array(a)) if !self.modifiers.as_collection => {
                return self.arrays_equal(e, a, path);
            }
            _ => {}
        }

        if let (Some(e), Some(a)) = (expected.collection_items(), actual.collection_items()) {
            return self.collections_equal(e, a, path);
        }

        if let (Value::Stream(e), Value::Stream(a)) = (expected, actual) {
            return self.streams_equal(e, a, path);
        }

        if let Some(comparer) = &self.modifiers.comparer {
            return Ok(comparer.compare(expected, actual) == Ordering::Equal);
        }

        if let (Some(e), Some(a)) = (expected.as_number(), actual.as_number()) {
            return Ok(numerics::are_equal(e, a, self.modifiers.tolerance));
        }

        let ignore_case = self.modifiers.ignore_case;
        Ok(match (expected, actual) {
            (Value::Str(e), Value::Str(a)) => strings_equal(e, a, ignore_case),
            (Value::Char(e), Value::Char(a)) => chars_equal(*e, *a, ignore_case),
            _ => expected == actual,
        })
    }

    fn arrays_equal(&self, expected: &Array, actual: &Array, path: &mut FailurePath) -> Result<bool> {
        let rank = expected.rank();
        if rank != actual.rank() {
            trace!(expected = rank, actual = actual.rank(), "array ranks differ");
            return Ok(false);
        }
        if (1..rank).any(|dim| expected.length(dim) != actual.length(dim)) {
            trace!("array dimensions differ");
            return Ok(false);
        }
        self.collections_equal(expected.items(), actual.items(), path)
    }

    fn collections_equal(
        &self,
        expected: &[Value],
        actual: &[Value],
        path: &mut FailurePath,
    ) -> Result<bool> {
        let mut count = 0;
        for (e, a) in expected.iter().zip(actual) {
            if !self.objects_equal(e, a, path)? {
                break;
            }
            count += 1;
        }

        if count == expected.len() && count == actual.len() {
            return Ok(true);
        }

        trace!(index = count, "collections differ");
        path.insert(0, count as u64);
        Ok(false)
    }

    fn streams_equal(
        &self,
        expected: &ByteStream,
        actual: &ByteStream,
        path: &mut FailurePath,
    ) -> Result<bool> {
        if expected.len() != actual.len() {
            return Ok(false);
        }
        if expected.ptr_eq(actual) {
            return Ok(true);
        }

        let len = expected.len();
        let offset = expected.with_reader(|e| actual.with_reader(|a| first_difference(e, a, len)))?;
        match offset {
            Some(offset) => {
                trace!(offset, "streams differ");
                path.insert(0, offset);
                Ok(false)
            }
            None => Ok(true),
        }
    }
}

fn first_difference(
    expected: &mut dyn ReadSeek,
    actual: &mut dyn ReadSeek,
    len: u64,
) -> std::io::Result<Option<u64>> {
    let mut expected_block = [0u8; STREAM_BLOCK_SIZE];
    let mut actual_block = [0u8; STREAM_BLOCK_SIZE];
    let mut position = 0u64;

    while position < len {
        let chunk = STREAM_BLOCK_SIZE.min((len - position) as usize);
        expected.read_exact(&mut expected_block[..chunk])?;
        actual.read_exact(&mut actual_block[..chunk])?;

        if let Some(i) = expected_block[..chunk]
            .iter()
            .zip(&actual_block[..chunk])
            .position(|(e, a)| e != a)
        {
            return Ok(Some(position + i as u64));
        }
        position += chunk as u64;
    }

    Ok(None)
}
