//! Multiset of values keyed by structural equality.

use affirm_core::{Result, Value};
use tracing::trace;

use crate::equality::EqualityComparer;

/// Counts occurrences of values, comparing keys with an
/// [`EqualityComparer`] so that modifiers such as `ignore_case` apply.
///
/// `null` is kept as its own key. Counts never go below zero: removing a
/// value that is absent, or whose count is exhausted, reports `false`.
///
/// # Example
///
/// ```
/// use affirm_constraints::{CollectionTally, EqualityComparer, Modifiers};
/// use affirm_core::Value;
///
/// let modifiers = Modifiers::default();
/// let items = [Value::from(1), Value::from(1), Value::from(2)];
/// let mut tally = CollectionTally::new(EqualityComparer::new(&modifiers), &items).unwrap();
///
/// assert_eq!(tally.count(&Value::from(1)).unwrap(), 2);
/// assert!(tally.try_remove(&Value::from(2)).unwrap());
/// assert!(!tally.try_remove(&Value::from(2)).unwrap());
/// ```
#[derive(Debug)]
pub struct CollectionTally<'m> {
    comparer: EqualityComparer<'m>,
    entries: Vec<(Value, usize)>,
    nulls: usize,
}

impl<'m> CollectionTally<'m> {
    /// Builds a tally by consuming `items` once.
    pub fn new(comparer: EqualityComparer<'m>, items: &[Value]) -> Result<Self> {
        let mut tally = Self {
            comparer,
            entries: Vec::new(),
            nulls: 0,
        };
        for item in items {
            tally.add(item)?;
        }
        trace!(
            distinct = tally.entries.len(),
            nulls = tally.nulls,
            "tally built"
        );
        Ok(tally)
    }

    fn add(&mut self, item: &Value) -> Result<()> {
        if item.is_null() {
            self.nulls += 1;
            return Ok(());
        }
        match self.position(item)? {
            Some(index) => self.entries[index].1 += 1,
            None => self.entries.push((item.clone(), 1)),
        }
        Ok(())
    }

    fn position(&self, item: &Value) -> Result<Option<usize>> {
        for (index, (key, _)) in self.entries.iter().enumerate() {
            if self.comparer.are_equal(key, item)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Occurrences of `item`.
    pub fn count(&self, item: &Value) -> Result<usize> {
        if item.is_null() {
            return Ok(self.nulls);
        }
        Ok(self
            .position(item)?
            .map_or(0, |index| self.entries[index].1))
    }

    /// Removes one occurrence of `item`, returning `false` if none is left.
    pub fn try_remove(&mut self, item: &Value) -> Result<bool> {
        if item.is_null() {
            if self.nulls == 0 {
                return Ok(false);
            }
            self.nulls -= 1;
            return Ok(true);
        }
        match self.position(item)? {
            Some(index) if self.entries[index].1 > 0 => {
                self.entries[index].1 -= 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Removes one occurrence of each item, stopping at the first that
    /// cannot be removed.
    pub fn try_remove_all(&mut self, items: &[Value]) -> Result<bool> {
        for item in items {
            if !self.try_remove(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true when every count is zero.
    pub fn is_empty(&self) -> bool {
        self.nulls == 0 && self.entries.iter().all(|(_, count)| *count == 0)
    }

    /// Returns true when no value occurs more than once.
    pub fn all_unique(&self) -> bool {
        self.nulls <= 1 && self.entries.iter().all(|(_, count)| *count <= 1)
    }

    /// Number of distinct values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.entries.iter().filter(|(_, count)| *count > 0).count() + usize::from(self.nulls > 0)
    }
}
