//! The `Constraint` capability, its modifiers and the recorded actual value.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use affirm_core::{numerics, Number, Result, Value};

use crate::binary::{AndConstraint, OrConstraint};
use crate::writer::MessageWriter;

/// A custom ordering used in place of the built-in comparison rules.
///
/// When a comparer is attached with [`ConstraintExt::using`], equality
/// constraints treat `Ordering::Equal` as a match and ordering constraints
/// use it instead of numeric promotion.
pub trait ValueComparer: Send + Sync {
    fn compare(&self, x: &Value, y: &Value) -> Ordering;
}

/// A comparer backed by a closure.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use affirm_constraints::{FnComparer, ValueComparer};
/// use affirm_core::Value;
///
/// let by_len = FnComparer::new(|x: &Value, y: &Value| {
///     let len = |v: &Value| v.as_str().map_or(0, str::len);
///     len(x).cmp(&len(y))
/// });
/// assert_eq!(by_len.compare(&"abc".into(), &"xyz".into()), Ordering::Equal);
/// ```
pub struct FnComparer<F> {
    f: F,
}

impl<F> FnComparer<F>
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ValueComparer for FnComparer<F>
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, x: &Value, y: &Value) -> Ordering {
        (self.f)(x, y)
    }
}

/// Settings that change how a constraint compares values.
#[derive(Clone, Default)]
pub struct Modifiers {
    /// Compare strings and chars case-insensitively.
    pub ignore_case: bool,

    /// Compare arrays as flat sequences, ignoring rank and shape.
    pub as_collection: bool,

    /// Numeric tolerance for equality.
    pub tolerance: Option<Number>,

    /// Custom comparer overriding the built-in rules.
    pub comparer: Option<Arc<dyn ValueComparer>>,
}

impl Modifiers {
    /// Folds the settings of an enclosing constraint into these.
    ///
    /// Flags are OR-ed; a tolerance or comparer set on the outer constraint
    /// replaces the inner one.
    pub fn merge(&mut self, outer: &Modifiers) {
        self.ignore_case |= outer.ignore_case;
        self.as_collection |= outer.as_collection;
        if outer.tolerance.is_some() {
            self.tolerance = outer.tolerance;
        }
        if outer.comparer.is_some() {
            self.comparer.clone_from(&outer.comparer);
        }
    }

    /// Three-way comparison honoring the custom comparer.
    pub fn compare(&self, x: &Value, y: &Value) -> Result<Ordering> {
        match &self.comparer {
            Some(comparer) => Ok(comparer.compare(x, y)),
            None => numerics::compare(x, y),
        }
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifiers")
            .field("ignore_case", &self.ignore_case)
            .field("as_collection", &self.as_collection)
            .field("tolerance", &self.tolerance)
            .field("comparer", &self.comparer.is_some())
            .finish()
    }
}

/// The actual value a constraint last tested.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Actual {
    /// `matches` has not been called yet.
    #[default]
    Unset,
    Value(Value),
}

/// State shared by every constraint: the recorded actual and its modifiers.
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    actual: Actual,
    modifiers: Modifiers,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers `actual` for later diagnostics.
    pub fn record(&mut self, actual: &Value) {
        self.actual = Actual::Value(actual.clone());
    }

    /// Returns the recorded actual, if any.
    pub fn actual(&self) -> Option<&Value> {
        match &self.actual {
            Actual::Value(value) => Some(value),
            Actual::Unset => None,
        }
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

/// A composable predicate that can describe itself and its failures.
///
/// `matches` must record the tested value in [`ConstraintState`] so that
/// the message written after a failure can show it. Constraints are
/// stateful and owned by a single assertion.
///
/// # Example
///
/// ```
/// use affirm_constraints::{is, Constraint, TextMessageWriter};
/// use affirm_core::Value;
///
/// let mut constraint = is::greater_than_or_equal_to(5);
/// assert!(!constraint.matches(&Value::from(4)).unwrap());
///
/// let mut writer = TextMessageWriter::new();
/// constraint.write_message_to(&mut writer);
/// assert_eq!(
///     writer.as_str(),
///     "  Expected: greater than or equal to 5\n  But was:  4\n"
/// );
/// ```
pub trait Constraint {
    /// Tests `actual`, recording it for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`AffirmError::InvalidArgument`](affirm_core::AffirmError)
    /// when the constraint is misused, and I/O errors from stream reads.
    fn matches(&mut self, actual: &Value) -> Result<bool>;

    /// Writes the expected side of the failure message.
    fn write_description_to(&self, writer: &mut dyn MessageWriter);

    /// Writes the complete failure message.
    fn write_message_to(&self, writer: &mut dyn MessageWriter) {
        write_default_message(self, writer);
    }

    /// Writes the value shown on the `But was:` line.
    fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
        match self.state().actual() {
            Some(actual) => writer.write_actual_value(actual),
            None => writer.write_unset(),
        }
    }

    fn state(&self) -> &ConstraintState;

    fn state_mut(&mut self) -> &mut ConstraintState;

    /// Merges the modifiers of an enclosing constraint into this one.
    ///
    /// Wrappers that hold further constraints override this to pass the
    /// merged settings on.
    fn apply_modifiers(&mut self, outer: &Modifiers) {
        self.state_mut().modifiers_mut().merge(outer);
    }
}

/// Writes the `Expected:` / `But was:` pair for `constraint`.
pub fn write_default_message<C>(constraint: &C, writer: &mut dyn MessageWriter)
where
    C: Constraint + ?Sized,
{
    writer.write_expected_label();
    constraint.write_description_to(writer);
    writer.write_line();
    writer.write_actual_label();
    constraint.write_actual_value_to(writer);
    writer.write_line();
}

/// A type-erased constraint.
pub type BoxedConstraint = Box<dyn Constraint>;

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn matches(&mut self, actual: &Value) -> Result<bool> {
        (**self).matches(actual)
    }

    fn write_description_to(&self, writer: &mut dyn MessageWriter) {
        (**self).write_description_to(writer);
    }

    fn write_message_to(&self, writer: &mut dyn MessageWriter) {
        (**self).write_message_to(writer);
    }

    fn write_actual_value_to(&self, writer: &mut dyn MessageWriter) {
        (**self).write_actual_value_to(writer);
    }

    fn state(&self) -> &ConstraintState {
        (**self).state()
    }

    fn state_mut(&mut self) -> &mut ConstraintState {
        (**self).state_mut()
    }

    fn apply_modifiers(&mut self, outer: &Modifiers) {
        (**self).apply_modifiers(outer);
    }
}

/// Builder methods available on every sized constraint.
///
/// Each modifier consumes the constraint and returns it reconfigured, so
/// settings are fixed before the first `matches`.
pub trait ConstraintExt: Constraint + Sized {
    /// Compares strings and chars ignoring case.
    fn ignore_case(mut self) -> Self {
        self.state_mut().modifiers_mut().ignore_case = true;
        self
    }

    /// Accepts numeric values within `tolerance` of the expected value.
    fn within(mut self, tolerance: impl Into<Number>) -> Self {
        self.state_mut().modifiers_mut().tolerance = Some(tolerance.into());
        self
    }

    /// Compares arrays as flat collections, ignoring rank and shape.
    fn as_collection(mut self) -> Self {
        self.state_mut().modifiers_mut().as_collection = true;
        self
    }

    /// Uses `comparer` instead of the built-in comparison rules.
    fn using(mut self, comparer: impl ValueComparer + 'static) -> Self {
        self.state_mut().modifiers_mut().comparer = Some(Arc::new(comparer));
        self
    }

    /// Uses a closure instead of the built-in comparison rules.
    fn using_fn<F>(self, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        self.using(FnComparer::new(f))
    }

    /// Succeeds only if both constraints succeed.
    fn and<R: Constraint>(self, right: R) -> AndConstraint<Self, R> {
        AndConstraint::new(self, right)
    }

    /// Succeeds if either constraint succeeds.
    fn or<R: Constraint>(self, right: R) -> OrConstraint<Self, R> {
        OrConstraint::new(self, right)
    }

    fn boxed(self) -> BoxedConstraint
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<C: Constraint> ConstraintExt for C {}

#[cfg(test)]
#[path = "constraint_tests.rs"]
mod tests;
