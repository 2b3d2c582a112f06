//! Fluent constructors for the built-in constraints.
//!
//! ```
//! use affirm_constraints::{has, is, text, Constraint, ConstraintExt};
//! use affirm_core::Value;
//!
//! let mut constraint = is::not(is::null()).and(has::property_with("Length", is::greater_than(2)));
//! assert!(constraint.matches(&Value::from("abc")).unwrap());
//!
//! let mut prefix = text::starts_with("ab").ignore_case();
//! assert!(prefix.matches(&Value::from("ABC")).unwrap());
//! ```

use affirm_core::Value;

use crate::contains::ContainsConstraint;

/// Polymorphic containment: substring for strings, element otherwise.
pub fn contains(expected: impl Into<Value>) -> ContainsConstraint {
    ContainsConstraint::new(expected)
}

/// Constraints phrased as "is ...".
pub mod is {
    use affirm_core::{StaticType, Value, ValueType};

    use crate::collection::{
        CollectionEquivalentConstraint, CollectionSubsetConstraint, UniqueItemsConstraint,
    };
    use crate::comparison::{ComparisonConstraint, RangeConstraint};
    use crate::constraint::Constraint;
    use crate::empty::EmptyConstraint;
    use crate::equality::EqualConstraint;
    use crate::identity::SameAsConstraint;
    use crate::prefix::{AllItemsConstraint, NotConstraint};
    use crate::types::{AssignableFromConstraint, ExactTypeConstraint, InstanceOfTypeConstraint};

    pub fn equal_to(expected: impl Into<Value>) -> EqualConstraint {
        EqualConstraint::new(expected)
    }

    pub fn not_equal_to(expected: impl Into<Value>) -> NotConstraint<EqualConstraint> {
        NotConstraint::new(EqualConstraint::new(expected))
    }

    pub fn null() -> EqualConstraint {
        EqualConstraint::new(Value::Null)
    }

    pub fn not_null() -> NotConstraint<EqualConstraint> {
        NotConstraint::new(null())
    }

    pub fn greater_than(expected: impl Into<Value>) -> ComparisonConstraint {
        ComparisonConstraint::greater_than(expected)
    }

    pub fn greater_than_or_equal_to(expected: impl Into<Value>) -> ComparisonConstraint {
        ComparisonConstraint::greater_than_or_equal_to(expected)
    }

    pub fn less_than(expected: impl Into<Value>) -> ComparisonConstraint {
        ComparisonConstraint::less_than(expected)
    }

    pub fn less_than_or_equal_to(expected: impl Into<Value>) -> ComparisonConstraint {
        ComparisonConstraint::less_than_or_equal_to(expected)
    }

    /// Inclusive range; see [`RangeConstraint`] for exclusive bounds.
    pub fn in_range(low: impl Into<Value>, high: impl Into<Value>) -> RangeConstraint {
        RangeConstraint::new(low, high)
    }

    pub fn same_as(expected: impl Into<Value>) -> SameAsConstraint {
        SameAsConstraint::new(expected)
    }

    pub fn empty() -> EmptyConstraint {
        EmptyConstraint::new()
    }

    pub fn not_empty() -> NotConstraint<EmptyConstraint> {
        NotConstraint::new(EmptyConstraint::new())
    }

    pub fn exact_type(expected: ValueType) -> ExactTypeConstraint {
        ExactTypeConstraint::new(expected)
    }

    pub fn exact_type_of<T: StaticType>() -> ExactTypeConstraint {
        ExactTypeConstraint::of::<T>()
    }

    pub fn instance_of(expected: ValueType) -> InstanceOfTypeConstraint {
        InstanceOfTypeConstraint::new(expected)
    }

    pub fn assignable_from(expected: ValueType) -> AssignableFromConstraint {
        AssignableFromConstraint::new(expected)
    }

    pub fn unique() -> UniqueItemsConstraint {
        UniqueItemsConstraint::new()
    }

    pub fn equivalent_to(expected: impl Into<Value>) -> CollectionEquivalentConstraint {
        CollectionEquivalentConstraint::new(expected)
    }

    pub fn subset_of(expected: impl Into<Value>) -> CollectionSubsetConstraint {
        CollectionSubsetConstraint::new(expected)
    }

    pub fn all<C: Constraint>(base: C) -> AllItemsConstraint<C> {
        AllItemsConstraint::new(base)
    }

    pub fn not<C: Constraint>(base: C) -> NotConstraint<C> {
        NotConstraint::new(base)
    }
}

/// Constraints phrased as "has ...".
pub mod has {
    use affirm_core::Value;

    use crate::collection::CollectionContainsConstraint;
    use crate::constraint::Constraint;
    use crate::prefix::{AllItemsConstraint, NoItemConstraint, SomeItemsConstraint};
    use crate::property::PropertyConstraint;

    pub fn property(name: impl Into<String>) -> PropertyConstraint {
        PropertyConstraint::exists(name)
    }

    pub fn property_with(
        name: impl Into<String>,
        base: impl Constraint + 'static,
    ) -> PropertyConstraint {
        PropertyConstraint::new(name, base)
    }

    pub fn member(expected: impl Into<Value>) -> CollectionContainsConstraint {
        CollectionContainsConstraint::new(expected)
    }

    pub fn some<C: Constraint>(base: C) -> SomeItemsConstraint<C> {
        SomeItemsConstraint::new(base)
    }

    pub fn none<C: Constraint>(base: C) -> NoItemConstraint<C> {
        NoItemConstraint::new(base)
    }

    pub fn all<C: Constraint>(base: C) -> AllItemsConstraint<C> {
        AllItemsConstraint::new(base)
    }
}

/// String constraints.
pub mod text {
    use crate::strings::{
        EndsWithConstraint, RegexConstraint, StartsWithConstraint, SubstringConstraint,
    };

    pub fn contains(expected: impl Into<String>) -> SubstringConstraint {
        SubstringConstraint::new(expected)
    }

    pub fn starts_with(expected: impl Into<String>) -> StartsWithConstraint {
        StartsWithConstraint::new(expected)
    }

    pub fn ends_with(expected: impl Into<String>) -> EndsWithConstraint {
        EndsWithConstraint::new(expected)
    }

    pub fn matches(pattern: impl Into<String>) -> RegexConstraint {
        RegexConstraint::new(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{BoxedConstraint, Constraint, ConstraintExt};
    use crate::test_utils::{check, description_of};

    #[test]
    fn test_builders_describe_themselves() {
        assert_eq!(description_of(&is::not_equal_to(3)), "not 3");
        assert_eq!(description_of(&is::not_null()), "not null");
        assert_eq!(description_of(&is::not_empty()), "not <empty>");
        assert_eq!(description_of(&is::in_range(1, 2)), "between 1 and 2");
        assert_eq!(description_of(&is::unique()), "all items unique");
        assert_eq!(description_of(&has::member(2)), "collection containing 2");
        assert_eq!(description_of(&has::none(is::null())), "no item null");
        assert_eq!(description_of(&text::matches("a+")), "String matching \"a+\"");
        assert_eq!(description_of(&is::exact_type_of::<String>()), "<String>");
    }

    #[test]
    fn test_builders_compose() {
        let mut constraint = is::all(is::not_null().and(is::greater_than(0)));
        assert!(check(&mut constraint, vec![1, 2]));
        assert!(!check(&mut constraint, vec![Value::from(1), Value::Null]));
    }

    #[test]
    fn test_boxed_constraints_mix() {
        let mut constraints: Vec<BoxedConstraint> = vec![
            is::equal_to(4).boxed(),
            is::in_range(0, 10).boxed(),
            text::contains("4").boxed(),
        ];
        let results: Vec<bool> = constraints
            .iter_mut()
            .map(|c| c.matches(&Value::from(4)).unwrap())
            .collect();
        assert_eq!(results, vec![true, true, false]);
    }
}
