//! N-dimensional arrays stored in row-major order.

use crate::error::{AffirmError, Result};

use super::{Value, ValueType};

/// An array of arbitrary rank.
///
/// Items are stored flat in row-major order; the shape gives the length of
/// every dimension. Jagged arrays are rank-1 arrays whose items are
/// themselves arrays.
///
/// # Examples
///
/// ```
/// use affirm_core::{Array, Value};
///
/// let grid = Array::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.rank(), 2);
/// assert_eq!(grid.shape(), &[2, 3]);
/// assert_eq!(grid.indices_of(4), vec![1, 1]);
/// assert_eq!(grid.items()[4], Value::from(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    items: Vec<Value>,
    element_type: ValueType,
}

impl Array {
    /// Creates a rank-1 array.
    pub fn new(items: Vec<Value>) -> Self {
        let element_type = infer_element_type(&items);
        Self {
            shape: vec![items.len()],
            items,
            element_type,
        }
    }

    /// Creates an array with an explicit shape over row-major items.
    ///
    /// # Errors
    ///
    /// Returns [`AffirmError::InvalidArgument`] if the shape is empty or
    /// its product differs from the number of items.
    pub fn with_shape(shape: Vec<usize>, items: Vec<Value>) -> Result<Self> {
        if shape.is_empty() {
            return Err(AffirmError::invalid_argument("array rank must be at least 1"));
        }
        let expected: usize = shape.iter().product();
        if expected != items.len() {
            return Err(AffirmError::invalid_argument(format!(
                "shape {:?} requires {} items but {} were given",
                shape,
                expected,
                items.len()
            )));
        }
        let element_type = infer_element_type(&items);
        Ok(Self {
            shape,
            items,
            element_type,
        })
    }

    /// Creates a rectangular rank-2 array from rows.
    ///
    /// # Errors
    ///
    /// Returns [`AffirmError::InvalidArgument`] if the rows differ in length.
    pub fn from_rows<T: Into<Value>>(rows: Vec<Vec<T>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut items = Vec::with_capacity(row_count * columns);
        for row in rows {
            if row.len() != columns {
                return Err(AffirmError::invalid_argument(
                    "rows of a rectangular array must have equal length",
                ));
            }
            items.extend(row.into_iter().map(Into::into));
        }
        Self::with_shape(vec![row_count, columns], items)
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of items across all dimensions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Length of one dimension, or 0 past the rank.
    pub fn length(&self, dimension: usize) -> usize {
        self.shape.get(dimension).copied().unwrap_or(0)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Items in row-major order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub fn element_type(&self) -> &ValueType {
        &self.element_type
    }

    pub fn value_type(&self) -> ValueType {
        ValueType::array(self.element_type.clone(), self.rank())
    }

    /// Converts a flat row-major index into one index per dimension.
    pub fn indices_of(&self, flat: usize) -> Vec<usize> {
        let mut index = flat;
        let mut result = vec![0; self.rank()];
        for r in (1..self.rank()).rev() {
            let length = self.shape[r];
            if length > 0 {
                result[r] = index % length;
                index /= length;
            }
        }
        if let Some(first) = result.first_mut() {
            *first = index;
        }
        result
    }
}

/// Infers the element type shared by all non-null items.
///
/// Mixed or absent types fall back to [`ValueType::OBJECT`].
pub(crate) fn infer_element_type(items: &[Value]) -> ValueType {
    let mut types = items.iter().filter_map(Value::value_type);
    let Some(first) = types.next() else {
        return ValueType::OBJECT;
    };
    if types.all(|t| t == first) {
        first
    } else {
        ValueType::OBJECT
    }
}
