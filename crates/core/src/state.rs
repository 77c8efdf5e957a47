use thiserror::Error;

/// Errors from shape-checked operations on [`StateVector`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Elementwise operands have different shapes.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    Mismatch { left: Vec<usize>, right: Vec<usize> },

    /// Data length disagrees with the number of elements the shape implies.
    #[error("shape {shape:?} holds {expected} elements, got {actual}")]
    Size {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// First-axis index is out of bounds, or the tensor is a scalar.
    #[error("row {index} out of bounds for shape {shape:?}")]
    Row { shape: Vec<usize>, index: usize },

    /// Stacking requires at least one row.
    #[error("cannot stack zero rows")]
    EmptyStack,
}

/// A runtime-shaped numeric tensor holding one instant of dynamical state.
///
/// Shapes are arbitrary: `[]` is a scalar, `[2]` a position/velocity pair,
/// `[2, 2]` a stacked batch of such pairs. Elementwise operations are shape
/// checked, and [`row`](Self::row) / [`from_rows`](Self::from_rows) give
/// access along the first axis, so a derivative written against rows applies
/// elementwise over the trailing axes and works unchanged for `[2]` and
/// `[2, n]` states.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl StateVector {
    /// Creates a rank-zero tensor holding a single value.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Creates a rank-one tensor from a vector of values.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Creates a tensor with the given shape from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Size`] if `data.len()` differs from the number
    /// of elements the shape implies.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, ShapeError> {
        let expected = shape.iter().product();
        if data.len() != expected {
            return Err(ShapeError::Size {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a tensor with every element set to `value`.
    #[must_use]
    pub fn full(shape: &[usize], value: f64) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: vec![value; len],
        }
    }

    /// Creates a zero-filled tensor with the given shape.
    #[must_use]
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, 0.0)
    }

    /// Returns the tensor shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tensor holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Elementwise sum of two tensors of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Mismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, ShapeError> {
        if self.shape != other.shape {
            return Err(ShapeError::Mismatch {
                left: self.shape.clone(),
                right: other.shape.clone(),
            });
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect();
        Ok(Self {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Multiplies every element by a scalar factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let data = self.data.iter().map(|v| v * factor).collect();
        Self {
            shape: self.shape.clone(),
            data,
        }
    }

    /// Returns the sub-tensor at `index` along the first axis.
    ///
    /// For a `[2, 3]` tensor, `row(0)` is the first `[3]` vector; for a
    /// `[2]` tensor, rows are scalars.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Row`] if the tensor is a scalar or the index is
    /// out of bounds.
    pub fn row(&self, index: usize) -> Result<Self, ShapeError> {
        let Some((&axis, rest)) = self.shape.split_first() else {
            return Err(ShapeError::Row {
                shape: self.shape.clone(),
                index,
            });
        };
        if index >= axis {
            return Err(ShapeError::Row {
                shape: self.shape.clone(),
                index,
            });
        }
        let stride: usize = rest.iter().product();
        let start = index * stride;
        Ok(Self {
            shape: rest.to_vec(),
            data: self.data[start..start + stride].to_vec(),
        })
    }

    /// Stacks identically shaped tensors along a new first axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EmptyStack`] for an empty slice and
    /// [`ShapeError::Mismatch`] if any row's shape differs from the first's.
    pub fn from_rows(rows: &[Self]) -> Result<Self, ShapeError> {
        let Some((first, rest)) = rows.split_first() else {
            return Err(ShapeError::EmptyStack);
        };

        let mut shape = Vec::with_capacity(first.shape.len() + 1);
        shape.push(rows.len());
        shape.extend_from_slice(&first.shape);

        let mut data = Vec::with_capacity(rows.len() * first.data.len());
        data.extend_from_slice(&first.data);
        for row in rest {
            if row.shape != first.shape {
                return Err(ShapeError::Mismatch {
                    left: first.shape.clone(),
                    right: row.shape.clone(),
                });
            }
            data.extend_from_slice(&row.data);
        }

        Ok(Self { shape, data })
    }
}

/// A trait for state types an explicit solver can advance using a derivative.
///
/// Stepping computes `self + derivative * dt`; elementwise addition and
/// scalar multiplication are the only operations integration requires of a
/// state. The step is fallible because a runtime-shaped state can disagree
/// with the shape of the derivative it is handed.
pub trait StepIntegrable: Sized {
    /// The derivative of the type with respect to time.
    type Derivative;

    /// Returns the state advanced by `derivative * dt`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the derivative's shape disagrees with the
    /// state's shape.
    fn step(&self, derivative: &Self::Derivative, dt: f64) -> Result<Self, ShapeError>;
}

/// Type alias for the derivative of a [`StepIntegrable`] type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T> = <T as StepIntegrable>::Derivative;

impl StepIntegrable for f64 {
    type Derivative = f64;

    fn step(&self, derivative: &f64, dt: f64) -> Result<Self, ShapeError> {
        Ok(self + derivative * dt)
    }
}

impl StepIntegrable for StateVector {
    type Derivative = StateVector;

    fn step(&self, derivative: &StateVector, dt: f64) -> Result<Self, ShapeError> {
        self.try_add(&derivative.scale(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_scalar_state() {
        let position = 0.0_f64;
        let velocity = 2.0;

        let next = position.step(&velocity, 0.5).expect("scalar step");

        assert_relative_eq!(next, 1.0);
    }

    #[test]
    fn step_vector_state() {
        let state = StateVector::from_vec(vec![1.0, 2.0, 3.0]);
        let derivative = StateVector::from_vec(vec![0.1, 0.2, 0.3]);

        let next = state.step(&derivative, 10.0).expect("vector step");

        assert_eq!(next, StateVector::from_vec(vec![2.0, 4.0, 6.0]));
    }

    #[test]
    fn step_rejects_mismatched_shapes() {
        let state = StateVector::from_vec(vec![1.0, 2.0]);
        let derivative = StateVector::from_vec(vec![1.0, 2.0, 3.0]);

        let err = state.step(&derivative, 0.1);

        assert!(matches!(err, Err(ShapeError::Mismatch { .. })));
    }

    #[test]
    fn from_shape_vec_checks_length() {
        let ok = StateVector::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ok.expect("valid shape").shape(), &[2, 2]);

        let err = StateVector::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            err,
            Err(ShapeError::Size {
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn rows_of_a_matrix_are_vectors() {
        let tensor = StateVector::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0])
            .expect("valid shape");

        assert_eq!(tensor.row(0).expect("row 0"), StateVector::from_vec(vec![1.0, 2.0]));
        assert_eq!(tensor.row(1).expect("row 1"), StateVector::from_vec(vec![3.0, 4.0]));
        assert!(matches!(tensor.row(2), Err(ShapeError::Row { index: 2, .. })));
    }

    #[test]
    fn rows_of_a_vector_are_scalars() {
        let vector = StateVector::from_vec(vec![5.0, 7.0]);

        let row = vector.row(1).expect("row 1");

        assert_eq!(row.shape(), &[] as &[usize]);
        assert_relative_eq!(row.as_slice()[0], 7.0);
    }

    #[test]
    fn scalars_have_no_rows() {
        let scalar = StateVector::scalar(3.0);
        assert!(matches!(scalar.row(0), Err(ShapeError::Row { .. })));
    }

    #[test]
    fn stacking_rows_rebuilds_the_tensor() {
        let tensor = StateVector::from_shape_vec(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
            .expect("valid shape");

        let rows = [tensor.row(0).expect("row 0"), tensor.row(1).expect("row 1")];
        let rebuilt = StateVector::from_rows(&rows).expect("stack rows");

        assert_eq!(rebuilt, tensor);
    }

    #[test]
    fn stacking_rejects_inconsistent_rows() {
        let rows = [
            StateVector::from_vec(vec![1.0, 2.0]),
            StateVector::scalar(3.0),
        ];
        assert!(matches!(
            StateVector::from_rows(&rows),
            Err(ShapeError::Mismatch { .. })
        ));

        assert!(matches!(
            StateVector::from_rows(&[]),
            Err(ShapeError::EmptyStack)
        ));
    }

    #[test]
    fn scale_and_add_are_elementwise() {
        let tensor = StateVector::from_vec(vec![1.0, -2.0]);

        let scaled = tensor.scale(-3.0);
        assert_eq!(scaled, StateVector::from_vec(vec![-3.0, 6.0]));

        let sum = tensor.try_add(&scaled).expect("matching shapes");
        assert_eq!(sum, StateVector::from_vec(vec![-2.0, 4.0]));
    }

    #[test]
    fn zeros_match_requested_shape() {
        let zeros = StateVector::zeros(&[2, 2]);

        assert_eq!(zeros.shape(), &[2, 2]);
        assert_eq!(zeros.len(), 4);
        assert!(zeros.as_slice().iter().all(|&v| v == 0.0));
    }
}
