//! Literal syntax for nested tensors.

/// Build a [`Tensor`](crate::Tensor) from a nested bracket literal.
///
/// Bracketed groups become sequences; any other token becomes a scalar.
/// Scalars spanning several tokens (such as `-1`) must be parenthesized.
///
/// # Examples
///
/// ```
/// use nestrs_core::{tensor, Tensor};
///
/// let matrix: Tensor<i32> = tensor!([[1, 2], [(-3), 4]]);
/// assert_eq!(matrix.to_string(), "[[1, 2], [-3, 4]]");
///
/// let ragged: Tensor<&str> = tensor!([["a"], [], ["b", "c"]]);
/// assert_eq!(ragged.len(), Some(3));
/// ```
#[macro_export]
macro_rules! tensor {
    ([$($elem:tt),* $(,)?]) => {
        $crate::Tensor::from_elements(::std::vec![$($crate::tensor!($elem)),*])
    };
    // Strip the grouping parentheses of multi-token scalars
    (($value:expr)) => {
        $crate::Tensor::scalar($value)
    };
    ($value:expr) => {
        $crate::Tensor::scalar($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::Tensor;

    #[test]
    fn test_nested_literal() {
        let t: Tensor<i32> = tensor!([[1, 2], [3, 4]]);
        let expected = Tensor::from_elements(vec![
            Tensor::from_scalars([1, 2]),
            Tensor::from_scalars([3, 4]),
        ]);
        assert_eq!(t, expected);
    }

    #[test]
    fn test_trailing_comma_and_empty() {
        let t: Tensor<u8> = tensor!([[], [1,],]);
        assert_eq!(t.to_string(), "[[], [1]]");
    }

    #[test]
    fn test_scalar_literal() {
        let t = tensor!((2 + 3));
        assert_eq!(t, Tensor::scalar(5));
    }

    #[test]
    fn test_parenthesized_elements() {
        let t: Tensor<i32> = tensor!([[(-1), 2], [(3 * 4)]]);
        assert_eq!(t.to_string(), "[[-1, 2], [12]]");

        let s: Tensor<String> = tensor!([(String::from("a")), (format!("{}", 'b'))]);
        assert_eq!(s, Tensor::from_scalars([String::from("a"), String::from("b")]));
    }

    #[test]
    fn test_tuple_scalar() {
        let t: Tensor<(i32, i32)> = tensor!([(1, 2)]);
        assert_eq!(**t.get(0).unwrap().as_scalar().unwrap(), (1, 2));
    }
}
