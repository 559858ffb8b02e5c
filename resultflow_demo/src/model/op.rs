//! Folding operations.
use clap::ValueEnum;
use resultflow::Result;
use strum_macros::Display;

use crate::error::DemoError;
use crate::result::DemoResult;

/// How the parsed numbers are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[value(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum Op {
    /// Checked addition.
    Sum,
    /// Checked multiplication.
    Product,
    /// Largest value.
    Max,
}

impl Op {
    /// Folds `numbers` left to right. An empty slice is an error.
    pub fn fold(self, numbers: &[i64]) -> DemoResult<i64> {
        let Some((first, rest)) = numbers.split_first() else {
            return Result::err(DemoError::Empty);
        };

        let mut acc = *first;
        for &n in rest {
            let next = match self {
                Op::Sum => acc.checked_add(n),
                Op::Product => acc.checked_mul(n),
                Op::Max => Some(acc.max(n)),
            };
            match next {
                Some(value) => acc = value,
                None => return Result::err(DemoError::Overflow(self)),
            }
        }
        Result::val(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_in_order() {
        assert_eq!(Op::Sum.fold(&[1, 2, 3]).into_value(), Some(6));
        assert_eq!(Op::Product.fold(&[2, 3, 4]).into_value(), Some(24));
        assert_eq!(Op::Max.fold(&[-5, 9, 2]).into_value(), Some(9));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(Op::Sum.fold(&[]), Result::Failure(DemoError::Empty)));
    }

    #[test]
    fn overflow_names_the_operation() {
        let res = Op::Product.fold(&[i64::MAX, 2]);
        assert!(matches!(res, Result::Failure(DemoError::Overflow(Op::Product))));
        assert_eq!(
            res.into_error().map(|e| e.to_string()),
            Some("Overflow while applying product".to_string())
        );
    }
}
