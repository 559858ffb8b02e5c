//! Aggregation of several results into one.
//!
//! Inputs are walked left to right; the first `Failure` wins and nothing after it is looked at.
//! When every input succeeded the values come back in input order:
//! - tuples of 2 to 5 results give a tuple of values, each position keeping its own value
//!   type and its own error type (converted `Into` the common error type);
//! - arrays and `Vec`s share one error type and give a `Vec` of values;
//! - any iterator of results can be collected into `Result<C, E>`, and elements after the
//!   first failure are never pulled from it.
use crate::result::Result::{self, Failure, Success};

/// A fixed group of results that can be folded into a single result.
pub trait AllResults<E> {
    /// The values of the group, in input order, when every member succeeded.
    type Values;

    /// Returns the first failure, or all values.
    fn all(self) -> Result<Self::Values, E>;
}

macro_rules! impl_all_results_for_tuple {
    ($(($idx:tt, $value:ident, $error:ident, $binding:ident)),+) => {
        impl<$($value, $error,)+ E> AllResults<E> for ($(Result<$value, $error>,)+)
        where
            $($error: Into<E>,)+
        {
            type Values = ($($value,)+);

            fn all(self) -> Result<Self::Values, E> {
                $(
                    let $binding = match self.$idx {
                        Success(value) => value,
                        Failure(error) => return Failure(error.into()),
                    };
                )+
                Success(($($binding,)+))
            }
        }
    };
}

impl_all_results_for_tuple!((0, V1, E1, v1), (1, V2, E2, v2));
impl_all_results_for_tuple!((0, V1, E1, v1), (1, V2, E2, v2), (2, V3, E3, v3));
impl_all_results_for_tuple!(
    (0, V1, E1, v1),
    (1, V2, E2, v2),
    (2, V3, E3, v3),
    (3, V4, E4, v4)
);
impl_all_results_for_tuple!(
    (0, V1, E1, v1),
    (1, V2, E2, v2),
    (2, V3, E3, v3),
    (3, V4, E4, v4),
    (4, V5, E5, v5)
);

impl<V, E, const N: usize> AllResults<E> for [Result<V, E>; N] {
    type Values = Vec<V>;

    fn all(self) -> Result<Self::Values, E> {
        self.into_iter().collect()
    }
}

impl<V, E> AllResults<E> for Vec<Result<V, E>> {
    type Values = Vec<V>;

    fn all(self) -> Result<Self::Values, E> {
        self.into_iter().collect()
    }
}

impl<V, E, C> FromIterator<Result<V, E>> for Result<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Result<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let values: C = iter
            .into_iter()
            .map_while(|result| match result {
                Success(value) => Some(value),
                Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .fuse()
            .collect();

        match failure {
            Some(error) => Failure(error),
            None => Success(values),
        }
    }
}

impl<V, E> Result<Vec<V>, E> {
    /// Aggregates a lazily produced sequence of results.
    ///
    /// An empty sequence gives `Success(vec![])`.
    pub fn all_from<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<V, E>>,
    {
        results.into_iter().collect()
    }
}
