/// Unwraps a success, or returns the failure from the enclosing function,
/// converted with `From`.
#[macro_export]
macro_rules! try_outcome {
    ($outcome: expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(failure) => {
                return $crate::Outcome::Failure(::core::convert::From::from(failure));
            }
        }
    };
}

#[macro_export]
macro_rules! fail {
    ($failure: expr) => {
        return $crate::Outcome::Failure($failure)
    };
}
