use core::fmt;

/// Either a computed value (`Success`) or the reason it could not be
/// computed (`Failure`).
///
/// Every combinator consumes the outcome and hands back a new one; an
/// existing value never changes variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn success(value: T) -> Outcome<T, E> {
        Outcome::Success(value)
    }

    #[inline]
    pub fn failure(value: E) -> Outcome<T, E> {
        Outcome::Failure(value)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn success_value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure_value(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Borrow both payloads, so combinators can run without giving up `self`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    /// Returns `other` if this is a success, otherwise keeps the failure.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chains a fallible step onto a success. `f` is not called on a
    /// failure, and whatever it returns is passed on unwrapped.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(f)
    }

    /// Returns `other` if this is a failure, otherwise keeps the success.
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => other,
        }
    }

    /// Recovers from a failure. `f` is not called on a success.
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => f(failure),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => supplier(),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Result<T, E> {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T, E> fmt::Display for Outcome<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({})", value),
            Outcome::Failure(failure) => write!(f, "Failure({})", failure),
        }
    }
}
