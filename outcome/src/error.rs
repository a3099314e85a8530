use std::any::Any;
use std::error::Error;
use std::fmt;

/// Panic payload raised by [`Outcome::unwrap`](crate::Outcome::unwrap) and
/// [`Outcome::expect`](crate::Outcome::expect) on a failure.
///
/// Holds the failure value as it was, boxed as `dyn Any`, so whoever
/// catches the panic can downcast it back to the concrete type.
pub struct UnwrapFailure {
    value: Box<dyn Any + Send>,
    message: Option<String>,
}

impl UnwrapFailure {
    pub(crate) fn new<E: Any + Send>(value: E, message: Option<String>) -> UnwrapFailure {
        UnwrapFailure {
            value: Box::new(value),
            message,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is<E: Any>(&self) -> bool {
        self.value.is::<E>()
    }

    pub fn value_ref<E: Any>(&self) -> Option<&E> {
        self.value.downcast_ref::<E>()
    }

    /// Take the failure value out, or get `self` back if it is not an `E`.
    pub fn downcast<E: Any>(self) -> Result<E, UnwrapFailure> {
        let UnwrapFailure { value, message } = self;
        match value.downcast::<E>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(UnwrapFailure { value, message }),
        }
    }
}

impl fmt::Debug for UnwrapFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapFailure")
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for UnwrapFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "called `Outcome::unwrap()` on a `Failure` value"),
        }
    }
}

impl Error for UnwrapFailure {}
