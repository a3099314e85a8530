use crate::Outcome;
use std::any::Any;
use std::panic::{self, UnwindSafe};

impl<T, E> Outcome<T, E>
where
    E: Any + Send,
{
    /// Runs `f` and turns a panic raised with an `E` payload into a failure.
    ///
    /// `E` is the only kind of panic that is caught. A panic with any other
    /// payload, including a plain `panic!("...")` when `E` is not `&str` or
    /// `String`, resumes unwinding untouched.
    ///
    /// ```
    /// use outcome::{raise, Outcome};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Timeout(u64);
    ///
    /// let ret = Outcome::<u32, Timeout>::catching(|| raise(Timeout(30)));
    /// assert_eq!(ret, Outcome::failure(Timeout(30)));
    /// ```
    pub fn catching<F>(f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(recover(payload)),
        }
    }
}

/// Raise `failure` as a panic payload, for [`Outcome::catching`] to pick up.
#[track_caller]
pub fn raise<E: Any + Send>(failure: E) -> ! {
    panic::panic_any(failure)
}

/// Moves an `E` out of a panic payload, or keeps unwinding with it.
pub(crate) fn recover<E: Any + Send>(payload: Box<dyn Any + Send>) -> E {
    match payload.downcast::<E>() {
        Ok(failure) => {
            log::debug!(
                "caught panic of kind {}, converting to failure",
                std::any::type_name::<E>()
            );
            *failure
        }
        Err(payload) => {
            log::trace!(
                "panic is not of kind {}, resuming unwind",
                std::any::type_name::<E>()
            );
            panic::resume_unwind(payload)
        }
    }
}
