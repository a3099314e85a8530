use crate::{Outcome, UnwrapFailure};
use std::any::Any;
use std::panic;

/// Loud extraction.
///
/// The failure value travels inside the panic payload, so it must be
/// `Any + Send`, which also means `'static`. An outcome holding a borrowed
/// failure such as `&'a str`, or a non-`Send` one such as `Rc<..>`, has no
/// `unwrap`; use [`unwrap_or`](Outcome::unwrap_or),
/// [`unwrap_or_else`](Outcome::unwrap_or_else) or [`ok`](Outcome::ok)
/// instead.
impl<T, E> Outcome<T, E>
where
    E: Any + Send,
{
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// On a failure, panics with an [`UnwrapFailure`] payload holding the
    /// failure value, reported at the caller's location. Catch it with
    /// `std::panic::catch_unwind` or [`Outcome::catching`] and downcast to
    /// get the value back.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(failure) => panic::panic_any(UnwrapFailure::new(failure, None)),
        }
    }

    /// Like [`unwrap`](Outcome::unwrap), but the [`UnwrapFailure`] also
    /// carries `message`.
    ///
    /// # Panics
    ///
    /// On a failure, at the caller's location. The default panic hook cannot
    /// print a non-string payload, so `message` is not part of its output;
    /// downcast the payload to [`UnwrapFailure`] and read
    /// [`message`](UnwrapFailure::message).
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(failure) => {
                panic::panic_any(UnwrapFailure::new(failure, Some(message.to_owned())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raise;
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    thread_local! {
        static LOCATION: RefCell<Option<(String, u32)>> = RefCell::new(None);
    }

    fn unwrap_failure<F: FnOnce() -> R, R>(f: F) -> UnwrapFailure {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(_) => panic!("expected an unwrap failure"),
            Err(payload) => match payload.downcast::<UnwrapFailure>() {
                Ok(failure) => *failure,
                Err(_) => panic!("panic payload is not an UnwrapFailure"),
            },
        }
    }

    #[test]
    fn test_unwrap_success() {
        assert_eq!(Outcome::<i32, String>::success(5).unwrap(), 5);
        assert_eq!(Outcome::<i32, String>::success(5).expect("never shown"), 5);
    }

    #[test]
    fn test_unwrap_failure_carries_value() {
        let failure = unwrap_failure(|| Outcome::<i32, String>::failure("boom".to_string()).unwrap());
        assert_eq!(failure.message(), None);
        assert_eq!(failure.downcast::<String>().ok(), Some("boom".to_string()));
    }

    #[test]
    fn test_expect_failure_carries_message() {
        #[derive(Debug, PartialEq)]
        struct Missing {
            key: &'static str,
        }

        let failure = unwrap_failure(|| {
            Outcome::<i32, Missing>::failure(Missing { key: "port" }).expect("port is required")
        });
        assert_eq!(failure.message(), Some("port is required"));
        assert_eq!(failure.value_ref::<Missing>(), Some(&Missing { key: "port" }));
    }

    #[test]
    fn test_panics_at_caller_location() {
        let prev = Arc::new(panic::take_hook());
        let chained = prev.clone();
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|l| (l.file().to_string(), l.line()));
            LOCATION.with(|cell| *cell.borrow_mut() = location);
            (**chained)(info);
        }));

        let unwrap_line = line!() + 2;
        let unwrapped = catch_unwind(|| {
            Outcome::<i32, &'static str>::failure("boom").unwrap()
        });

        let unwrap_location = LOCATION.with(|cell| cell.borrow_mut().take());

        let expect_line = line!() + 2;
        let expected = catch_unwind(|| {
            Outcome::<i32, &'static str>::failure("boom").expect("port is required")
        });
        let expect_location = LOCATION.with(|cell| cell.borrow_mut().take());

        let raise_line = line!() + 2;
        let raised = catch_unwind(|| -> i32 {
            raise("boom")
        });
        let raise_location = LOCATION.with(|cell| cell.borrow_mut().take());

        let _ = panic::take_hook();
        panic::set_hook(Box::new(move |info| (**prev)(info)));

        assert!(unwrapped.is_err());
        assert!(expected.is_err());
        assert!(raised.is_err());
        assert_eq!(unwrap_location, Some((file!().to_string(), unwrap_line)));
        assert_eq!(expect_location, Some((file!().to_string(), expect_line)));
        assert_eq!(raise_location, Some((file!().to_string(), raise_line)));
    }
}
