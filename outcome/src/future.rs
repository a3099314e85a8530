use crate::catch::recover;
use crate::Outcome;
use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::{ready, TryFuture};
use futures_util::future::{CatchUnwind, FutureExt};
use pin_project::pin_project;
use std::any::Any;
use std::panic::UnwindSafe;

pub trait OutcomeFutureExt: Future + Sized {
    /// Async counterpart of [`Outcome::catching`]: a panic with an `E`
    /// payload raised while polling resolves to a failure, any other panic
    /// keeps unwinding.
    fn catch_failure<E>(self) -> CatchFuture<Self, E>
    where
        Self: UnwindSafe,
        E: Any + Send,
    {
        CatchFuture {
            inner: self.catch_unwind(),
            _e: PhantomData,
        }
    }

    fn into_outcome(self) -> IntoOutcome<Self>
    where
        Self: TryFuture,
    {
        IntoOutcome { inner: self }
    }
}

impl<F> OutcomeFutureExt for F where F: Future {}

#[allow(missing_debug_implementations)]
#[pin_project]
pub struct CatchFuture<F, E> {
    #[pin]
    inner: CatchUnwind<F>,
    _e: PhantomData<E>,
}

impl<F, E> Future for CatchFuture<F, E>
where
    F: Future + UnwindSafe,
    E: Any + Send,
{
    type Output = Outcome<F::Output, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match ready!(this.inner.poll(cx)) {
            Ok(value) => Poll::Ready(Outcome::Success(value)),
            Err(payload) => Poll::Ready(Outcome::Failure(recover(payload))),
        }
    }
}

#[allow(missing_debug_implementations)]
#[pin_project]
pub struct IntoOutcome<F> {
    #[pin]
    inner: F,
}

impl<F> Future for IntoOutcome<F>
where
    F: TryFuture,
{
    type Output = Outcome<F::Ok, F::Error>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let ret = ready!(self.project().inner.try_poll(cx));
        Poll::Ready(ret.into())
    }
}
