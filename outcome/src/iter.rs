use crate::Outcome;
use core::iter::FusedIterator;

impl<T, E> Outcome<T, E> {
    /// Yields the success value once, or nothing on a failure.
    pub fn successes(self) -> Successes<T> {
        Successes { inner: self.ok() }
    }

    /// Yields the failure value once, or nothing on a success.
    pub fn failures(self) -> Failures<E> {
        Failures { inner: self.err() }
    }

    pub fn iter(&self) -> Successes<&T> {
        self.as_ref().successes()
    }
}

macro_rules! once_iter {
    ($name: ident) => {
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            inner: Option<T>,
        }

        impl<T> Iterator for $name<T> {
            type Item = T;

            #[inline]
            fn next(&mut self) -> Option<T> {
                self.inner.take()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = usize::from(self.inner.is_some());
                (n, Some(n))
            }
        }

        impl<T> DoubleEndedIterator for $name<T> {
            #[inline]
            fn next_back(&mut self) -> Option<T> {
                self.inner.take()
            }
        }

        impl<T> ExactSizeIterator for $name<T> {}

        impl<T> FusedIterator for $name<T> {}
    };
}

once_iter!(Successes);
once_iter!(Failures);

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = Successes<T>;

    #[inline]
    fn into_iter(self) -> Successes<T> {
        self.successes()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Successes<&'a T>;

    #[inline]
    fn into_iter(self) -> Successes<&'a T> {
        self.iter()
    }
}
