#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::all)]
#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod catch;
#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod future;
mod iter;
mod outcome;
#[cfg(feature = "std")]
mod unwrap;

pub use self::{iter::*, outcome::*};

#[cfg(feature = "std")]
pub use self::{catch::raise, error::*, future::*};
