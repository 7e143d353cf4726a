//! Core library for the order-splitter command line application.
//!
//! The library exposes the transformation pipeline that powers the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: IO adapters
//! live under [`io`], row representations inside [`model`], the grouping and
//! naming logic in [`orders`], and the pipeline orchestration under
//! [`split`].

pub mod error;
pub mod io;
pub mod model;
pub mod orders;
pub mod split;

pub use error::{Result, SplitError};
