// Copyright (c) 2024 Mike Tsao

//! System utilities.

/// Commonly used imports.
pub mod prelude {
    pub use super::settings::{FailurePolicy, FixtureSettings};
}

pub use settings::{FailurePolicy, FixtureSettings};

mod settings;
