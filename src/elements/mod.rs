// Copyright (c) 2024 Mike Tsao

//! Signal sources.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{QuadratureTone, QuadratureToneBuilder};
}

pub use tone::{QuadratureTone, QuadratureToneBuilder, QuadratureToneBuilderError};

mod tone;
