//! rorca: ocean-model grid normalization onto Arakawa C-grid datasets
//!
//! A Rust library that turns output of an ocean general circulation model
//! into a standardized staggered-grid dataset with well-defined coordinate
//! axes. It operates on an in-memory labeled dataset abstraction and performs
//! one-shot, synchronous transformations; reading the model's native files is
//! left to the surrounding application.
//!
//! ## Key Features
//!
//! - **Dimension canonicalization**: heterogeneous dimension-name conventions
//!   are mapped onto canonical short names
//! - **Halo trimming**: boundary halo rows and degenerate singleton axes are
//!   removed
//! - **C-grid coordinates**: center and shifted index coordinates with the
//!   `axis`/`c_grid_axis_shift` attributes grid-aware tools recognize
//! - **Mesh-mask support**: physical depth/latitude/longitude coordinates
//!   copied from both the modern and the legacy mesh-mask variable schemas
//!
//! ## Module Organization
//!
//! - [`dataset`]: the labeled multi-dimensional dataset abstraction
//! - [`names`]: dimension synonym and mesh-mask schema tables
//! - [`preprocess`]: dimension renaming, trimming and the full pipeline
//! - [`coords`]: staggered coordinate construction and copying
//! - [`errors`]: centralized error handling
//!
//! ## Usage Example
//!
//! ```rust
//! # fn main() -> rorca::Result<()> {
//! use ndarray::{ArrayD, IxDyn};
//! use rorca::prelude::*;
//!
//! // A raw grid description with non-canonical dimension names.
//! let mut raw = Dataset::new();
//! raw.add_var(
//!     "tmask",
//!     &["time_counter", "Z", "Y", "X"],
//!     ArrayD::from_elem(IxDyn(&[1, 4, 6, 6]), f64::NAN),
//!     VarAttrs::default(),
//! )?;
//!
//! let trimmed = trim_and_squeeze(&rename_dims(&raw))?;
//! let coords = create_minimal_coords_ds(&trimmed)?;
//!
//! assert_eq!(coords.dim_len("y_c"), Some(4));
//! assert_eq!(coords.coord("z_l").unwrap().attrs.c_grid_axis_shift, Some(-0.5));
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod coords;
pub mod dataset;
pub mod errors;
pub mod names;
pub mod preprocess;

// Direct re-exports for the public API
pub use coords::*;
pub use dataset::*;
pub use errors::*;
pub use names::*;
pub use preprocess::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::coords::{copy_coords, create_minimal_coords_ds};
    pub use crate::dataset::{Dataset, GridAxis, VarAttrs, Variable};
    pub use crate::errors::{Result, RorcaError};
    pub use crate::preprocess::{preprocess_mesh_mask, rename_dims, trim_and_squeeze};
}
