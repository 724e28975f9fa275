//! Raw model-output preprocessing
//!
//! Functions that take a freshly loaded model dataset and make it fit for
//! coordinate derivation: canonicalizing dimension names and removing the
//! halo rows and degenerate axes the model's grid convention introduces.

use crate::coords::{copy_coords, create_minimal_coords_ds};
use crate::dataset::Dataset;
use crate::errors::{Result, RorcaError};
use crate::names::DIM_SYNONYMS;

/// Rename all recognized dimension synonyms to their canonical names
///
/// Dimensions already using canonical names and names outside the synonym
/// table are left untouched, so the function is idempotent. The input is not
/// modified.
#[must_use]
pub fn rename_dims(ds: &Dataset) -> Dataset {
    let mut out = ds.clone();
    for (canonical, alias) in DIM_SYNONYMS {
        if out.has_dim(alias) {
            out = out.rename_dim(alias, canonical);
        }
    }
    out
}

/// Remove the 1-cell boundary halo along `y` and `x` and drop singleton dimensions
///
/// The model duplicates one boundary row on each side of the horizontal
/// dimensions; both are cut off. Any dimension of extent 1 (such as an unused
/// auxiliary axis) is removed entirely afterwards.
///
/// # Errors
///
/// Returns an error if `y` or `x` is missing or has extent smaller than 2.
pub fn trim_and_squeeze(ds: &Dataset) -> Result<Dataset> {
    let mut out = ds.clone();
    for dim in ["y", "x"] {
        let len = out.dim_len(dim).ok_or_else(|| RorcaError::MissingDimension {
            dim: dim.to_string(),
        })?;
        if len < 2 {
            return Err(RorcaError::DimensionTooShort {
                dim: dim.to_string(),
                len,
                required: 2,
            });
        }
        out = out.isel_range(dim, 1, len - 1)?;
    }
    Ok(out.squeeze())
}

/// Run the full normalization pipeline over a raw mesh-mask dataset
///
/// Composes [`rename_dims`], [`trim_and_squeeze`],
/// [`create_minimal_coords_ds`] and [`copy_coords`] into the one-shot
/// transformation from raw model grid description to a C-grid dataset with
/// index and physical coordinates.
///
/// # Errors
///
/// Propagates any failure of the individual stages: missing or too-short
/// horizontal dimensions, or a mesh mask matching no known variable schema.
pub fn preprocess_mesh_mask(mesh_mask: &Dataset) -> Result<Dataset> {
    let trimmed = trim_and_squeeze(&rename_dims(mesh_mask))?;
    let minimal = create_minimal_coords_ds(&trimmed)?;
    copy_coords(&minimal, &trimmed)
}
