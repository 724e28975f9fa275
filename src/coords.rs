//! Staggered-grid coordinate construction
//!
//! Derives the Arakawa C-grid coordinate axes from a trimmed model dataset:
//! first the bare 1-based index coordinates for the center and shifted grid
//! points, then the physical depth/latitude/longitude coordinates copied out
//! of a mesh-mask dataset.
//!
//! Shift convention: the U, V and F points sit half a cell to the right of
//! the T point along their horizontal axes, the W point half a cell upward
//! (toward the origin) along the depth axis.

use crate::dataset::{Dataset, GridAxis, VarAttrs};
use crate::errors::{Result, RorcaError};
use crate::names::MESH_MASK_SCHEMAS;
use ndarray::{Array1, ArrayD, Axis};

/// Horizontal staggering pairs in T, U, V, F point order: name suffix plus
/// the (y, x) target dimensions
const HORIZONTAL_POINTS: [(&str, &str, &str); 4] = [
    ("cc", "y_c", "x_c"),
    ("cr", "y_c", "x_r"),
    ("rc", "y_r", "x_c"),
    ("rr", "y_r", "x_r"),
];

/// 1-based index coordinate of length `n`, offset by `offset` grid cells
fn index_coord(n: usize, offset: f64) -> ArrayD<f64> {
    Array1::from_iter((1..=n).map(|i| i as f64 + offset)).into_dyn()
}

/// Build the minimal C-grid coordinate dataset from trimmed dimension lengths
///
/// The result contains exactly the 1-D index coordinates `z_c`, `z_l`, `y_c`,
/// `y_r`, `x_c` and `x_r`, each carrying the `axis` attribute and, for the
/// staggered variants, the `c_grid_axis_shift` attribute downstream grid-aware
/// tools key on. Values are 1-based; `z_l` is shifted by −0.5 and `y_r`/`x_r`
/// by +0.5. No data variables are created.
///
/// The vertical axis is optional: a dataset without `z` yields only the four
/// horizontal coordinates.
///
/// # Errors
///
/// Returns [`RorcaError::MissingDimension`] if `y` or `x` is absent.
pub fn create_minimal_coords_ds(ds: &Dataset) -> Result<Dataset> {
    let ny = ds.dim_len("y").ok_or_else(|| RorcaError::MissingDimension {
        dim: "y".to_string(),
    })?;
    let nx = ds.dim_len("x").ok_or_else(|| RorcaError::MissingDimension {
        dim: "x".to_string(),
    })?;

    let mut out = Dataset::new();
    if let Some(nz) = ds.dim_len("z") {
        out.add_coord("z_c", &["z_c"], index_coord(nz, 0.0), VarAttrs::axis(GridAxis::Z))?;
        out.add_coord(
            "z_l",
            &["z_l"],
            index_coord(nz, -0.5),
            VarAttrs::shifted(GridAxis::Z, -0.5),
        )?;
    }
    out.add_coord("y_c", &["y_c"], index_coord(ny, 0.0), VarAttrs::axis(GridAxis::Y))?;
    out.add_coord(
        "y_r",
        &["y_r"],
        index_coord(ny, 0.5),
        VarAttrs::shifted(GridAxis::Y, 0.5),
    )?;
    out.add_coord("x_c", &["x_c"], index_coord(nx, 0.0), VarAttrs::axis(GridAxis::X))?;
    out.add_coord(
        "x_r",
        &["x_r"],
        index_coord(nx, 0.5),
        VarAttrs::shifted(GridAxis::X, 0.5),
    )?;
    Ok(out)
}

/// Extract a source variable onto the dimensions named in `keep`
///
/// Axes outside `keep` must be singletons (for instance a time axis of
/// extent 1 that was never squeezed) and are removed; the surviving axes must
/// appear in exactly the order of `keep`.
fn extract_onto(source: &Dataset, name: &str, keep: &[&str]) -> Result<ArrayD<f64>> {
    let var = source
        .variable(name)
        .ok_or_else(|| RorcaError::VariableNotFound {
            var: name.to_string(),
        })?;

    let mut dims = var.dims.clone();
    let mut data = var.data.clone();
    for axis in (0..dims.len()).rev() {
        if keep.contains(&dims[axis].as_str()) {
            continue;
        }
        let len = data.shape()[axis];
        if len != 1 {
            return Err(RorcaError::UnexpectedDims {
                var: name.to_string(),
                dim: dims[axis].clone(),
                len,
            });
        }
        data = data.index_axis(Axis(axis), 0).to_owned();
        dims.remove(axis);
    }

    if dims.iter().map(String::as_str).ne(keep.iter().copied()) {
        return Err(RorcaError::Generic(format!(
            "Variable '{}' has dimensions [{}] where [{}] was expected",
            name,
            dims.join(", "),
            keep.join(", ")
        )));
    }
    Ok(data)
}

/// Copy the physical coordinates from a mesh mask onto the minimal-coords dataset
///
/// Populates `depth_c`/`depth_l` from the 1-D depth variables and
/// `llat_{cc,cr,rc,rr}`/`llon_{cc,cr,rc,rr}` from the grid-geometry variables
/// of the four staggered sub-grids (T, U, V, F points), attaching each to the
/// matching staggered dimensions of `target`. The suffix letters give the
/// y- then x-staggering (`c` center, `r` shifted right).
///
/// The mesh mask is expected to be trimmed (and usually squeezed); `target`
/// is the matching output of [`create_minimal_coords_ds`]. When `target` has
/// no vertical axis the depth coordinates are skipped. Neither input is
/// modified.
///
/// # Errors
///
/// Returns [`RorcaError::UnknownMeshMaskSchema`] when the mesh mask carries
/// neither the modern nor the legacy depth-variable names, and extent or
/// dimension errors when a source variable does not fit the target grid.
pub fn copy_coords(target: &Dataset, mesh_mask: &Dataset) -> Result<Dataset> {
    let schema = MESH_MASK_SCHEMAS
        .iter()
        .find(|schema| mesh_mask.variable(schema.probe).is_some())
        .ok_or_else(|| RorcaError::UnknownMeshMaskSchema {
            probed: MESH_MASK_SCHEMAS
                .iter()
                .map(|schema| schema.probe.to_string())
                .collect(),
        })?;

    let mut out = target.clone();

    if out.has_dim("z_c") {
        let depth_c = extract_onto(mesh_mask, schema.depth_c, &["z"])?;
        out.add_coord("depth_c", &["z_c"], depth_c, VarAttrs::default())?;
        let depth_l = extract_onto(mesh_mask, schema.depth_l, &["z"])?;
        out.add_coord("depth_l", &["z_l"], depth_l, VarAttrs::default())?;
    }

    for (point, &(suffix, y_dim, x_dim)) in HORIZONTAL_POINTS.iter().enumerate() {
        let lat = extract_onto(mesh_mask, schema.lat[point], &["y", "x"])?;
        out.add_coord(
            &format!("llat_{}", suffix),
            &[y_dim, x_dim],
            lat,
            VarAttrs::default(),
        )?;
        let lon = extract_onto(mesh_mask, schema.lon[point], &["y", "x"])?;
        out.add_coord(
            &format!("llon_{}", suffix),
            &[y_dim, x_dim],
            lon,
            VarAttrs::default(),
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_coord_is_one_based() {
        let c = index_coord(3, 0.0);
        assert_eq!(c.as_slice().unwrap(), &[1.0, 2.0, 3.0]);
        let l = index_coord(3, -0.5);
        assert_eq!(l.as_slice().unwrap(), &[0.5, 1.5, 2.5]);
    }

    #[test]
    fn extract_onto_squeezes_leftover_singletons() {
        let mut mm = Dataset::new();
        mm.add_var(
            "gphit",
            &["t", "y", "x"],
            ArrayD::zeros(ndarray::IxDyn(&[1, 2, 3])),
            VarAttrs::default(),
        )
        .unwrap();

        let data = extract_onto(&mm, "gphit", &["y", "x"]).unwrap();
        assert_eq!(data.shape(), &[2, 3]);
    }

    #[test]
    fn extract_onto_rejects_non_singleton_extras() {
        let mut mm = Dataset::new();
        mm.add_var(
            "gphit",
            &["t", "y", "x"],
            ArrayD::zeros(ndarray::IxDyn(&[4, 2, 3])),
            VarAttrs::default(),
        )
        .unwrap();

        let err = extract_onto(&mm, "gphit", &["y", "x"]).unwrap_err();
        assert!(matches!(err, RorcaError::UnexpectedDims { .. }));
    }
}
