//! In-memory labeled dataset abstraction
//!
//! This module provides a minimal labeled multi-dimensional dataset: named
//! dimensions with extents, plus coordinate and data variables that each carry
//! an ordered dimension list, an `f64` array and a fixed attribute record.
//! It covers exactly the bookkeeping the grid-normalization pipeline needs:
//! extent validation on insert, dimension renaming, slicing along a named
//! dimension and dropping of singleton dimensions.
//!
//! Missing values are plain `f64::NAN`; no mask arrays are carried.

use crate::errors::{Result, RorcaError};
use ndarray::{ArrayD, Axis, Slice};
use std::collections::BTreeMap;

/// Physical axis label recognized by C-grid aware analysis tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Vertical (depth) axis
    Z,
    /// Meridional axis
    Y,
    /// Zonal axis
    X,
}

impl GridAxis {
    /// Get the conventional single-letter label of the axis
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Z => "Z",
            Self::Y => "Y",
            Self::X => "X",
        }
    }
}

/// Attribute record attached to a coordinate or variable
///
/// `axis` marks which physical axis a coordinate indexes and
/// `c_grid_axis_shift` marks staggered coordinates as offset by half a grid
/// cell; both are `None` for plain data variables.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VarAttrs {
    pub axis: Option<GridAxis>,
    pub c_grid_axis_shift: Option<f64>,
}

impl VarAttrs {
    /// Attributes for an unshifted (cell-center) coordinate axis
    #[must_use]
    pub const fn axis(axis: GridAxis) -> Self {
        Self {
            axis: Some(axis),
            c_grid_axis_shift: None,
        }
    }

    /// Attributes for a staggered coordinate axis offset by `shift` cells
    #[must_use]
    pub const fn shifted(axis: GridAxis, shift: f64) -> Self {
        Self {
            axis: Some(axis),
            c_grid_axis_shift: Some(shift),
        }
    }
}

/// A named array together with its ordered dimension list and attributes
#[derive(Debug, Clone)]
pub struct Variable {
    pub dims: Vec<String>,
    pub data: ArrayD<f64>,
    pub attrs: VarAttrs,
}

/// Labeled dataset: dimension extents plus coordinate and data variables
///
/// Invariant: every variable's rank equals the length of its dimension list,
/// and all variables referencing a dimension agree on its extent. Both are
/// enforced when variables are inserted; the first variable to reference a
/// dimension registers its extent.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    dims: BTreeMap<String, usize>,
    coords: BTreeMap<String, Variable>,
    data_vars: BTreeMap<String, Variable>,
}

impl Dataset {
    /// Create an empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All dimensions and their extents
    #[must_use]
    pub fn dims(&self) -> &BTreeMap<String, usize> {
        &self.dims
    }

    /// Extent of a dimension, if present
    #[must_use]
    pub fn dim_len(&self, dim: &str) -> Option<usize> {
        self.dims.get(dim).copied()
    }

    /// Whether a dimension is present
    #[must_use]
    pub fn has_dim(&self, dim: &str) -> bool {
        self.dims.contains_key(dim)
    }

    /// All coordinate variables
    #[must_use]
    pub fn coords(&self) -> &BTreeMap<String, Variable> {
        &self.coords
    }

    /// All data variables
    #[must_use]
    pub fn data_vars(&self) -> &BTreeMap<String, Variable> {
        &self.data_vars
    }

    /// Look up a coordinate by name
    #[must_use]
    pub fn coord(&self, name: &str) -> Option<&Variable> {
        self.coords.get(name)
    }

    /// Look up a variable by name, checking data variables first, then coordinates
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.data_vars.get(name).or_else(|| self.coords.get(name))
    }

    /// Add a coordinate variable, validating rank and extents
    pub fn add_coord(
        &mut self,
        name: &str,
        dims: &[&str],
        data: ArrayD<f64>,
        attrs: VarAttrs,
    ) -> Result<()> {
        let var = self.validated(name, dims, data, attrs)?;
        self.coords.insert(name.to_string(), var);
        Ok(())
    }

    /// Add a data variable, validating rank and extents
    pub fn add_var(
        &mut self,
        name: &str,
        dims: &[&str],
        data: ArrayD<f64>,
        attrs: VarAttrs,
    ) -> Result<()> {
        let var = self.validated(name, dims, data, attrs)?;
        self.data_vars.insert(name.to_string(), var);
        Ok(())
    }

    /// Check a candidate variable against the registered extents, registering
    /// dimensions on first use
    fn validated(
        &mut self,
        name: &str,
        dims: &[&str],
        data: ArrayD<f64>,
        attrs: VarAttrs,
    ) -> Result<Variable> {
        if dims.len() != data.ndim() {
            return Err(RorcaError::RankMismatch {
                var: name.to_string(),
                listed: dims.len(),
                actual: data.ndim(),
            });
        }
        for (dim, &extent) in dims.iter().zip(data.shape()) {
            match self.dims.get(*dim) {
                Some(&registered) if registered != extent => {
                    return Err(RorcaError::ExtentMismatch {
                        var: name.to_string(),
                        dim: (*dim).to_string(),
                        expected: registered,
                        actual: extent,
                    });
                }
                Some(_) => {}
                None => {
                    self.dims.insert((*dim).to_string(), extent);
                }
            }
        }
        Ok(Variable {
            dims: dims.iter().map(|d| (*d).to_string()).collect(),
            data,
            attrs,
        })
    }

    /// Return a copy with the dimension `from` renamed to `to`
    ///
    /// The rename is applied to the dimension registry, to every variable's
    /// dimension list and to a coordinate of the same name, if one exists.
    /// A dataset without `from` is returned unchanged.
    #[must_use]
    pub fn rename_dim(&self, from: &str, to: &str) -> Self {
        let mut out = self.clone();
        let Some(extent) = out.dims.remove(from) else {
            return out;
        };
        debug_assert!(
            !out.dims.contains_key(to),
            "rename target '{}' already present",
            to
        );
        out.dims.insert(to.to_string(), extent);
        for var in out.coords.values_mut().chain(out.data_vars.values_mut()) {
            for dim in &mut var.dims {
                if dim == from {
                    *dim = to.to_string();
                }
            }
        }
        if let Some(coord) = out.coords.remove(from) {
            out.coords.insert(to.to_string(), coord);
        }
        out
    }

    /// Return a copy restricted to `start..stop` along the named dimension
    ///
    /// Every variable carrying the dimension is sliced; variables without it
    /// are copied unchanged.
    pub fn isel_range(&self, dim: &str, start: usize, stop: usize) -> Result<Self> {
        let extent = self
            .dim_len(dim)
            .ok_or_else(|| RorcaError::MissingDimension {
                dim: dim.to_string(),
            })?;
        if start > stop || stop > extent {
            return Err(RorcaError::Generic(format!(
                "Range {}..{} is out of bounds for dimension '{}' of extent {}",
                start, stop, dim, extent
            )));
        }

        let mut out = Self::new();
        out.dims = self.dims.clone();
        out.dims.insert(dim.to_string(), stop - start);

        let slice_var = |var: &Variable| -> Variable {
            match var.dims.iter().position(|d| d == dim) {
                Some(axis) => Variable {
                    dims: var.dims.clone(),
                    data: var
                        .data
                        .slice_axis(Axis(axis), Slice::from(start..stop))
                        .to_owned(),
                    attrs: var.attrs,
                },
                None => var.clone(),
            }
        };

        out.coords = self
            .coords
            .iter()
            .map(|(k, v)| (k.clone(), slice_var(v)))
            .collect();
        out.data_vars = self
            .data_vars
            .iter()
            .map(|(k, v)| (k.clone(), slice_var(v)))
            .collect();
        Ok(out)
    }

    /// Return a copy with every dimension of extent 1 removed
    ///
    /// Variables lose the corresponding axes. A coordinate left with rank 0
    /// is dropped along with its dimension; data variables are kept as
    /// zero-rank arrays.
    #[must_use]
    pub fn squeeze(&self) -> Self {
        let singleton: Vec<&String> = self
            .dims
            .iter()
            .filter(|(_, &len)| len == 1)
            .map(|(name, _)| name)
            .collect();
        if singleton.is_empty() {
            return self.clone();
        }

        let squeeze_var = |var: &Variable| -> Variable {
            let mut dims = var.dims.clone();
            let mut data = var.data.clone();
            // walk axes back to front so positions stay valid while removing
            for axis in (0..dims.len()).rev() {
                if singleton.iter().any(|s| **s == dims[axis]) {
                    data = data.index_axis(Axis(axis), 0).to_owned();
                    dims.remove(axis);
                }
            }
            Variable {
                dims,
                data,
                attrs: var.attrs,
            }
        };

        let mut out = Self::new();
        out.dims = self
            .dims
            .iter()
            .filter(|(_, &len)| len != 1)
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        out.coords = self
            .coords
            .iter()
            .map(|(k, v)| (k.clone(), squeeze_var(v)))
            .filter(|(_, v)| !v.dims.is_empty())
            .collect();
        out.data_vars = self
            .data_vars
            .iter()
            .map(|(k, v)| (k.clone(), squeeze_var(v)))
            .collect();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn range_array(n: usize) -> ArrayD<f64> {
        Array1::from_iter((0..n).map(|i| i as f64)).into_dyn()
    }

    #[test]
    fn registers_dims_on_first_use() {
        let mut ds = Dataset::new();
        ds.add_coord("y", &["y"], range_array(4), VarAttrs::default())
            .unwrap();
        assert_eq!(ds.dim_len("y"), Some(4));
    }

    #[test]
    fn rejects_extent_mismatch() {
        let mut ds = Dataset::new();
        ds.add_coord("y", &["y"], range_array(4), VarAttrs::default())
            .unwrap();
        let err = ds
            .add_var("v", &["y"], range_array(5), VarAttrs::default())
            .unwrap_err();
        match err {
            RorcaError::ExtentMismatch {
                var,
                dim,
                expected,
                actual,
            } => {
                assert_eq!(var, "v");
                assert_eq!(dim, "y");
                assert_eq!(expected, 4);
                assert_eq!(actual, 5);
            }
            other => panic!("Expected ExtentMismatch, got {:?}", other),
        }
    }

    #[test]
    fn rejects_rank_mismatch() {
        let mut ds = Dataset::new();
        let err = ds
            .add_var("v", &["y", "x"], range_array(4), VarAttrs::default())
            .unwrap_err();
        assert!(matches!(err, RorcaError::RankMismatch { .. }));
    }

    #[test]
    fn rename_dim_renames_registry_variables_and_coord() {
        let mut ds = Dataset::new();
        ds.add_coord("Y", &["Y"], range_array(3), VarAttrs::default())
            .unwrap();
        ds.add_var("v", &["Y"], range_array(3), VarAttrs::default())
            .unwrap();

        let renamed = ds.rename_dim("Y", "y");
        assert!(!renamed.has_dim("Y"));
        assert_eq!(renamed.dim_len("y"), Some(3));
        assert_eq!(renamed.variable("v").unwrap().dims, vec!["y"]);
        assert!(renamed.coord("y").is_some());
        assert!(renamed.coord("Y").is_none());
        // input untouched
        assert!(ds.has_dim("Y"));
    }

    #[test]
    fn isel_range_slices_only_matching_variables() {
        let mut ds = Dataset::new();
        ds.add_coord("x", &["x"], range_array(5), VarAttrs::default())
            .unwrap();
        ds.add_coord("y", &["y"], range_array(3), VarAttrs::default())
            .unwrap();

        let sliced = ds.isel_range("x", 1, 4).unwrap();
        assert_eq!(sliced.dim_len("x"), Some(3));
        assert_eq!(sliced.dim_len("y"), Some(3));
        let x = sliced.coord("x").unwrap();
        assert_eq!(x.data.as_slice().unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn isel_range_out_of_bounds_is_an_error() {
        let mut ds = Dataset::new();
        ds.add_coord("x", &["x"], range_array(2), VarAttrs::default())
            .unwrap();
        assert!(ds.isel_range("x", 1, 3).is_err());
        assert!(ds.isel_range("missing", 0, 1).is_err());
    }

    #[test]
    fn squeeze_drops_singleton_dims_and_scalar_coords() {
        let mut ds = Dataset::new();
        ds.add_coord("degen", &["degen"], range_array(1), VarAttrs::default())
            .unwrap();
        ds.add_coord("y", &["y"], range_array(3), VarAttrs::default())
            .unwrap();
        ds.add_var(
            "v",
            &["degen", "y"],
            ArrayD::zeros(ndarray::IxDyn(&[1, 3])),
            VarAttrs::default(),
        )
        .unwrap();

        let squeezed = ds.squeeze();
        assert!(!squeezed.has_dim("degen"));
        assert!(squeezed.coord("degen").is_none());
        assert_eq!(squeezed.dim_len("y"), Some(3));
        let v = squeezed.variable("v").unwrap();
        assert_eq!(v.dims, vec!["y"]);
        assert_eq!(v.data.shape(), &[3]);
    }
}
