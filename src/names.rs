//! Naming conventions for model dimensions and mesh-mask variables
//!
//! Model output mixes two dimension-name conventions per axis, and mesh-mask
//! files come in two naming schemas for the depth and scale-factor variables.
//! Both lookups live here as plain `const` tables so that schema handling is
//! a matter of table data, not scattered string literals.

/// Dimension synonym pairs, canonical name first
///
/// Axes may be absent from a dataset entirely; the name sets are disjoint so
/// the order of the pairs does not matter.
pub const DIM_SYNONYMS: [(&str, &str); 4] = [
    ("t", "time_counter"),
    ("z", "Z"),
    ("y", "Y"),
    ("x", "X"),
];

/// One known mesh-mask naming schema
///
/// The latitude and longitude sources are listed in T, U, V, F point order,
/// matching the (center, center), (center, right), (right, center),
/// (right, right) staggering pairs.
#[derive(Debug, Clone, Copy)]
pub struct MeshMaskSchema {
    /// Identifier used in error messages
    pub id: &'static str,
    /// Variable whose presence selects this schema
    pub probe: &'static str,
    /// 1-D depth at cell centers
    pub depth_c: &'static str,
    /// 1-D depth at upper cell faces
    pub depth_l: &'static str,
    /// Latitude sources at the T, U, V, F points
    pub lat: [&'static str; 4],
    /// Longitude sources at the T, U, V, F points
    pub lon: [&'static str; 4],
}

/// Known mesh-mask schema variants, probed in order
///
/// The modern schema must be probed first: modern masks also carry a
/// variable named `gdept_0`, but as a full 4-D field rather than the legacy
/// 1-D depth axis, so probing for the legacy name first would misclassify
/// them.
pub const MESH_MASK_SCHEMAS: [MeshMaskSchema; 2] = [
    MeshMaskSchema {
        id: "modern",
        probe: "gdept_1d",
        depth_c: "gdept_1d",
        depth_l: "gdepw_1d",
        lat: ["gphit", "gphiu", "gphiv", "gphif"],
        lon: ["glamt", "glamu", "glamv", "glamf"],
    },
    MeshMaskSchema {
        id: "legacy",
        probe: "gdept_0",
        depth_c: "gdept_0",
        depth_l: "gdepw_0",
        lat: ["gphit", "gphiu", "gphiv", "gphif"],
        lon: ["glamt", "glamu", "glamv", "glamf"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_names_are_disjoint() {
        let mut seen = std::collections::BTreeSet::new();
        for (canonical, alias) in DIM_SYNONYMS {
            assert!(seen.insert(canonical));
            assert!(seen.insert(alias));
        }
    }

    #[test]
    fn modern_schema_is_probed_before_legacy() {
        assert_eq!(MESH_MASK_SCHEMAS[0].id, "modern");
        assert_eq!(MESH_MASK_SCHEMAS[1].id, "legacy");
    }
}
