use crate::core::utils::geometry::{DihedralMode, TriangleMode};
use serde::Deserialize;

/// Default distance cutoff for non-bonded edge candidates, in Angstrom.
pub const DEFAULT_CUTOFF: f64 = 5.0;

/// Default ceiling on the atom count (explicit hydrogens included).
pub const DEFAULT_MAX_ATOMS: usize = 700;

/// Explicit pipeline configuration, threaded through every builder.
///
/// There is no process-wide configuration state; callers construct one value
/// (or deserialize it from TOML) and pass it down.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Chemistry-oracle scheme key for element descriptors.
    pub atom_scheme: String,
    /// Triangle descriptor variant for bond-angle edges.
    pub triangle_mode: TriangleMode,
    /// Torsion descriptor variant for dihedral edges.
    pub dihedral_mode: DihedralMode,
    /// Non-bonded candidate cutoff in Angstrom.
    pub cutoff: f64,
    /// Molecules above this atom count are rejected before any embedding.
    pub max_atoms: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            atom_scheme: "basic".to_string(),
            triangle_mode: TriangleMode::Dim8,
            dihedral_mode: DihedralMode::Dim6,
            cutoff: DEFAULT_CUTOFF,
            max_atoms: DEFAULT_MAX_ATOMS,
        }
    }
}

impl GraphConfig {
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::default()
    }
}

/// Builder over [`GraphConfig`]; unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
    atom_scheme: Option<String>,
    triangle_mode: Option<TriangleMode>,
    dihedral_mode: Option<DihedralMode>,
    cutoff: Option<f64>,
    max_atoms: Option<usize>,
}

impl GraphConfigBuilder {
    pub fn atom_scheme(mut self, scheme: &str) -> Self {
        self.atom_scheme = Some(scheme.to_string());
        self
    }

    pub fn triangle_mode(mut self, mode: TriangleMode) -> Self {
        self.triangle_mode = Some(mode);
        self
    }

    pub fn dihedral_mode(mut self, mode: DihedralMode) -> Self {
        self.dihedral_mode = Some(mode);
        self
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn max_atoms(mut self, max_atoms: usize) -> Self {
        self.max_atoms = Some(max_atoms);
        self
    }

    pub fn build(self) -> GraphConfig {
        let defaults = GraphConfig::default();
        GraphConfig {
            atom_scheme: self.atom_scheme.unwrap_or(defaults.atom_scheme),
            triangle_mode: self.triangle_mode.unwrap_or(defaults.triangle_mode),
            dihedral_mode: self.dihedral_mode.unwrap_or(defaults.dihedral_mode),
            cutoff: self.cutoff.unwrap_or(defaults.cutoff),
            max_atoms: self.max_atoms.unwrap_or(defaults.max_atoms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = GraphConfig::default();
        assert_eq!(config.atom_scheme, "basic");
        assert_eq!(config.triangle_mode, TriangleMode::Dim8);
        assert_eq!(config.dihedral_mode, DihedralMode::Dim6);
        assert_eq!(config.cutoff, DEFAULT_CUTOFF);
        assert_eq!(config.max_atoms, DEFAULT_MAX_ATOMS);
    }

    #[test]
    fn builder_overrides_only_requested_fields() {
        let config = GraphConfig::builder()
            .triangle_mode(TriangleMode::Dim10)
            .cutoff(4.0)
            .build();
        assert_eq!(config.triangle_mode, TriangleMode::Dim10);
        assert_eq!(config.cutoff, 4.0);
        assert_eq!(config.atom_scheme, "basic");
        assert_eq!(config.max_atoms, DEFAULT_MAX_ATOMS);
    }

    #[test]
    fn config_deserializes_from_toml_with_defaults() {
        let config: GraphConfig = toml::from_str(
            r#"
            triangle_mode = "dim_10"
            cutoff = 4.5
            "#,
        )
        .unwrap();
        assert_eq!(config.triangle_mode, TriangleMode::Dim10);
        assert_eq!(config.cutoff, 4.5);
        assert_eq!(config.dihedral_mode, DihedralMode::Dim6);
        assert_eq!(config.atom_scheme, "basic");
    }

    #[test]
    fn config_rejects_unknown_mode_keys() {
        let result: Result<GraphConfig, _> = toml::from_str(r#"dihedral_mode = "dim_9""#);
        assert!(result.is_err());
    }
}
