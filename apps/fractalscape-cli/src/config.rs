use std::path::Path;

use anyhow::Context;
use fractalscape_scene::DemoParams;
use serde::Deserialize;

/// Demo configuration, loaded from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Longest frame the world is ever stepped by, in seconds.
    pub max_frame_dt: f32,
    pub koch_cube_depth: u32,
    pub koch_tetra_depth: u32,
    pub sierpinski_depth: u32,
    pub cluster_cubes: usize,
    pub cluster_edge: u32,
    pub cluster_seed: u64,
    pub lattice_edge: u32,
    pub slowmo_rate: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let params = DemoParams::default();
        Self {
            max_frame_dt: 1.0 / 30.0,
            koch_cube_depth: params.koch_cube_depth,
            koch_tetra_depth: params.koch_tetra_depth,
            sierpinski_depth: params.sierpinski_depth,
            cluster_cubes: params.cluster_cubes,
            cluster_edge: params.cluster_edge,
            cluster_seed: params.cluster_seed,
            lattice_edge: params.lattice_edge,
            slowmo_rate: params.slowmo_rate,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if !(config.max_frame_dt.is_finite() && config.max_frame_dt > 0.0) {
            anyhow::bail!("max_frame_dt must be positive, got {}", config.max_frame_dt);
        }
        Ok(config)
    }

    pub fn params(&self) -> DemoParams {
        DemoParams {
            koch_cube_depth: self.koch_cube_depth,
            koch_tetra_depth: self.koch_tetra_depth,
            sierpinski_depth: self.sierpinski_depth,
            cluster_cubes: self.cluster_cubes,
            cluster_edge: self.cluster_edge,
            cluster_seed: self.cluster_seed,
            lattice_edge: self.lattice_edge,
            slowmo_rate: self.slowmo_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config(r#"{ "koch_cube_depth": 2, "cluster_seed": 9 }"#);
        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.koch_cube_depth, 2);
        assert_eq!(config.cluster_seed, 9);
        assert_eq!(config.max_frame_dt, 1.0 / 30.0);
        assert_eq!(config.params().koch_tetra_depth, DemoParams::default().koch_tetra_depth);
    }

    #[test]
    fn negative_depth_is_rejected() {
        let file = write_config(r#"{ "sierpinski_depth": -1 }"#);
        assert!(DemoConfig::load(file.path()).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config(r#"{ "depth": 3 }"#);
        assert!(DemoConfig::load(file.path()).is_err());
    }

    #[test]
    fn non_positive_frame_cap_is_rejected() {
        let file = write_config(r#"{ "max_frame_dt": 0.0 }"#);
        assert!(DemoConfig::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DemoConfig::load("/nonexistent/fractalscape.json").unwrap_err();
        assert!(format!("{err:#}").contains("fractalscape.json"));
    }
}
