use std::path::Path;

use serde::Deserialize;

use crate::solver::SolverParams;

pub const CONFIG_FILE: &str = "fluidgrid.yaml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub dimension: usize,
    pub dt: f64,
    pub diffusion: f64,
    pub viscosity: f64,
    pub iterations: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
    pub steps_per_frame: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Density added to the source at each drag sample.
    pub density_amount: f64,
    /// Velocity injected per pixel of pointer movement.
    pub velocity_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            display: DisplayConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let params = SolverParams::default();
        Self {
            dimension: 128,
            dt: params.dt,
            diffusion: params.diffusion,
            viscosity: params.viscosity,
            iterations: params.iterations,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            target_fps: 60,
            steps_per_frame: 1,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            density_amount: 100.0,
            velocity_scale: 5.0,
        }
    }
}

impl PhysicsConfig {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            dt: self.dt,
            diffusion: self.diffusion,
            viscosity: self.viscosity,
            iterations: self.iterations,
        }
    }
}

/// Load `fluidgrid.yaml` from the working directory, falling back to defaults.
pub fn load() -> Config {
    load_from(CONFIG_FILE)
}

pub fn load_from(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("{} not found; using default configuration", path.display());
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str(&contents) {
            Ok(cfg) => {
                log::info!("loaded configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("failed to parse {}: {e}; using defaults", path.display());
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("failed to read {}: {e}; using defaults", path.display());
            Config::default()
        }
    }
}
