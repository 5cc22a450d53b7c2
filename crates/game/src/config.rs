//! Simulation tunables. Loaded from `stardash.ron` at startup; defaults
//! are the shipped tuning.

use serde::{Deserialize, Serialize};
use starfield::SweepParams;
use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a tunables file failed to load.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Every knob the simulation reads. Missing fields in the file take their
/// default, so a tunables file only needs the values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Stars in the field; slots are reused for the whole session.
    pub star_count: usize,
    /// Field sphere radius; doubles as the respawn shell radius.
    pub field_radius: f32,
    /// Seed for the deterministic star layout.
    pub field_seed: u64,
    /// Top flight speed, units/s.
    pub max_speed: f32,
    /// Per-frame multiplicative throttle factor.
    pub acceleration: f32,
    /// Fuel drained per unit of speed/dt while moving.
    pub fuel_depletion: f32,
    /// Fuel granted per red dwarf collected.
    pub fuel_gain: f32,
    /// Fuel capacity; sessions start full.
    pub max_fuel: f32,
    /// Roll speed cap, rad/s.
    pub max_roll_velocity: f32,
    /// Roll speed seeded by a fresh roll key press, rad/s.
    pub initial_roll_speed: f32,
    /// Yaw impulse per pointer count, radians.
    pub yaw_speed: f32,
    /// Pitch impulse per pointer count, radians.
    pub pitch_speed: f32,
    /// Per-frame decay factor for the yaw/pitch velocity filters.
    pub control_damping: f32,
    /// Camera-to-star distance that triggers collection.
    pub collection_radius: f32,
    /// Star color fade-in rate, per second.
    pub fade_rate: f32,
    /// Star sprite base size.
    pub base_star_size: f32,
    /// Display-size multiplier on the collection burst.
    pub burst_scale: f32,
    /// Burst decay back toward base size, per second.
    pub burst_shrink_speed: f32,
    /// Score multiplier for fuel-star chains.
    pub chain_score_scale: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            star_count: 4000,
            field_radius: 2000.0,
            field_seed: 1337,
            max_speed: 2000.0,
            acceleration: 1.02,
            fuel_depletion: 0.000_000_3,
            fuel_gain: 10.0,
            max_fuel: 101.0,
            max_roll_velocity: PI,
            initial_roll_speed: PI * 0.05,
            yaw_speed: PI * 0.005,
            pitch_speed: PI * 0.005,
            control_damping: 0.8,
            collection_radius: 5.0,
            fade_rate: 2.0,
            base_star_size: 6.0,
            burst_scale: 2.5,
            burst_shrink_speed: 5.0,
            chain_score_scale: 10.0,
        }
    }
}

impl Tuning {
    /// Collected stars get pushed this far out of render range.
    pub fn push_distance(&self) -> f32 {
        self.field_radius * 2.0
    }

    /// The subset the collection sweep reads each frame.
    pub fn sweep_params(&self) -> SweepParams {
        SweepParams {
            collection_radius: self.collection_radius,
            field_radius: self.field_radius,
            push_distance: self.push_distance(),
            fade_rate: self.fade_rate,
            chain_score_scale: self.chain_score_scale,
        }
    }

    /// Load tunables from `path`, failing loudly.
    pub fn load_from(path: &Path) -> Result<Self, TuningError> {
        let data = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| TuningError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `stardash.ron` from the working directory. Missing files are
    /// normal; invalid ones warn and fall back to defaults.
    pub fn load_or_default() -> Self {
        let path = tuning_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}; using default tunables");
                Self::default()
            }
        }
    }
}

fn tuning_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("stardash.ron")
}
