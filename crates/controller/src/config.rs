//! Configuration system for the controller simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline timing constants and the auto-run cadence.
//! 2. **Structures:** Hierarchical config for phase timing and simulation pacing.
//! 3. **Loading:** JSON deserialization via serde, or `Config::default()` for the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline timing when not explicitly overridden in
/// a JSON configuration file.
mod defaults {
    /// Row-activate latency in cycles (tRCD): ACTIVATE to READ/WRITE.
    pub const T_RCD: u64 = 5;

    /// Read latency in cycles (tCL): READ command to data on the bus.
    pub const T_CL: u64 = 5;

    /// Write-recovery latency in cycles (tWR): WRITE command to data committed.
    pub const T_WR: u64 = 6;

    /// Precharge latency in cycles (tRP): PRECHARGE to bank idle.
    pub const T_RP: u64 = 5;

    /// Auto-run pacing interval in milliseconds.
    pub const AUTO_STEP_INTERVAL_MS: u64 = 500;
}

/// Root configuration structure containing all simulator settings.
///
/// Configuration is supplied as JSON or via `Config::default()`.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use ddr5_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.timing.t_rcd, 5);
/// assert_eq!(config.timing.t_wr, 6);
/// assert_eq!(config.sim.auto_step_interval_ms, 500);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use ddr5_core::config::Config;
///
/// let json = r#"{
///     "timing": { "t_rcd": 3, "t_cl": 4 },
///     "sim": { "auto_step_interval_ms": 100 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.timing.t_rcd, 3);
/// assert_eq!(config.timing.t_cl, 4);
/// assert_eq!(config.timing.t_wr, 6);
/// assert_eq!(config.sim.auto_step_interval_ms, 100);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Per-phase cycle thresholds.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Simulation pacing settings.
    #[serde(default)]
    pub sim: SimConfig,
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `text` - The JSON document.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or the underlying serde error.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Fixed per-phase cycle thresholds.
///
/// Each value is the number of `step` calls that must elapse in the
/// corresponding state before its transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Row-activate latency in cycles (ACTIVATE phase).
    #[serde(default = "TimingConfig::default_t_rcd")]
    pub t_rcd: u64,

    /// Read latency in cycles (READ phase).
    #[serde(default = "TimingConfig::default_t_cl")]
    pub t_cl: u64,

    /// Write-recovery latency in cycles (WRITE phase).
    #[serde(default = "TimingConfig::default_t_wr")]
    pub t_wr: u64,

    /// Precharge latency in cycles (PRECHARGE phase).
    #[serde(default = "TimingConfig::default_t_rp")]
    pub t_rp: u64,
}

impl TimingConfig {
    /// Returns the default row-activate latency.
    fn default_t_rcd() -> u64 {
        defaults::T_RCD
    }

    /// Returns the default read latency.
    fn default_t_cl() -> u64 {
        defaults::T_CL
    }

    /// Returns the default write-recovery latency.
    fn default_t_wr() -> u64 {
        defaults::T_WR
    }

    /// Returns the default precharge latency.
    fn default_t_rp() -> u64 {
        defaults::T_RP
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            t_rcd: defaults::T_RCD,
            t_cl: defaults::T_CL,
            t_wr: defaults::T_WR,
            t_rp: defaults::T_RP,
        }
    }
}

/// Simulation pacing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Fixed cadence of the auto-run pacer in milliseconds.
    #[serde(default = "SimConfig::default_auto_step_interval_ms")]
    pub auto_step_interval_ms: u64,
}

impl SimConfig {
    /// Returns the default auto-run pacing interval.
    fn default_auto_step_interval_ms() -> u64 {
        defaults::AUTO_STEP_INTERVAL_MS
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            auto_step_interval_ms: defaults::AUTO_STEP_INTERVAL_MS,
        }
    }
}
