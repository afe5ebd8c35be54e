//! Configuration system for the emulator core.
//!
//! This module defines the configuration structures used to parameterize the
//! core. It provides:
//! 1. **Defaults:** Baseline memory layout constants.
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied as JSON (every field optional) or built with
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the core.
mod defaults {
    /// Physical address where main RAM begins.
    pub const RAM_BASE: u32 = 0x0000_0000;

    /// Size of main RAM (8 MiB, an expanded RDRAM).
    pub const RAM_SIZE: usize = 8 * 1024 * 1024;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace": true },
///     "memory": { "ram_size": 4194304, "mirror_kseg": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.memory.ram_base, 0);
/// assert_eq!(config.memory.ram_size, 4 * 1024 * 1024);
/// assert!(!config.memory.mirror_kseg);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Enable debug-level logging of table checks, breakpoints and decoded ranges
    #[serde(default)]
    pub trace: bool,
}

/// Main memory layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Physical base address of RAM
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u32,

    /// RAM size in bytes
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,

    /// Reach RAM through KSEG0/KSEG1 as well as physically
    #[serde(default = "MemoryConfig::default_mirror_kseg")]
    pub mirror_kseg: bool,
}

impl MemoryConfig {
    const fn default_ram_base() -> u32 {
        defaults::RAM_BASE
    }

    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    const fn default_mirror_kseg() -> bool {
        true
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
            mirror_kseg: true,
        }
    }
}
