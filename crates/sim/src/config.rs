//! Simulation configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use zombie::Point;

/// Configuration for one headless run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub frames: u64,
    pub frame_time: f32,
    pub zombies: usize,
    pub seed: u64,
    pub preset: String,
    pub tree_file: Option<PathBuf>,
    pub boy: BoyConfig,
    pub log_every: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_time: 1.0 / 60.0,
            zombies: 3,
            seed: 0,
            preset: "zombie".to_string(),
            tree_file: None,
            boy: BoyConfig::default(),
            log_every: 60,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_FRAMES` - Number of frames to run (default: 600)
    /// - `SIM_FRAME_TIME` - Seconds per frame (default: 1/60)
    /// - `SIM_ZOMBIES` - Number of zombies (default: 3)
    /// - `SIM_SEED` - Base RNG seed; zombie `i` uses `seed + i` (default: 0)
    /// - `SIM_PRESET` - Built-in tree: zombie, chaser or patroller (default: zombie)
    /// - `SIM_TREE_FILE` - RON tree definition, overrides `SIM_PRESET`
    /// - `SIM_BOY_X` / `SIM_BOY_Y` - Center of the boy's walk (default: 640 / 400)
    /// - `SIM_BOY_BALLS` - Balls the boy carries (default: 0)
    /// - `SIM_LOG_EVERY` - Frames between progress reports (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key);
        let mut config = Self::default();

        if let Some(frames) = parse::<u64>("SIM_FRAMES", read("SIM_FRAMES")) {
            config.frames = frames;
        }

        if let Some(dt) = parse::<f32>("SIM_FRAME_TIME", read("SIM_FRAME_TIME")) {
            if dt.is_finite() && dt > 0.0 {
                config.frame_time = dt;
            } else {
                tracing::warn!(dt, "SIM_FRAME_TIME must be positive, using default");
            }
        }

        if let Some(count) = parse::<usize>("SIM_ZOMBIES", read("SIM_ZOMBIES")) {
            config.zombies = count.max(1);
        }

        if let Some(seed) = parse::<u64>("SIM_SEED", read("SIM_SEED")) {
            config.seed = seed;
        }

        if let Some(preset) = read("SIM_PRESET").filter(|p| !p.is_empty()) {
            config.preset = preset;
        }

        config.tree_file = read("SIM_TREE_FILE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if let Some(x) = parse::<f32>("SIM_BOY_X", read("SIM_BOY_X")) {
            config.boy.center.x = x;
        }
        if let Some(y) = parse::<f32>("SIM_BOY_Y", read("SIM_BOY_Y")) {
            config.boy.center.y = y;
        }
        if let Some(balls) = parse::<u32>("SIM_BOY_BALLS", read("SIM_BOY_BALLS")) {
            config.boy.balls = balls;
        }

        if let Some(every) = parse::<u64>("SIM_LOG_EVERY", read("SIM_LOG_EVERY")) {
            config.log_every = every.max(1);
        }

        config
    }
}

/// Where the boy walks and how strong he is.
#[derive(Clone, Debug)]
pub struct BoyConfig {
    pub center: Point,
    /// Radius of the boy's circular walk, in pixels.
    pub orbit: f32,
    /// Seconds per lap.
    pub lap_time: f32,
    pub balls: u32,
}

impl Default for BoyConfig {
    fn default() -> Self {
        Self {
            center: Point::new(640.0, 400.0),
            orbit: 150.0,
            lap_time: 20.0,
            balls: 0,
        }
    }
}

/// Parses a variable, warning when it is set but malformed.
fn parse<T>(key: &str, value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = value?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = %value, "ignoring invalid environment variable");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> SimConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SimConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config(&[]);
        assert_eq!(config.frames, 600);
        assert_eq!(config.zombies, 3);
        assert_eq!(config.preset, "zombie");
        assert!(config.tree_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("SIM_FRAMES", "10"),
            ("SIM_FRAME_TIME", "0.1"),
            ("SIM_SEED", "42"),
            ("SIM_PRESET", "patroller"),
            ("SIM_TREE_FILE", "trees/custom.ron"),
            ("SIM_BOY_X", "12.5"),
            ("SIM_BOY_BALLS", " 4 "),
        ]);
        assert_eq!(config.frames, 10);
        assert_eq!(config.frame_time, 0.1);
        assert_eq!(config.seed, 42);
        assert_eq!(config.preset, "patroller");
        assert_eq!(config.tree_file, Some(PathBuf::from("trees/custom.ron")));
        assert_eq!(config.boy.center.x, 12.5);
        assert_eq!(config.boy.balls, 4);
    }

    #[test]
    fn invalid_values_fall_back_or_clamp() {
        let config = config(&[
            ("SIM_FRAMES", "lots"),
            ("SIM_FRAME_TIME", "-1"),
            ("SIM_ZOMBIES", "0"),
            ("SIM_LOG_EVERY", "0"),
        ]);
        assert_eq!(config.frames, 600);
        assert_eq!(config.frame_time, 1.0 / 60.0);
        assert_eq!(config.zombies, 1);
        assert_eq!(config.log_every, 1);
    }
}
