//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SproutError, SproutResult};

use super::types::{clone_timeout_in_range, Config, CLONE_TIMEOUT_RANGE};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "SPROUT_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    InvalidEnv {
        var: String,
        value: String,
        expected: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "Unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "Ignoring {}='{}': expected {}", var, value, expected),
        }
    }
}

/// Configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub file: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SproutResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| SproutError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SproutError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config
        .template
        .validate()
        .map_err(|message| SproutError::Config {
            file: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration from file and environment.
///
/// `explicit` (from `--config`) wins over `SPROUT_CONFIG`; an explicitly
/// named file must exist. The default location is optional.
pub fn load(explicit: Option<&Path>) -> SproutResult<LoadedConfig> {
    load_from(explicit, |key| std::env::var(key).ok(), default_config_path())
}

pub(crate) fn load_from(
    explicit: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    default_path: Option<PathBuf>,
) -> SproutResult<LoadedConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| get_env(CONFIG_PATH_VAR).map(PathBuf::from));

    let file = match named {
        Some(path) => Some(path),
        None => default_path.filter(|p| p.is_file()),
    };

    let (config, mut warnings) = match &file {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    let (config, env_warnings) = apply_env_overrides(config, get_env);
    warnings.extend(env_warnings);

    Ok(LoadedConfig {
        config,
        file,
        warnings,
    })
}

/// `~/.config/sprout/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sprout").join("config.toml"))
}

/// Apply environment variable overrides (SPROUT_* prefix)
pub fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    let non_empty = |var: &str| get_env(var).filter(|v| !v.trim().is_empty());

    if let Some(repo) = non_empty("SPROUT_TEMPLATE_REPO") {
        config.template.repository = repo;
    }
    if let Some(dir) = non_empty("SPROUT_TEMPLATE_DIR") {
        config.template.subdirectory = dir;
    }
    if let Some(node) = non_empty("SPROUT_NODE") {
        config.tools.node = node;
    }
    if let Some(git) = non_empty("SPROUT_GIT") {
        config.tools.git = git;
    }
    if let Some(pm) = non_empty("SPROUT_PACKAGE_MANAGER") {
        config.tools.package_manager = pm;
    }

    if let Some(raw) = non_empty("SPROUT_CLONE_TIMEOUT_SECS") {
        match raw.trim().parse::<u64>() {
            Ok(secs) if clone_timeout_in_range(secs) => config.template.clone_timeout_secs = secs,
            _ => warnings.push(ConfigWarning::InvalidEnv {
                var: "SPROUT_CLONE_TIMEOUT_SECS".to_string(),
                value: raw,
                expected: CLONE_TIMEOUT_RANGE.to_string(),
            }),
        }
    }

    if let Some(raw) = non_empty("SPROUT_MIN_NODE_MAJOR") {
        match raw.trim().parse() {
            Ok(major) => config.tools.min_node_major = major,
            Err(_) => warnings.push(ConfigWarning::InvalidEnv {
                var: "SPROUT_MIN_NODE_MAJOR".to_string(),
                value: raw,
                expected: "a whole number".to_string(),
            }),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "template",
        "repository",
        "subdirectory",
        "clone_timeout_secs",
        "tools",
        "node",
        "git",
        "package_manager",
        "min_node_major",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
