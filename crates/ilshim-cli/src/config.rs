use crate::error::CliError;
use ilshim_bindings::{Group, HeaderOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "ilshim.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShimConfig {
    /// Header generation settings
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
    /// Include guard macro
    pub guard: String,

    /// System headers included before the declarations
    pub includes: Vec<String>,

    /// Expand bindings with a C template as macros
    pub inline: bool,

    /// Restrict the header to these groups
    pub groups: Option<Vec<String>>,

    /// Write the header here instead of stdout
    pub output: Option<PathBuf>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        let options = HeaderOptions::default();
        Self {
            guard: options.guard,
            includes: options.includes,
            inline: options.prefer_inline,
            groups: None,
            output: None,
        }
    }
}

impl HeaderConfig {
    pub fn to_options(&self) -> Result<HeaderOptions, CliError> {
        let groups = match &self.groups {
            Some(names) => Some(
                names
                    .iter()
                    .map(|name| name.parse::<Group>())
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };
        Ok(HeaderOptions {
            guard: self.guard.clone(),
            includes: self.includes.clone(),
            prefer_inline: self.inline,
            groups,
        })
    }
}

impl ShimConfig {
    /// Loads the config. An explicit path must exist; otherwise `ilshim.toml`
    /// in `dir` is used if present, and defaults if not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, CliError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if !candidate.is_file() {
                    log::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShimConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, ShimConfig::default());
        assert_eq!(config.header.to_options().unwrap(), HeaderOptions::default());
    }

    #[test]
    fn parses_partial_header_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(CONFIG_FILE)).unwrap();
        writeln!(file, "[header]\nguard = \"GEN_SHIM_H\"\ninline = false\ngroups = [\"wide\", \"Atomic\"]").unwrap();

        let config = ShimConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.header.guard, "GEN_SHIM_H");
        assert_eq!(config.header.includes, HeaderOptions::default().includes);

        let options = config.header.to_options().unwrap();
        assert!(!options.prefer_inline);
        assert_eq!(options.groups, Some(vec![Group::Wide, Group::Atomic]));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[header\nguard = 3").unwrap();
        let err = ShimConfig::load(Some(file.path()), Path::new(".")).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShimConfig::load(Some(&dir.path().join("absent.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }

    #[test]
    fn unknown_group_is_rejected() {
        let header = HeaderConfig {
            groups: Some(vec!["threads".to_string()]),
            ..HeaderConfig::default()
        };
        assert!(matches!(header.to_options(), Err(CliError::Binding(_))));
    }
}
