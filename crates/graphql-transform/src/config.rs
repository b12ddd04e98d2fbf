use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ConfigError>;

pub(crate) const DEFAULT_CONFIG_FILE_NAME: &str = "graphql-transform.json";

/// The contents of a `graphql-transform.json` file:
///
/// ```json
/// {
///   "targets": [
///     {
///       "schema": ["./graphql/**/*.graphql"],
///       "template": "./templates/client.hbs",
///       "output": "./src/generated/client.rs"
///     }
///   ]
/// }
/// ```
///
/// Relative paths (and relative glob patterns) are resolved against the
/// directory containing the config file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    targets: Vec<BuildTarget>,
}
impl Config {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| ConfigError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        let base_dir = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Self::parse(&content, &base_dir, &format!("{file_path:?}"))
    }

    #[cfg(test)]
    pub fn from_json_str(content: &str, base_dir: &Path) -> Result<Self> {
        Self::parse(content, base_dir, "<string>")
    }

    fn parse(content: &str, base_dir: &Path, source_name: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|err| ConfigError::JsonError {
                source_name: source_name.to_string(),
                err,
            })?;

        if config.targets.is_empty() {
            return Err(ConfigError::NoTargets {
                source_name: source_name.to_string(),
            });
        }

        Ok(Self {
            targets: config.targets
                .into_iter()
                .map(|target| target.resolve_against(base_dir))
                .collect(),
        })
    }

    pub fn targets(&self) -> &[BuildTarget] {
        self.targets.as_slice()
    }
}

/// One output file rendered from one template over the GraphQL documents
/// matched by a set of glob patterns.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BuildTarget {
    #[serde(rename = "schema")]
    schema_patterns: Vec<String>,
    template: PathBuf,
    output: PathBuf,
}
impl BuildTarget {
    pub fn output(&self) -> &Path {
        self.output.as_path()
    }

    /// Glob patterns matching the GraphQL documents to transform.
    pub fn schema_patterns(&self) -> &[String] {
        self.schema_patterns.as_slice()
    }

    pub fn template(&self) -> &Path {
        self.template.as_path()
    }

    fn resolve_against(self, base_dir: &Path) -> Self {
        Self {
            schema_patterns: self.schema_patterns
                .iter()
                .map(|pattern| resolve_pattern(base_dir, pattern))
                .collect(),
            template: base_dir.join(strip_dot_slash(&self.template)),
            output: base_dir.join(strip_dot_slash(&self.output)),
        }
    }
}

fn strip_dot_slash(path: &Path) -> &Path {
    path.strip_prefix("./").unwrap_or(path)
}

fn resolve_pattern(base_dir: &Path, pattern: &str) -> String {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    base_dir.join(pattern).to_string_lossy().into_owned()
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to read config file {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Invalid config in {source_name}: {err}")]
    JsonError {
        source_name: String,
        err: serde_json::Error,
    },

    #[error("The config in {source_name} does not define any build targets")]
    NoTargets {
        source_name: String,
    },
}
