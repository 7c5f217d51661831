use config::{Config, ConfigError, Environment, File};
use domain::tag::FieldDefaults;
use serde::{Deserialize, Serialize};

/// Base name of the optional configuration file (`udt-tools.toml`, `.json`, `.yaml`)
pub const DEFAULT_CONFIG_NAME: &str = "udt-tools";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolConfig {
    /// Fallbacks for absent spreadsheet cells
    #[serde(default)]
    pub defaults: FieldDefaults,
    /// Encoder destination when none is given on the command line
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_output_file() -> String {
    "output.json".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            defaults: FieldDefaults::default(),
            output_file: default_output_file(),
        }
    }
}

impl ToolConfig {
    /// Layered load: built-in defaults, then the config file, then
    /// `UDT__`-prefixed environment variables (e.g. `UDT__DEFAULTS__DATA_TYPE=Int4`).
    ///
    /// An explicitly named file must exist; the default one is optional.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let s = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("UDT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
