use serde::{Deserialize, Serialize};

use crate::PacelineError;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    /// Play a sound on start/stop (presentation preference only)
    pub(crate) sound_enabled: bool,
    /// Haptic feedback on lap recording (presentation preference only)
    pub(crate) haptics_enabled: bool,
    /// Automatically save completed races (presentation preference only)
    pub(crate) auto_save: bool,
    /// Whether the viewfinder capture gate allows timing to start
    pub(crate) capture_permission_granted: bool,
    /// Default rider label for committed races; empty means auto-generated
    pub(crate) rider_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            haptics_enabled: true,
            auto_save: true,
            capture_permission_granted: false,
            rider_name: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_local_file() -> Option<Self> {
        let config_path = dirs::config_dir()?.join("paceline").join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let file = std::fs::File::open(config_path).ok()?;
            serde_json::from_reader(file).ok()
        } else {
            None
        }
    }

    pub fn save(&self) -> Result<(), PacelineError> {
        let config_path = dirs::config_dir()
            .ok_or(PacelineError::NoConfigDir)?
            .join("paceline")
            .join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| PacelineError::ConfigIOError { source: e })?;
            }
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| PacelineError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self)
            .map_err(|e| PacelineError::ConfigSerializeError { source: e })
    }
}
