use crate::Outcome;
use std::path::PathBuf;

/// Name of the optional config file, read from the working directory as `Chime.toml`.
pub const CONFIG_FILE: &str = "Chime";

/// Where the bundled picture and sound live.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, derive_getters::Getters)]
pub struct Resources {
    image: PathBuf,
    sound: PathBuf,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            image: PathBuf::from("assets/images/example.png"),
            sound: PathBuf::from("assets/sounds/example.wav"),
        }
    }
}

impl Resources {
    /// Reads the `resources` table from `config`, falling back to the defaults if it is missing
    /// or malformed.
    pub fn from_config(config: &config::Config) -> Self {
        match config.get::<Self>("resources") {
            Ok(resources) => resources,
            Err(e) => {
                tracing::warn!("Using default resource paths: {e}");
                Self::default()
            }
        }
    }
}

/// The built-in configuration, used as-is when `Chime.toml` is absent or unreadable.
pub fn defaults() -> Outcome<config::ConfigBuilder<config::builder::DefaultState>> {
    let resources = Resources::default();
    let builder = config::Config::builder()
        .set_default("keys.show_dialog", "Tab")?
        .set_default("keys.hide_dialog", "Escape")?
        .set_default(
            "resources.image",
            resources.image().to_string_lossy().to_string(),
        )?
        .set_default(
            "resources.sound",
            resources.sound().to_string_lossy().to_string(),
        )?;
    Ok(builder)
}

/// Loads the configuration from the file `name` (any extension the [`config`] crate knows),
/// layered over [`defaults`].
///
/// A missing file is fine.  If the file exists but does not parse we warn and keep the defaults,
/// so a typo in `Chime.toml` costs you your key bindings, not the app.
#[tracing::instrument]
pub fn load(name: &str) -> Outcome<config::Config> {
    match defaults()?
        .add_source(config::File::with_name(name).required(false))
        .build()
    {
        Ok(config) => {
            tracing::trace!("Config read.");
            Ok(config)
        }
        Err(e) => {
            tracing::warn!("Could not read config from file: {e}");
            let config = defaults()?.build()?;
            Ok(config)
        }
    }
}
