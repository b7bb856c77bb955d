use crate::{Act, Fault, Outcome};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// The `Cmd` struct maps keys to an [`Act`].
///
/// # Reading commands from a configuration file with `Cmd`
///
/// In `Chime.toml` the act is the key and the keyboard key is the value, because each act gets
/// at most one binding:
///
/// ```toml
/// [keys]
/// show_dialog = "Tab"
/// ```
///
/// Looking up a key press wants the reverse, so `Cmd` stores the bindings flipped, keyed by
/// [`egui::Key`].  Two acts bound to the same key resolve to whichever act was read last.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Cmd {
    bindings: HashMap<egui::Key, Act>,
}

impl Cmd {
    /// Binds `key` to `act`, replacing any act previously bound to `key`.
    pub fn bind(&mut self, key: egui::Key, act: Act) -> &mut Self {
        tracing::trace!("Binding {} to {act}.", key.name());
        self.bindings.insert(key, act);
        self
    }

    /// Binds the key called `name` to `act`.
    ///
    /// Will [`Fault::UnknownKey`] if `name` does not name a key.
    pub fn bind_name(&mut self, name: &str, act: Act) -> Outcome<&mut Self> {
        match egui::Key::from_name(name) {
            Some(key) => Ok(self.bind(key, act)),
            None => Err(Fault::UnknownKey {
                name: name.to_string(),
            }),
        }
    }

    /// The `act` method returns the [`Act`] bound to `key`, if any.  Whether the key went up or
    /// down is for the caller to decide.
    pub fn act(&self, key: &egui::Key) -> Option<Act> {
        self.bindings.get(key).copied()
    }
}

/// Reads bindings from the `keys` table of the config.  Acts with no entry stay unbound, and an
/// entry that names no key is logged and skipped, leaving the act to its button.
impl From<&config::Config> for Cmd {
    fn from(config: &config::Config) -> Self {
        let mut cmd = Self::default();
        for act in Act::iter() {
            let path = format!("keys.{act}");
            if let Ok(name) = config.get_string(&path) {
                if let Err(e) = cmd.bind_name(&name, act) {
                    tracing::warn!("Skipping binding for {act}: {e}");
                }
            }
        }
        cmd
    }
}
