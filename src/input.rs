use tokio::sync::mpsc;

/// The buttons on the main window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Button {
    /// The "Click Me" button.
    Ding,
    /// The "?" button.
    Help,
}

/// Whether a key went down or came back up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum KeyState {
    Pressed,
    Released,
}

impl KeyState {
    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }
}

/// A single key event as seen by the whole application, whichever widget has focus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_new::new, derive_getters::Getters)]
pub struct KeyInput {
    key: egui::Key,
    state: KeyState,
}

impl KeyInput {
    pub fn pressed(key: egui::Key) -> Self {
        Self::new(key, KeyState::Pressed)
    }

    pub fn released(key: egui::Key) -> Self {
        Self::new(key, KeyState::Released)
    }

    /// Reads a key event out of a raw [`egui::Event`].  Returns [`None`] for anything that is not
    /// a key event.  Auto-repeated presses count as presses.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::Key { key, pressed, .. } => {
                let state = if *pressed {
                    KeyState::Pressed
                } else {
                    KeyState::Released
                };
                Some(Self::new(*key, state))
            }
            _ => None,
        }
    }
}

/// Everything that can reach the [`crate::Controller`] through its subscription.
///
/// * `Click` - A button on the main window was clicked.
/// * `Key` - A key went down or up anywhere in the application.
/// * `Dismiss` - The dialog asked to be closed by its own means, e.g. a click on the backdrop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Click(Button),
    Key(KeyInput),
    Dismiss,
}

impl From<Button> for Input {
    fn from(button: Button) -> Self {
        Self::Click(button)
    }
}

impl From<KeyInput> for Input {
    fn from(key: KeyInput) -> Self {
        Self::Key(key)
    }
}

/// The sending half of the input subscription.  Held by whoever owns the widgets.
pub type Outbox = mpsc::UnboundedSender<Input>;
/// The receiving half of the input subscription.  Handed to the [`crate::Controller`] on
/// construction.
pub type Inbox = mpsc::UnboundedReceiver<Input>;

/// Opens a new input subscription.
pub fn subscription() -> (Outbox, Inbox) {
    mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_key_events() {
        let event = egui::Event::Key {
            key: egui::Key::Tab,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        let input = KeyInput::from_egui(&event);
        assert_eq!(input, Some(KeyInput::released(egui::Key::Tab)));
    }

    #[test]
    fn ignores_other_events() {
        let event = egui::Event::Text("a".to_string());
        assert!(KeyInput::from_egui(&event).is_none());
    }

    #[test]
    fn subscription_delivers_in_order() {
        let (tx, mut rx) = subscription();
        tx.send(Button::Help.into()).unwrap();
        tx.send(KeyInput::pressed(egui::Key::Escape).into()).unwrap();
        assert_eq!(rx.try_recv().ok(), Some(Input::Click(Button::Help)));
        assert_eq!(
            rx.try_recv().ok(),
            Some(Input::Key(KeyInput::pressed(egui::Key::Escape)))
        );
        assert!(rx.try_recv().is_err());
    }
}
