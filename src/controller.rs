use crate::{Act, Button, Cmd, Dialog, Inbox, Input, KeyInput, Playback, Player, Visibility};
use std::path::PathBuf;

/// Text shown on the main window before anything happens.
pub const GREETING: &str = "Hello, World!";
/// Text shown on the main window after the bell rings.
pub const FEEDBACK: &str = "DING DING!";

/// The `Controller` owns the state of the main window and decides what every input means.
///
/// # Routing input with `Controller`
///
/// The controller does not go looking for input.  It is handed an [`Inbox`] on construction, the
/// receiving end of a subscription, and whoever draws the widgets holds the matching
/// [`crate::Outbox`].  Every key event in the application goes into the outbox, whichever widget
/// has focus, along with button clicks.  Once per frame the front end calls
/// [`Controller::drain`], and the controller works through whatever has piled up.
///
/// Key events are read, never taken.  The front end keeps its copy of each event, so focus
/// traversal and text entry carry on as usual.
///
/// Key presses go through the [`Cmd`] key map to find their [`Act`].  Key releases are ignored.
/// Buttons map to a fixed [`Act`]:
///
/// * [`Button::Ding`] - [`Act::Ding`]
/// * [`Button::Help`] - [`Act::ShowDialog`]
///
/// The bell is fire-and-forget.  [`Controller::ding`] hands back the [`Playback`] in case the
/// caller cares, but [`Controller::act`] drops it on the floor.  Playback failures are logged
/// where they happen and never make it back here.
#[derive(derive_getters::Getters)]
pub struct Controller {
    #[getter(skip)]
    cmd: Cmd,
    #[getter(skip)]
    clip: PathBuf,
    dialog: Dialog,
    #[getter(skip)]
    inbox: Inbox,
    #[getter(skip)]
    player: Box<dyn Player>,
    text: String,
}

impl Controller {
    /// Creates a `Controller` showing [`GREETING`] with the dialog hidden.
    ///
    /// * `cmd` - Key bindings used to translate key presses.
    /// * `inbox` - The input subscription.
    /// * `player` - Plays the bell.
    /// * `clip` - Path to the bell sound.
    pub fn new(cmd: Cmd, inbox: Inbox, player: Box<dyn Player>, clip: PathBuf) -> Self {
        Self {
            cmd,
            clip,
            dialog: Dialog::default(),
            inbox,
            player,
            text: GREETING.to_string(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        *self.dialog.visibility()
    }

    /// Sets the text to [`FEEDBACK`] and starts the bell.  Returns without waiting for the bell.
    #[tracing::instrument(skip_all)]
    pub fn ding(&mut self) -> Playback {
        self.text = FEEDBACK.to_string();
        tracing::trace!("Text set to {FEEDBACK}");
        self.player.play(&self.clip)
    }

    /// Dispatches on the variant of `act`.  This is the only place application state changes.
    #[tracing::instrument(skip(self))]
    pub fn act(&mut self, act: Act) {
        match act {
            Act::Ding => {
                // Detached, see the type docs.
                let _ = self.ding();
            }
            Act::ShowDialog => self.dialog.show(),
            Act::HideDialog => self.dialog.hide(),
            Act::Be => tracing::trace!("Taking it easy."),
        }
    }

    /// Handles a button click.
    pub fn click(&mut self, button: Button) {
        tracing::trace!("Click detected: {button}");
        let act = match button {
            Button::Ding => Act::Ding,
            Button::Help => Act::ShowDialog,
        };
        self.act(act);
    }

    /// Handles a key event from anywhere in the application.  Returns the [`Act`] taken, if any.
    ///
    /// Only presses dispatch.  Releases, and presses of unbound keys, do nothing.
    pub fn keyboard_input(&mut self, event: &KeyInput) -> Option<Act> {
        if !event.state().is_pressed() {
            return None;
        }
        let act = self.cmd.act(event.key());
        match act {
            Some(act) => {
                tracing::trace!("Act detected: {act}");
                self.act(act);
            }
            // No crime here.
            None => tracing::trace!("Unbound key: {}", event.key().name()),
        }
        act
    }

    /// Handles one input from the subscription.
    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::Click(button) => self.click(button),
            Input::Key(event) => {
                let _ = self.keyboard_input(&event);
            }
            Input::Dismiss => self.act(Act::HideDialog),
        }
    }

    /// Handles every input waiting in the subscription, in the order it was sent.  Returns the
    /// number handled.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Ok(input) = self.inbox.try_recv() {
            self.dispatch(input);
            count += 1;
        }
        count
    }
}
