//! The `chime` crate is a small desktop application that says hello, rings a bell, and pops up a
//! dialog when asked.
//!
//! It is a tour of the basics of a GUI program: a window with a title and an icon, labels in a
//! few sizes, a picture, buttons that do things, a sound, a modal pop-up, and key presses that
//! work no matter which widget has focus.  Here is where to start reading:
//!
//! 1. Creating windows with Chime - [`App`]
//!     * [`app::run`]
//!     * [`App::new`]
//! 2. Routing input with `Controller` - [`Controller`]
//!     * [`Controller::drain`]
//!     * [`Controller::keyboard_input`]
//!     * [`Controller::act`]
//! 3. Reading commands from a configuration file with `Cmd` - [`Cmd`]
//!     * [`settings::load`]
//! 4. Dispatching actions with `Act` - [`Act`]
//! 5. Showing and hiding the dialog - [`Dialog`], [`Visibility`]
//! 6. Ringing the bell - [`Player`], [`Speaker`], [`Playback`]
//!
//! The program can do two things: ring the bell, which also changes the greeting to
//! "DING DING!", and show or hide the instructions dialog.  Buttons cover both.  Key presses are
//! mapped to actions by the `[keys]` table of `Chime.toml`, with TAB and ESC showing and hiding
//! the dialog out of the box.
//!
//! The [`App`] draws the widgets and forwards what the user does into an input subscription.  The
//! [`Controller`] holds the other end of the subscription and owns all of the state that the
//! input can change.  Because the controller never touches [`egui`] state, everything it does
//! can be tested without opening a window.
//!
//! We decorate the main function with `#[tokio::main]`.  The GUI runs on the main thread, while
//! [`tokio`] carries the sound on its blocking pool so the window never waits on the speaker.
mod act;
pub mod app;
pub mod assets;
mod audio;
mod cmd;
mod controller;
mod dialog;
mod fault;
mod input;
mod item;
pub mod settings;
mod utils;

/// Since this is a small application, we lift all user-facing data types and functions to the parent namespace
/// for ease of access.
pub use act::Act;
pub use app::App;
pub use audio::{Playback, Player, Speaker};
pub use cmd::Cmd;
pub use controller::{Controller, FEEDBACK, GREETING};
pub use dialog::{Dialog, Visibility};
pub use fault::{Fault, Outcome};
pub use input::{subscription, Button, Inbox, Input, KeyInput, KeyState, Outbox};
pub use item::{roster, Item};
pub use settings::Resources;
pub use utils::trace_init;
