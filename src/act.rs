/// The `Act` enum lists the things the application knows how to do.
///
/// # Dispatching actions with `Act`
///
/// An `Act` can arrive from two places.  Buttons map to an `Act` directly, and key presses map to
/// an `Act` through the key bindings held in [`crate::Cmd`].  Either way, the
/// [`crate::Controller::act`] method is the single place where an `Act` changes application
/// state.
///
/// The snake case name of each variant doubles as its key in the `[keys]` table of `Chime.toml`:
///
/// ```toml
/// [keys]
/// show_dialog = "Tab"
/// hide_dialog = "Escape"
/// ```
///
/// * `Ding` - Set the greeting to "DING DING!" and ring the bell.
/// * `ShowDialog` - Pop up the instructions dialog.
/// * `HideDialog` - Put the instructions dialog away.
/// * `Be` - Do nothing, but do it on purpose.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Act {
    Ding,
    ShowDialog,
    HideDialog,
    Be,
}
