/// Whether the instructions dialog is on screen.
///
/// | from      | `show`    | `hide`   |
/// |-----------|-----------|----------|
/// | `Hidden`  | `Visible` | `Hidden` |
/// | `Visible` | `Visible` | `Hidden` |
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Moves to `Visible`.  Returns `true` if that was a change.
    pub fn show(&mut self) -> bool {
        let changed = *self == Self::Hidden;
        *self = Self::Visible;
        changed
    }

    /// Moves to `Hidden`.  Returns `true` if that was a change.
    pub fn hide(&mut self) -> bool {
        let changed = *self == Self::Visible;
        *self = Self::Hidden;
        changed
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// The instructions dialog: a modal pop-up with fixed content.
///
/// The dialog has no handlers of its own.  The [`crate::Controller`] owns it and flips its
/// [`Visibility`]; the front end calls [`Dialog::ui`] every frame and reports back if the user
/// tried to dismiss it.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct Dialog {
    title: String,
    message: String,
    size: egui::Vec2,
    #[setters(skip)]
    visibility: Visibility,
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            title: "Instructions".to_string(),
            message: "Pop!".to_string(),
            size: egui::vec2(200.0, 100.0),
            visibility: Visibility::Hidden,
        }
    }
}

impl Dialog {
    /// Shows the dialog.  No-op when already visible.
    pub fn show(&mut self) {
        if self.visibility.show() {
            tracing::trace!("Dialog shown.");
        }
    }

    /// Hides the dialog.  No-op when already hidden.
    pub fn hide(&mut self) {
        if self.visibility.hide() {
            tracing::trace!("Dialog hidden.");
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Draws the dialog as an [`egui::Modal`] if it is visible.  The modal centers itself on the
    /// main window and blocks input to everything behind it.
    ///
    /// Returns `true` when the user asked the modal to close, by clicking the backdrop or pressing
    /// escape.  Closing is left to the caller.
    pub fn ui(&self, ctx: &egui::Context) -> bool {
        if !self.is_visible() {
            return false;
        }
        let frame = egui::Frame::popup(&ctx.style()).fill(egui::Color32::ORANGE);
        let response = egui::Modal::new(egui::Id::new("instructions"))
            .frame(frame)
            .show(ctx, |ui| {
                ui.set_min_size(self.size);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.title)
                            .size(14.0)
                            .color(egui::Color32::BLACK),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(&self.message)
                            .size(20.0)
                            .color(egui::Color32::BLACK),
                    );
                });
            });
        response.should_close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_is_idempotent() {
        let mut state = Visibility::default();
        assert!(state.show());
        assert!(!state.show());
        assert_eq!(state, Visibility::Visible);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut state = Visibility::Hidden;
        assert!(!state.hide());
        assert_eq!(state, Visibility::Hidden);
        state.show();
        assert!(state.hide());
        assert_eq!(state, Visibility::Hidden);
    }

    #[test]
    fn dialog_starts_hidden() {
        let dialog = Dialog::default();
        assert!(!dialog.is_visible());
        assert_eq!(dialog.title(), "Instructions");
        assert_eq!(dialog.message(), "Pop!");
    }

    #[test]
    fn setters_keep_visibility() {
        let mut dialog = Dialog::default().with_message("Boo!");
        dialog.show();
        assert!(dialog.is_visible());
        assert_eq!(dialog.message(), "Boo!");
    }
}
