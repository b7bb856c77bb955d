use crate::{
    assets, settings, subscription, Button, Cmd, Controller, Input, Item, KeyInput, Outbox,
    Outcome, Player, Resources, Speaker,
};
use std::path::PathBuf;

/// Help line shown under the greeting.
pub const HELP: &str =
    "Press the buttons to trigger actions, or press TAB to show the help dialog and ESC to close it.";

/// Title of the main window.
pub const TITLE: &str = "Hello, World!";

/// Inner size of the main window, in points.
pub const WINDOW_SIZE: [f32; 2] = [300.0, 440.0];

/// The `app` module contains the `App` struct, the [`eframe`] front end of the application.
///
/// # Creating Windows with Chime
///
/// The `App` draws the widgets and nothing else.  What the widgets mean is up to the
/// [`Controller`], and the two talk over a subscription: the `App` holds the [`Outbox`] and the
/// controller holds the inbox.  Each frame, [`App::update`] does four things in order:
///
/// 1. Copies every key event egui saw into the outbox with [`forward_keys`].  Events are copied,
///    not consumed, so the controller hears about a key press no matter which widget has focus.
/// 2. Draws the main window, sending a click into the outbox for each button pressed.
/// 3. Asks the controller to [`Controller::drain`] the inbox.
/// 4. Draws the instructions dialog if the controller says it is visible.  If the user dismisses
///    it, that goes into the outbox too, and we drain again.
///
/// Configuration comes from [`settings::load`], read once on startup.  The key bindings become a
/// [`Cmd`], and the resource paths become a [`Resources`].
pub struct App {
    controller: Controller,
    outbox: Outbox,
    picture: Option<egui::TextureHandle>,
}

impl App {
    /// Creates an `App` from the settings in `config`, playing sounds through `player`.
    ///
    /// The picture is uploaded to the GPU here.  If it cannot be read, the window goes without.
    /// The roster is logged and let go.
    #[tracing::instrument(skip_all)]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &config::Config,
        items: Vec<Item>,
        player: Box<dyn Player>,
    ) -> Self {
        let cmd = Cmd::from(config);
        // Do you see the commands you expected?
        tracing::trace!("{:?}", cmd);
        let resources = Resources::from_config(config);
        let picture = assets::texture(&cc.egui_ctx, resources.image());
        for item in &items {
            tracing::trace!("Roster: {item}");
        }
        Self::assemble(cmd, player, resources.sound().clone(), picture)
    }

    /// Wires a [`Controller`] to a fresh subscription.
    fn assemble(
        cmd: Cmd,
        player: Box<dyn Player>,
        clip: PathBuf,
        picture: Option<egui::TextureHandle>,
    ) -> Self {
        let (outbox, inbox) = subscription();
        let controller = Controller::new(cmd, inbox, player, clip);
        Self {
            controller,
            outbox,
            picture,
        }
    }

    fn send(&self, input: impl Into<Input>) {
        send(&self.outbox, input.into());
    }

    /// Runs one frame: forward keys, draw, drain, then draw the dialog.
    fn frame(&mut self, ctx: &egui::Context) {
        forward_keys(ctx, &self.outbox);
        self.main_window(ctx);
        self.controller.drain();
        if self.controller.dialog().ui(ctx) {
            self.send(Input::Dismiss);
            self.controller.drain();
            ctx.request_repaint();
        }
    }

    fn main_window(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(egui::RichText::new(self.controller.text()).size(40.0));
                ui.add_space(10.0);
                ui.label(egui::RichText::new(HELP).size(14.0));
                ui.add_space(10.0);
                let side = assets::PICTURE_SIDE as f32;
                match &self.picture {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .fit_to_exact_size(egui::vec2(side, side)),
                        );
                    }
                    None => {
                        ui.add_space(side);
                    }
                }
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    ui.add_space(10.0);
                    let ding = egui::Button::new(egui::RichText::new("Click Me").size(20.0));
                    if ui.add_sized([160.0, 50.0], ding).clicked() {
                        self.send(Button::Ding);
                    }
                    ui.add_space(30.0);
                    let help = egui::Button::new(egui::RichText::new("?").size(20.0));
                    if ui.add_sized([50.0, 50.0], help).clicked() {
                        self.send(Button::Help);
                    }
                });
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

fn send(outbox: &Outbox, input: Input) {
    if outbox.send(input).is_err() {
        tracing::warn!("Controller is gone, input dropped.");
    }
}

/// Copies every key event of the current frame into `outbox`, whichever widget has focus.
/// The events stay in the egui input, so widgets still see them.  Returns the number forwarded.
pub fn forward_keys(ctx: &egui::Context, outbox: &Outbox) -> usize {
    let keys = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(KeyInput::from_egui)
            .collect::<Vec<KeyInput>>()
    });
    let count = keys.len();
    for key in keys {
        send(outbox, key.into());
    }
    count
}

/// Window settings for the main window.  The icon is optional, a missing image means the
/// platform default.
pub fn native_options(resources: &Resources) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(TITLE)
        .with_inner_size(WINDOW_SIZE)
        .with_resizable(false);
    if let Some(icon) = assets::icon(resources.image()) {
        viewport = viewport.with_icon(icon);
    }
    eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    }
}

/// Reads the configuration, opens the main window and runs until it closes.
///
/// Must be called from within a [`tokio`] runtime, which carries the sound.
pub fn run(items: Vec<Item>) -> Outcome<()> {
    let config = settings::load(settings::CONFIG_FILE)?;
    let resources = Resources::from_config(&config);
    let options = native_options(&resources);
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &config, items, Box::new(Speaker))))),
    )?;
    Ok(())
}
