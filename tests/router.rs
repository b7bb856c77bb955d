use chime::{
    subscription, Act, Button, Cmd, Controller, Input, KeyInput, Outbox, Playback, Player,
    Visibility, FEEDBACK,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Counts the clips it is asked to play and plays none of them.
#[derive(Clone, Default)]
struct Mute {
    plays: Arc<Mutex<usize>>,
}

impl Player for Mute {
    fn play(&self, _clip: &Path) -> Playback {
        *self.plays.lock().unwrap() += 1;
        Playback::new(tokio::spawn(async { Ok(()) }))
    }
}

fn start() -> (Controller, Outbox, Mute) {
    let mut cmd = Cmd::default();
    cmd.bind(egui::Key::Tab, Act::ShowDialog)
        .bind(egui::Key::Escape, Act::HideDialog);
    let (tx, rx) = subscription();
    let mute = Mute::default();
    let controller = Controller::new(
        cmd,
        rx,
        Box::new(mute.clone()),
        PathBuf::from("assets/sounds/example.wav"),
    );
    (controller, tx, mute)
}

fn press(key: egui::Key) -> Input {
    Input::Key(KeyInput::pressed(key))
}

fn release(key: egui::Key) -> Input {
    Input::Key(KeyInput::released(key))
}

#[tokio::test]
async fn primary_action_sets_feedback_text() {
    let (mut controller, tx, mute) = start();
    tx.send(Input::Click(Button::Ding)).unwrap();
    controller.drain();
    assert_eq!(controller.text(), "DING DING!");
    // Ringing again from the feedback text lands on the same text.
    tx.send(Input::Click(Button::Ding)).unwrap();
    controller.drain();
    assert_eq!(controller.text(), FEEDBACK);
    assert_eq!(*mute.plays.lock().unwrap(), 2);
}

#[test]
fn secondary_action_shows_dialog_idempotently() {
    let (mut controller, tx, _mute) = start();
    assert_eq!(controller.visibility(), Visibility::Hidden);
    tx.send(Input::Click(Button::Help)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Visible);
    tx.send(press(egui::Key::Tab)).unwrap();
    tx.send(Input::Click(Button::Help)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Visible);
}

#[test]
fn hide_key_hides_dialog_idempotently() {
    let (mut controller, tx, _mute) = start();
    tx.send(press(egui::Key::Escape)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Hidden);
    tx.send(press(egui::Key::Tab)).unwrap();
    tx.send(press(egui::Key::Escape)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Hidden);
}

#[test]
fn key_releases_never_toggle() {
    let (mut controller, tx, _mute) = start();
    tx.send(release(egui::Key::Tab)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Hidden);
    tx.send(press(egui::Key::Tab)).unwrap();
    tx.send(release(egui::Key::Escape)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Visible);
}

#[test]
fn show_then_hide() {
    let (mut controller, tx, _mute) = start();
    tx.send(Input::Click(Button::Help)).unwrap();
    assert_eq!(controller.drain(), 1);
    assert_eq!(controller.visibility(), Visibility::Visible);
    tx.send(press(egui::Key::Escape)).unwrap();
    controller.drain();
    assert_eq!(controller.visibility(), Visibility::Hidden);
}

#[test]
fn dialog_does_not_touch_text() {
    let (mut controller, tx, mute) = start();
    tx.send(press(egui::Key::Tab)).unwrap();
    tx.send(press(egui::Key::Escape)).unwrap();
    controller.drain();
    assert_eq!(controller.text(), chime::GREETING);
    assert_eq!(*mute.plays.lock().unwrap(), 0);
}
