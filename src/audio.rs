use crate::Outcome;
use std::path::Path;
use std::{fs, io};
use tokio::task;

/// A handle to a sound that is playing, or was playing, in the background.
///
/// Dropping a `Playback` detaches it.  The sound keeps playing to the end and nobody hears about
/// how it went, except the logs.
#[derive(Debug, derive_new::new)]
pub struct Playback {
    handle: task::JoinHandle<Outcome<()>>,
}

impl Playback {
    /// Waits for the sound to finish.  Only tests have reason to call this.
    pub async fn finish(self) -> Outcome<()> {
        self.handle.await?
    }
}

/// Plays sound clips without blocking the caller.
///
/// The [`crate::Controller`] takes a `Box<dyn Player>` so tests can listen in without a sound
/// card.
pub trait Player: Send {
    /// Starts playing `clip` and returns immediately.  Must be called from within a [`tokio`]
    /// runtime.
    fn play(&self, clip: &Path) -> Playback;
}

/// Plays clips through the default output device using [`rodio`].
#[derive(Debug, Default, Copy, Clone)]
pub struct Speaker;

impl Speaker {
    /// Opens, decodes and plays `clip`, blocking until it ends.
    ///
    /// The file is read before the output device is opened, so a missing clip fails without
    /// touching the sound card.
    #[tracing::instrument(skip_all)]
    pub fn ring(clip: &Path) -> Outcome<()> {
        let file = fs::File::open(clip)?;
        let source = rodio::Decoder::new(io::BufReader::new(file))?;
        // The stream must outlive the sink.
        let (_stream, handle) = rodio::OutputStream::try_default()?;
        let sink = rodio::Sink::try_new(&handle)?;
        sink.append(source);
        tracing::trace!("Playing {}", clip.display());
        sink.sleep_until_end();
        Ok(())
    }
}

impl Player for Speaker {
    fn play(&self, clip: &Path) -> Playback {
        let clip = clip.to_path_buf();
        let handle = task::spawn_blocking(move || {
            let result = Self::ring(&clip);
            if let Err(e) = &result {
                tracing::warn!("Could not play {}: {e}", clip.display());
            }
            result
        });
        Playback::new(handle)
    }
}
