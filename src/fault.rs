/// The `Fault` enum collects the ways that `chime` can fail.
///
/// Most of these are recoverable.  A missing picture means no picture, and a missing sound means
/// a quiet button.  The only faults that reach `main` are failures to read the built-in config
/// defaults and failures to open the main window.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum Fault {
    #[display("Config error: {_0}")]
    Config(config::ConfigError),
    #[display("Could not open the main window: {_0}")]
    Window(eframe::Error),
    #[display("Image error: {_0}")]
    Image(image::ImageError),
    #[display("IO error: {_0}")]
    Io(std::io::Error),
    #[display("Could not decode audio: {_0}")]
    Decode(rodio::decoder::DecoderError),
    #[display("Could not open audio output: {_0}")]
    Stream(rodio::StreamError),
    #[display("Could not play audio: {_0}")]
    Play(rodio::PlayError),
    #[display("Background task failed: {_0}")]
    Join(tokio::task::JoinError),
    #[display("Unknown key name: {name}")]
    UnknownKey { name: String },
}

/// Results returned by fallible operations in the crate.
pub type Outcome<T> = Result<T, Fault>;

impl From<config::ConfigError> for Fault {
    fn from(value: config::ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<eframe::Error> for Fault {
    fn from(value: eframe::Error) -> Self {
        Self::Window(value)
    }
}

impl From<image::ImageError> for Fault {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}

impl From<std::io::Error> for Fault {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rodio::decoder::DecoderError> for Fault {
    fn from(value: rodio::decoder::DecoderError) -> Self {
        Self::Decode(value)
    }
}

impl From<rodio::StreamError> for Fault {
    fn from(value: rodio::StreamError) -> Self {
        Self::Stream(value)
    }
}

impl From<rodio::PlayError> for Fault {
    fn from(value: rodio::PlayError) -> Self {
        Self::Play(value)
    }
}

impl From<tokio::task::JoinError> for Fault {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Join(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_names_the_key() {
        let fault = Fault::UnknownKey {
            name: "Hyper".to_string(),
        };
        assert_eq!(fault.to_string(), "Unknown key name: Hyper");
    }

    #[test]
    fn window_errors_keep_their_cause() {
        let cause = std::io::Error::other("no display");
        let fault = Fault::from(eframe::Error::AppCreation(Box::new(cause)));
        assert!(matches!(fault, Fault::Window(_)));
        assert!(std::error::Error::source(&fault).is_some());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let fault = Fault::from(io);
        assert!(matches!(fault, Fault::Io(_)));
        assert!(std::error::Error::source(&fault).is_some());
    }
}
