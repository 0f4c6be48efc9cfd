//! Terminal banner presenter.
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use runtime::{CollaboratorError, Presenter};

/// Prints banners to an output stream and remembers which one is showing.
pub struct ConsolePresenter<W> {
    out: Mutex<W>,
    showing: Mutex<Option<String>>,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            showing: Mutex::new(None),
        }
    }

    /// Text of the banner currently on screen.
    pub fn showing(&self) -> Option<String> {
        self.showing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn show_banner(&self, text: &str) -> Result<(), CollaboratorError> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "==== {text} ====")?;
        out.flush()?;
        *self.showing.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }

    fn hide_banner(&self) -> Result<(), CollaboratorError> {
        self.showing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_written_and_tracked() {
        let presenter = ConsolePresenter::new(Vec::new());

        presenter.show_banner("Day 2").unwrap();
        assert_eq!(presenter.showing().as_deref(), Some("Day 2"));

        presenter.hide_banner().unwrap();
        assert_eq!(presenter.showing(), None);

        let written = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(written, "==== Day 2 ====\n");
    }
}
