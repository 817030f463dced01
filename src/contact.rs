//! Contact address and clipboard access

use std::fmt;
use std::time::Duration;
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
use std::time::Instant;

/// Address for corrections and suggestions
pub const CONTACT_EMAIL: &str = "maximilian.relam@gmail.com";

/// Confirmation shown after a successful copy
pub const COPIED_MESSAGE: &str = "E-post kopierad!";

/// How long the one-shot `contact` command keeps serving the copied address
pub const CONTACT_HOLD: Duration = Duration::from_secs(15);

/// Destination for copied text
pub trait Clipboard {
    /// Replace the clipboard contents
    ///
    /// # Errors
    ///
    /// Returns a description of the failure.
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard
///
/// The underlying handle is opened on first use and kept for the lifetime of
/// the value. On X11 and Wayland the copied text is only served while the
/// handle is alive, so a browser session keeps one `SystemClipboard` around.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, String> {
        if self.handle.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| "Clipboard unavailable".to_string())
    }

    /// Copy `text` and keep serving it for up to `hold`
    ///
    /// For short-lived processes. On X11 and Wayland this blocks until another
    /// program takes over the selection (a clipboard manager does so at once)
    /// or `hold` has passed. Elsewhere it returns immediately.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure.
    pub fn set_text_and_hold(&mut self, text: &str, hold: Duration) -> Result<(), String> {
        let clipboard = self.handle()?;
        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        ))]
        {
            use arboard::SetExtLinux;
            clipboard
                .set()
                .wait_until(Instant::now() + hold)
                .text(text)
                .map_err(|e| format!("Clipboard error: {e}"))
        }
        #[cfg(not(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        )))]
        {
            let _ = hold;
            clipboard
                .set_text(text)
                .map_err(|e| format!("Clipboard error: {e}"))
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.handle()?
            .set_text(text)
            .map_err(|e| format!("Clipboard error: {e}"))
    }
}

/// Copy the contact address
///
/// # Errors
///
/// Returns a description of the clipboard failure.
pub fn copy_contact(clipboard: &mut impl Clipboard) -> Result<(), String> {
    clipboard.set_text(CONTACT_EMAIL)?;
    tracing::info!("Copied contact address to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), String> {
            if self.fail {
                return Err("no display".to_string());
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_contact() {
        let mut clipboard = MemoryClipboard::default();
        copy_contact(&mut clipboard).unwrap();
        assert_eq!(clipboard.text.as_deref(), Some(CONTACT_EMAIL));
    }

    #[test]
    fn test_system_clipboard_starts_closed() {
        let clipboard = SystemClipboard::default();
        assert_eq!(format!("{clipboard:?}"), "SystemClipboard { open: false }");
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        assert_eq!(copy_contact(&mut clipboard), Err("no display".to_string()));
    }
}
