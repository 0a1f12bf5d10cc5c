//! Best-effort copy of the result to the system clipboard.

use arboard::Clipboard;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// How long the program stays around for the clipboard before exiting.
const TIMEOUT: Duration = Duration::from_secs(1);

/// Puts `text` on the system clipboard.
///
/// X11 and Wayland serve the contents from the process that set them, so on
/// Linux this blocks until another owner (usually a clipboard manager) takes
/// the selection over.
pub fn write_text(text: String) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;

        return clipboard.set().wait().text(text);
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text(text)
    }
}

/// Copies text to the system clipboard if one is reachable.
///
/// Failures are never reported to the user, only logged. The copy runs on
/// its own thread and the caller waits for it at most `TIMEOUT`.
pub fn copy_best_effort(text: &str) {
    let (sender, receiver) = mpsc::channel();
    let text = text.to_string();

    let spawned = thread::Builder::new()
        .name("clipboard".to_string())
        .spawn(move || {
            // The receiver is gone if we already timed out.
            let _ = sender.send(write_text(text));
        });

    if let Err(error) = spawned {
        debug!(%error, "Could not start clipboard thread");
        return;
    }

    match receiver.recv_timeout(TIMEOUT) {
        Ok(Ok(())) =>
            debug!("Copied result to clipboard"),
        Ok(Err(error)) =>
            debug!(%error, "Clipboard unavailable"),
        Err(mpsc::RecvTimeoutError::Timeout) =>
            debug!(timeout = ?TIMEOUT, "Clipboard still held by this process at exit"),
        Err(mpsc::RecvTimeoutError::Disconnected) =>
            debug!("Clipboard thread ended without a result"),
    }
}
