//! Clipboard access for `convert --copy` and the prompt's `:copy`.

use arboard::Clipboard;

/// Put `text` on the system clipboard and print the same notice the
/// window's toast shows. Failures are logged, never fatal.
pub fn copy_with_notice(text: &str) {
    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));

    match copied {
        Ok(()) => println!("Result copied"),
        Err(e) => {
            log::warn!("clipboard write failed: {}", e);
            println!("Unable to copy");
        }
    }
}
