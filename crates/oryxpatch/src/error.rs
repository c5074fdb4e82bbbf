use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of the keymap driver.
///
/// Recoverable absences (the target keycode missing, a reset clause not
/// matching) never surface here; they are `Option`-shaped results inside the
/// patchers. Each variant embeds the context a user needs to debug a broken
/// layout export: the directory listing when `keymap.c` is missing, the head
/// of the file when the required callback is.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The layout directory does not contain a `keymap.c`.
    #[error("{} not found; directory contains: {listing}", .path.display())]
    KeymapMissing {
        /// Path that was expected to exist.
        path: PathBuf,
        /// Names of the entries that are present in the layout directory.
        listing: String,
    },

    /// The keymap defines no `process_record_user` callback to wrap.
    #[error("could not find process_record_user in {}; file starts with:\n{head}", .path.display())]
    CallbackMissing {
        /// The keymap file that was searched.
        path: PathBuf,
        /// Leading bytes of the file, for a quick look at what was exported.
        head: String,
    },

    /// Reading or writing the keymap file failed.
    #[error("i/o error on {}", .path.display())]
    Io {
        /// File the operation touched.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}
