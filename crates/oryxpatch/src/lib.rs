//! One-shot patcher for Oryx-exported QMK `keymap.c` sources.
//!
//! ZSA's Oryx layout compiler emits a self-contained `keymap.c` with no hook
//! for hand-written behavior. This crate rewrites that file in place so a
//! user-maintained source file can participate in key processing:
//!
//! - the generated `FN24` double-tap dance is rewritten to tap the numpad dot
//!   and hold space ([`patch_tap_dance`]), and
//! - the generated `process_record_user` callback is renamed and wrapped so an
//!   externally supplied custom callback runs first ([`patch_keymap`]).
//!
//! The transformation is lexical, not syntactic: a small brace-matching scan
//! ([`find_matching_brace`]) locates function bodies while ignoring braces
//! inside literals and comments, and regex patterns recognize the handful of
//! generated shapes that need to change. Nothing else about the file is
//! parsed or validated.

mod body;
mod dance;
mod error;
mod keymap;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use body::{function_body, replace_function_body};
pub use dance::patch_tap_dance;
pub use error::PatchError;
pub use keymap::{CUSTOM_CALLBACK, KEYMAP_FILE, ORYX_CALLBACK, patch_keymap};
pub use options::PatchOptions;
pub use scanner::find_matching_brace;
