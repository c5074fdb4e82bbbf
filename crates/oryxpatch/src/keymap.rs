//! Keymap driver: read, patch, rename, append, write.
//!
//! The driver is the only component that touches the filesystem. Every fatal
//! check runs before the single whole-file write, so a failed run leaves the
//! exported keymap byte-identical.

use std::path::Path;
use std::sync::LazyLock;
use std::{fs, io};

use regex::Regex;
use tracing::{info, warn};

use crate::dance::patch_tap_dance;
use crate::error::PatchError;
use crate::options::PatchOptions;

/// File name the Oryx export places in each layout directory.
pub const KEYMAP_FILE: &str = "keymap.c";

/// Reserved name the generated callback is renamed to.
pub const ORYX_CALLBACK: &str = "process_record_user_oryx";

/// Callback the injected wrapper expects the custom source file to define.
/// Returning `false` from it marks the key as handled and short-circuits the
/// generated logic.
pub const CUSTOM_CALLBACK: &str = "process_record_user_custom";

/// How much of the file to echo back when the required callback is missing.
const HEAD_BYTES: usize = 500;

static CALLBACK_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"bool\s+process_record_user\s*\(").expect("callback signature pattern")
});

/// Patches the `keymap.c` inside `layout_dir` in place.
///
/// Steps, in order: resolve and read the file, rewrite the tap-dance pair
/// (all three outcomes of that step are non-fatal and logged), rename the
/// first `process_record_user` definition to [`ORYX_CALLBACK`], append the
/// wrapper block referencing `custom_code`, and write the result back. The
/// wrapper includes `custom_code` by path; its content is never read.
///
/// # Errors
///
/// [`PatchError::KeymapMissing`] when the layout directory has no `keymap.c`,
/// [`PatchError::CallbackMissing`] when no `process_record_user` definition
/// is present, and [`PatchError::Io`] when reading or writing fails. No write
/// happens on any error path.
pub fn patch_keymap(
    layout_dir: &Path,
    custom_code: &Path,
    options: &PatchOptions,
) -> Result<(), PatchError> {
    let keymap_path = layout_dir.join(KEYMAP_FILE);
    if !keymap_path.is_file() {
        return Err(PatchError::KeymapMissing {
            path: keymap_path,
            listing: directory_listing(layout_dir),
        });
    }

    let content = fs::read_to_string(&keymap_path).map_err(|source| io_error(&keymap_path, source))?;
    info!(bytes = content.len(), "found keymap.c");

    let content = match patch_tap_dance(&content, options) {
        Some(patched) => {
            info!(
                "replaced {} tap-dance behavior with {} + held {} on double tap",
                options.target_key, options.tap_key, options.hold_key
            );
            patched
        }
        None if content.contains(&options.target_key) => {
            warn!(
                "{} found, but no matching dance_<n>_finished/reset patch target",
                options.target_key
            );
            content
        }
        None => {
            info!(
                "{} not present in keymap.c; no tap-dance replacement needed",
                options.target_key
            );
            content
        }
    };

    if !CALLBACK_SIGNATURE.is_match(&content) {
        return Err(PatchError::CallbackMissing {
            path: keymap_path,
            head: file_head(&content),
        });
    }

    let renamed = format!("bool {ORYX_CALLBACK}(");
    let mut content = CALLBACK_SIGNATURE
        .replacen(&content, 1, renamed.as_str())
        .into_owned();
    content.push_str(&wrapper_block(custom_code));

    fs::write(&keymap_path, &content).map_err(|source| io_error(&keymap_path, source))?;
    info!("successfully patched {}", keymap_path.display());
    Ok(())
}

/// Wrapper appended after the renamed callback: forward declaration, include
/// of the caller-supplied source, and a fresh `process_record_user` that lets
/// the custom handler claim a key before the generated logic runs.
fn wrapper_block(custom_code: &Path) -> String {
    format!(
        r#"

// ============================================================
// INJECTED BY ORYX-CUSTOM-MOONLANDER WORKFLOW
// ============================================================
bool {ORYX_CALLBACK}(uint16_t keycode, keyrecord_t *record);
#include "{include}"

bool process_record_user(uint16_t keycode, keyrecord_t *record) {{
    if (!{CUSTOM_CALLBACK}(keycode, record)) {{
        return false;
    }}
    return {ORYX_CALLBACK}(keycode, record);
}}
"#,
        include = custom_code.display()
    )
}

fn io_error(path: &Path, source: io::Error) -> PatchError {
    PatchError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn directory_listing(dir: &Path) -> String {
    match fs::read_dir(dir) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names.join(", ")
        }
        Err(err) => format!("<unreadable: {err}>"),
    }
}

fn file_head(content: &str) -> String {
    let mut end = content.len().min(HEAD_BYTES);
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    content[..end].to_owned()
}
