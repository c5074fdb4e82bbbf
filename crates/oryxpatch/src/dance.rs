//! Tap-dance patcher: rewrite the target double-tap clause of the first
//! matching `dance_<n>_finished` / `dance_<n>_reset` pair.
//!
//! Oryx enumerates dance handlers by small contiguous ordinals, so a bounded
//! linear scan over candidate names covers everything it emits. Only the
//! first qualifying ordinal is rewritten; the workflow assigns the target
//! key to exactly one dance.

use std::borrow::Cow;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::body::{function_body, replace_function_body};
use crate::options::PatchOptions;

/// Rewrites the double-tap clause of the first dance pair that registers
/// `options.target_key`.
///
/// For each ordinal below `options.dance_ordinals`, the `finished` body is
/// fetched and skipped unless it mentions the target key and contains a
/// `case DOUBLE_TAP: register_code16(<target>); break;` clause (`tap_code16`
/// is accepted as an equivalent register call). That clause becomes a
/// `tap_key` tap followed by a held `hold_key`, annotated with the marker
/// comment. The sibling `reset` body, when present, has its symmetric
/// unregister clause replaced by a `hold_key` release; a missing reset body
/// or clause is tolerated.
///
/// Returns the patched text, or `None` when no ordinal qualifies (the input
/// is then left untouched by the caller).
#[must_use]
pub fn patch_tap_dance(text: &str, options: &PatchOptions) -> Option<String> {
    let target = regex::escape(&options.target_key);
    let finished_clause = Regex::new(&format!(
        r"case\s+DOUBLE_TAP\s*:\s*(?:register_code16|tap_code16)\s*\(\s*{target}\s*\)\s*;\s*break\s*;"
    ))
    .ok()?;
    let reset_clause = Regex::new(&format!(
        r"case\s+DOUBLE_TAP\s*:\s*(?:unregister_code16|tap_code16)\s*\(\s*{target}\s*\)\s*;\s*break\s*;"
    ))
    .ok()?;

    let finished_rewrite = format!(
        "case DOUBLE_TAP: tap_code16({}); register_code16({}); break; /* {} */",
        options.tap_key, options.hold_key, options.marker
    );
    let reset_rewrite = format!(
        "case DOUBLE_TAP: unregister_code16({}); break; /* {} */",
        options.hold_key, options.marker
    );

    for ordinal in 0..options.dance_ordinals {
        let finished_name = format!("dance_{ordinal}_finished");
        let Some(finished_body) = function_body(text, &finished_name) else {
            continue;
        };
        if !finished_body.contains(&options.target_key) {
            continue;
        }
        let Cow::Owned(finished_patched) =
            finished_clause.replacen(finished_body, 1, NoExpand(&finished_rewrite))
        else {
            // Target key mentioned for some other purpose; keep scanning.
            debug!(ordinal, "target key present but no double-tap clause");
            continue;
        };
        let mut patched = replace_function_body(text, &finished_name, &finished_patched)?;

        let reset_name = format!("dance_{ordinal}_reset");
        if let Some(reset_body) = function_body(&patched, &reset_name).map(str::to_owned) {
            if let Cow::Owned(reset_patched) =
                reset_clause.replacen(&reset_body, 1, NoExpand(&reset_rewrite))
            {
                if let Some(next) = replace_function_body(&patched, &reset_name, &reset_patched) {
                    patched = next;
                }
            } else {
                debug!(ordinal, "reset body has no matching clause; left untouched");
            }
        }

        return Some(patched);
    }

    None
}
