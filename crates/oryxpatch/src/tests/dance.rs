use crate::{PatchOptions, function_body, patch_tap_dance};

/// A `finished`/`reset` handler pair in the shape Oryx generates.
fn dance_pair(n: usize, finished_case: &str, reset_case: &str) -> String {
    format!(
        r"void dance_{n}_finished(tap_dance_state_t *state, void *user_data) {{
    switch (dance_state[{n}].step) {{
        case SINGLE_TAP: register_code16(KC_ENTER); break;
        {finished_case}
    }}
}}
void dance_{n}_reset(tap_dance_state_t *state, void *user_data) {{
    switch (dance_state[{n}].step) {{
        case SINGLE_TAP: unregister_code16(KC_ENTER); break;
        {reset_case}
    }}
}}
"
    )
}

#[test]
fn patches_the_matching_ordinal_pair() {
    let text = [
        dance_pair(
            0,
            "case DOUBLE_TAP: register_code16(KC_B); break;",
            "case DOUBLE_TAP: unregister_code16(KC_B); break;",
        ),
        dance_pair(
            3,
            "case DOUBLE_TAP: register_code16(KC_F24); break;",
            "case DOUBLE_TAP: unregister_code16(KC_F24); break;",
        ),
    ]
    .concat();

    let patched = patch_tap_dance(&text, &PatchOptions::default()).unwrap();
    assert!(patched.contains(
        "case DOUBLE_TAP: tap_code16(KC_KP_DOT); register_code16(KC_SPACE); break; \
         /* ORYX_FN24_NUMDOT_SPACE_PATCH */"
    ));
    assert!(patched.contains(
        "case DOUBLE_TAP: unregister_code16(KC_SPACE); break; /* ORYX_FN24_NUMDOT_SPACE_PATCH */"
    ));
    assert!(!patched.contains("KC_F24"));

    // Ordinal 0 is untouched.
    assert!(patched.contains("case DOUBLE_TAP: register_code16(KC_B); break;"));
    assert!(patched.contains("case DOUBLE_TAP: unregister_code16(KC_B); break;"));
}

#[test]
fn no_target_keycode_returns_none() {
    let text = dance_pair(
        1,
        "case DOUBLE_TAP: register_code16(KC_B); break;",
        "case DOUBLE_TAP: unregister_code16(KC_B); break;",
    );
    assert_eq!(patch_tap_dance(&text, &PatchOptions::default()), None);
}

#[test]
fn keycode_without_structural_clause_returns_none() {
    // The target key appears, but never in a double-tap register clause.
    let text = dance_pair(
        2,
        "case SINGLE_HOLD: layer_on(KC_F24); break;",
        "case SINGLE_HOLD: layer_off(KC_F24); break;",
    );
    assert_eq!(patch_tap_dance(&text, &PatchOptions::default()), None);
}

#[test]
fn tap_code_register_variant_is_recognized() {
    let text = dance_pair(
        4,
        "case DOUBLE_TAP: tap_code16(KC_F24); break;",
        "case DOUBLE_TAP: tap_code16(KC_F24); break;",
    );
    let patched = patch_tap_dance(&text, &PatchOptions::default()).unwrap();
    assert!(!patched.contains("KC_F24"));
}

#[test]
fn missing_reset_body_is_tolerated() {
    let text = r"void dance_5_finished(tap_dance_state_t *state, void *user_data) {
    switch (dance_state[5].step) {
        case DOUBLE_TAP: register_code16(KC_F24); break;
    }
}
";
    let patched = patch_tap_dance(text, &PatchOptions::default()).unwrap();
    assert!(patched.contains("tap_code16(KC_KP_DOT)"));
}

#[test]
fn reset_without_clause_still_counts_as_patched() {
    let text = dance_pair(
        6,
        "case DOUBLE_TAP: register_code16(KC_F24); break;",
        "case SINGLE_HOLD: unregister_code16(KC_LSFT); break;",
    );
    let patched = patch_tap_dance(&text, &PatchOptions::default()).unwrap();
    assert!(patched.contains("register_code16(KC_SPACE)"));
    assert!(patched.contains("case SINGLE_HOLD: unregister_code16(KC_LSFT); break;"));
}

#[test]
fn first_matching_ordinal_wins() {
    let text = [
        dance_pair(
            1,
            "case DOUBLE_TAP: register_code16(KC_F24); break;",
            "case DOUBLE_TAP: unregister_code16(KC_F24); break;",
        ),
        dance_pair(
            7,
            "case DOUBLE_TAP: register_code16(KC_F24); break;",
            "case DOUBLE_TAP: unregister_code16(KC_F24); break;",
        ),
    ]
    .concat();

    let patched = patch_tap_dance(&text, &PatchOptions::default()).unwrap();
    let first = function_body(&patched, "dance_1_finished").unwrap();
    assert!(first.contains("register_code16(KC_SPACE)"));
    let second = function_body(&patched, "dance_7_finished").unwrap();
    assert!(second.contains("register_code16(KC_F24)"));
}

#[test]
fn clause_match_tolerates_whitespace() {
    let text = dance_pair(
        8,
        "case  DOUBLE_TAP :  register_code16( KC_F24 ) ; break ;",
        "case DOUBLE_TAP: unregister_code16(KC_F24); break;",
    );
    assert!(patch_tap_dance(&text, &PatchOptions::default()).is_some());
}

#[test]
fn ordinal_bound_is_exclusive() {
    let text = dance_pair(
        24,
        "case DOUBLE_TAP: register_code16(KC_F24); break;",
        "case DOUBLE_TAP: unregister_code16(KC_F24); break;",
    );
    assert_eq!(patch_tap_dance(&text, &PatchOptions::default()), None);
}

#[test]
fn custom_options_change_keys_and_marker() {
    let options = PatchOptions {
        target_key: "KC_F23".into(),
        tap_key: "KC_DOT".into(),
        hold_key: "KC_ENTER".into(),
        marker: "MY_PATCH".into(),
        ..PatchOptions::default()
    };
    let text = dance_pair(
        2,
        "case DOUBLE_TAP: register_code16(KC_F23); break;",
        "case DOUBLE_TAP: unregister_code16(KC_F23); break;",
    );
    let patched = patch_tap_dance(&text, &options).unwrap();
    assert!(patched.contains("tap_code16(KC_DOT); register_code16(KC_ENTER); break; /* MY_PATCH */"));
    assert!(patched.contains("unregister_code16(KC_ENTER); break; /* MY_PATCH */"));
}
