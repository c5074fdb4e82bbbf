/// Configuration for the tap-dance rewrite.
///
/// The defaults reproduce the stock Moonlander workflow: the generated `FN24`
/// double-tap is replaced by a numpad-dot tap followed by a held space. The
/// fields exist so tests (and forks of the workflow) can target a different
/// key without re-deriving the patterns.
///
/// # Examples
///
/// ```rust
/// use oryxpatch::PatchOptions;
///
/// let options = PatchOptions {
///     target_key: "KC_F23".into(),
///     ..Default::default()
/// };
/// assert_eq!(options.tap_key, "KC_KP_DOT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    /// Keycode whose double-tap clause is searched for and removed.
    ///
    /// # Default
    ///
    /// `KC_F24`
    pub target_key: String,

    /// Keycode emitted as a discrete tap by the rewritten clause.
    ///
    /// # Default
    ///
    /// `KC_KP_DOT`
    pub tap_key: String,

    /// Keycode registered as held by the rewritten clause and released by the
    /// rewritten reset clause.
    ///
    /// # Default
    ///
    /// `KC_SPACE`
    pub hold_key: String,

    /// Comment text appended to every rewritten clause so the patch can be
    /// spotted in the output file.
    ///
    /// # Default
    ///
    /// `ORYX_FN24_NUMDOT_SPACE_PATCH`
    pub marker: String,

    /// Exclusive upper bound on the `dance_<n>_finished` ordinals scanned.
    /// Oryx numbers dance handlers contiguously from zero, so a small fixed
    /// bound covers every layout it emits.
    ///
    /// # Default
    ///
    /// `24`
    pub dance_ordinals: usize,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            target_key: "KC_F24".into(),
            tap_key: "KC_KP_DOT".into(),
            hold_key: "KC_SPACE".into(),
            marker: "ORYX_FN24_NUMDOT_SPACE_PATCH".into(),
            dance_ordinals: 24,
        }
    }
}
