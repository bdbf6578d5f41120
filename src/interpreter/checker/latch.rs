/// A one-shot switch that lets a single diagnostic through per error
/// episode.
///
/// A failure deep in an expression unwinds through every grammar level
/// above it, and each of those levels would report the missing operand
/// again. The level that detects the failure arms a latch; the first level
/// that trips it reports, and every later trip is suppressed until the latch
/// is reset for the next statement.
///
/// # Example
/// ```
/// use bpl::interpreter::checker::latch::{Latch, Trip};
///
/// let mut latch = Latch::default();
/// assert_eq!(latch.trip(), Trip::Idle);
///
/// latch.arm();
/// assert_eq!(latch.trip(), Trip::Fire);
/// assert_eq!(latch.trip(), Trip::Spent);
///
/// latch.reset();
/// assert_eq!(latch.trip(), Trip::Idle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latch {
    /// Nothing has been detected in this episode.
    #[default]
    Idle,
    /// A failure was detected and its report is pending.
    Armed,
    /// The report was made; further ones are suppressed.
    Fired,
}

/// What a caller should do after tripping a [`Latch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trip {
    /// The latch was never armed; the caller handles the failure itself.
    Idle,
    /// The latch was armed and has now fired; the caller reports.
    Fire,
    /// The latch already fired; the caller stays silent.
    Spent,
}

impl Latch {
    /// Arms an idle latch. An armed or fired latch is left as it is.
    pub fn arm(&mut self) {
        if *self == Self::Idle {
            *self = Self::Armed;
        }
    }

    /// Marks the episode as reported without going through `Armed`.
    pub fn exhaust(&mut self) {
        *self = Self::Fired;
    }

    /// Advances the latch and tells the caller whether to report.
    pub fn trip(&mut self) -> Trip {
        match self {
            Self::Idle => Trip::Idle,
            Self::Armed => {
                *self = Self::Fired;
                Trip::Fire
            },
            Self::Fired => Trip::Spent,
        }
    }

    /// Starts a new episode.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
