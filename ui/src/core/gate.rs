//! Loading gate: the splash screen shown before the page mounts.
//!
//! Two states and one transition. The timer driving the transition lives in the root
//! view (see `views::site`); this type only records whether it has fired.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingGate {
    #[default]
    Splash,
    Ready,
}

impl LoadingGate {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Move to `Ready`. Returns `true` only for the call that performed the transition.
    pub fn elapse(&mut self) -> bool {
        match self {
            Self::Splash => {
                *self = Self::Ready;
                true
            }
            Self::Ready => false,
        }
    }
}
