//! Root UI state and its reducer.
//!
//! Every flag the page depends on lives in [`SiteState`] and changes only through
//! [`SiteState::reduce`]. The reducer never touches the platform; it returns the
//! [`Effect`]s that the root view runs afterwards (class toggling, timers).

use super::gate::LoadingGate;
use super::nav::Section;
use super::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteState {
    pub gate: LoadingGate,
    pub theme: Theme,
    pub menu_open: bool,
    pub ack: Acknowledgement,
}

/// The transient "message sent" notice. `ticket` identifies the most recent
/// acknowledgement so that a hide timer belonging to an older one is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acknowledgement {
    pub visible: bool,
    pub ticket: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    SplashElapsed,
    ToggleTheme,
    ToggleMenu,
    Navigate(Section),
    FormAccepted,
    AckElapsed { ticket: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ApplyTheme(Theme),
    HideAckAfter { ticket: u64, after_ms: u64 },
}

impl SiteState {
    pub fn is_loading(&self) -> bool {
        !self.gate.is_ready()
    }

    /// Apply one event. `ack_ms` is the acknowledgement window used when scheduling
    /// the hide timer.
    pub fn reduce(&mut self, event: SiteEvent, ack_ms: u64) -> Vec<Effect> {
        if self.is_loading() && event != SiteEvent::SplashElapsed {
            // Nothing but the splash is on screen; no control could have sent this.
            tracing::debug!(?event, "ignoring event while splash is showing");
            return Vec::new();
        }

        match event {
            SiteEvent::SplashElapsed => {
                if self.gate.elapse() {
                    vec![Effect::ApplyTheme(self.theme)]
                } else {
                    Vec::new()
                }
            }
            SiteEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![Effect::ApplyTheme(self.theme)]
            }
            SiteEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Vec::new()
            }
            SiteEvent::Navigate(_) => {
                self.menu_open = false;
                Vec::new()
            }
            SiteEvent::FormAccepted => {
                self.ack.ticket = self.ack.ticket.wrapping_add(1);
                self.ack.visible = true;
                vec![Effect::HideAckAfter {
                    ticket: self.ack.ticket,
                    after_ms: ack_ms,
                }]
            }
            SiteEvent::AckElapsed { ticket } => {
                if ticket == self.ack.ticket {
                    self.ack.visible = false;
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACK_MS: u64 = 3_000;

    fn ready() -> SiteState {
        let mut state = SiteState::default();
        state.reduce(SiteEvent::SplashElapsed, ACK_MS);
        state
    }

    #[test]
    fn initial_state_is_loading_light_closed() {
        let state = SiteState::default();
        assert!(state.is_loading());
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.menu_open);
        assert!(!state.ack.visible);
    }

    #[test]
    fn splash_transition_happens_once() {
        let mut state = SiteState::default();
        let first = state.reduce(SiteEvent::SplashElapsed, ACK_MS);
        assert_eq!(first, vec![Effect::ApplyTheme(Theme::Light)]);
        assert!(!state.is_loading());

        let second = state.reduce(SiteEvent::SplashElapsed, ACK_MS);
        assert!(second.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn events_before_ready_are_ignored() {
        let mut state = SiteState::default();
        assert!(state.reduce(SiteEvent::ToggleTheme, ACK_MS).is_empty());
        assert!(state.reduce(SiteEvent::ToggleMenu, ACK_MS).is_empty());
        assert!(state.reduce(SiteEvent::FormAccepted, ACK_MS).is_empty());
        assert_eq!(state, SiteState::default());
    }

    #[test]
    fn theme_toggle_twice_restores_theme_and_marker() {
        let mut state = ready();
        let original = state.theme;

        let first = state.reduce(SiteEvent::ToggleTheme, ACK_MS);
        assert_eq!(first, vec![Effect::ApplyTheme(Theme::Dark)]);

        let second = state.reduce(SiteEvent::ToggleTheme, ACK_MS);
        assert_eq!(second, vec![Effect::ApplyTheme(original)]);
        assert_eq!(state.theme, original);
    }

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let mut state = ready();
        state.reduce(SiteEvent::ToggleMenu, ACK_MS);
        assert!(state.menu_open);

        state.reduce(SiteEvent::Navigate(Section::Products), ACK_MS);
        assert!(!state.menu_open);

        state.reduce(SiteEvent::Navigate(Section::Contact), ACK_MS);
        assert!(!state.menu_open);
    }

    #[test]
    fn acknowledgement_shows_then_hides() {
        let mut state = ready();
        let effects = state.reduce(SiteEvent::FormAccepted, ACK_MS);
        assert!(state.ack.visible);
        let ticket = match effects.as_slice() {
            [Effect::HideAckAfter { ticket, after_ms }] => {
                assert_eq!(*after_ms, ACK_MS);
                *ticket
            }
            other => panic!("expected a single hide timer, got {other:?}"),
        };

        state.reduce(SiteEvent::AckElapsed { ticket }, ACK_MS);
        assert!(!state.ack.visible);

        let settled = state.clone();
        state.reduce(SiteEvent::AckElapsed { ticket }, ACK_MS);
        assert_eq!(state, settled);
    }

    #[test]
    fn stale_hide_timer_does_not_hide_newer_acknowledgement() {
        let mut state = ready();
        state.reduce(SiteEvent::FormAccepted, ACK_MS);
        let stale = state.ack.ticket;
        state.reduce(SiteEvent::FormAccepted, ACK_MS);

        state.reduce(SiteEvent::AckElapsed { ticket: stale }, ACK_MS);
        assert!(state.ack.visible);

        let current = state.ack.ticket;
        state.reduce(SiteEvent::AckElapsed { ticket: current }, ACK_MS);
        assert!(!state.ack.visible);
    }
}
