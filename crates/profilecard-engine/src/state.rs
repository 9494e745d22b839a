use std::collections::BTreeSet;
use std::fmt;

use profilecard_types::{FetchError, ThemeMode, UserProfile};
use serde::{Deserialize, Serialize};

/// Sequence number handed out for every fetch, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens when a fetch settles while a newer one is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Only the most recently issued fetch may touch the state.
    #[default]
    LatestWins,
    /// Every settlement is applied in settle order; a stale response can
    /// overwrite a fresher one.
    LastSettledWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Loading,
    Loaded,
    FailedIdle,
}

/// Result of feeding a fetch outcome back into the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// New profile installed, loading cleared
    Applied,
    /// Loading cleared, previous profile kept
    Failed(FetchError),
    /// A newer fetch was issued; state untouched
    Superseded(Option<FetchError>),
    /// Ticket was never issued or already settled; state untouched
    Unknown,
}

impl Settlement {
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Settlement::Failed(err) => Some(err),
            Settlement::Superseded(err) => err.as_ref(),
            Settlement::Applied | Settlement::Unknown => None,
        }
    }

    pub fn changed_state(&self) -> bool {
        matches!(self, Settlement::Applied | Settlement::Failed(_))
    }
}

/// The three pieces of client state plus the bookkeeping for in-flight fetches.
#[derive(Debug, Clone)]
pub struct ProfileState {
    profile: Option<UserProfile>,
    loading: bool,
    theme: ThemeMode,
    policy: OverlapPolicy,
    last_issued: u64,
    in_flight: BTreeSet<FetchTicket>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new(ThemeMode::default(), OverlapPolicy::default())
    }
}

impl ProfileState {
    pub fn new(theme: ThemeMode, policy: OverlapPolicy) -> Self {
        Self {
            profile: None,
            loading: false,
            theme,
            policy,
            last_issued: 0,
            in_flight: BTreeSet::new(),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Most recently issued ticket, if any fetch was ever started.
    pub fn latest_ticket(&self) -> Option<FetchTicket> {
        (self.last_issued > 0).then_some(FetchTicket(self.last_issued))
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.profile.is_some() {
            Phase::Loaded
        } else if self.last_issued == 0 {
            Phase::Initial
        } else {
            Phase::FailedIdle
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle();
        self.theme
    }

    /// Mark a fetch as started and return the ticket its outcome must carry.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_issued += 1;
        let ticket = FetchTicket(self.last_issued);
        self.in_flight.insert(ticket);
        self.loading = true;
        ticket
    }

    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<UserProfile, FetchError>,
    ) -> Settlement {
        if !self.in_flight.remove(&ticket) {
            return Settlement::Unknown;
        }

        if self.policy == OverlapPolicy::LatestWins && ticket.0 != self.last_issued {
            return Settlement::Superseded(outcome.err());
        }

        self.loading = false;
        match outcome {
            Ok(profile) => {
                self.profile = Some(profile);
                Settlement::Applied
            }
            Err(err) => Settlement::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str) -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "name": { "first": first, "last": "Test" },
            "login": { "username": first.to_lowercase() },
            "email": "t@example.com",
            "phone": "1",
            "location": { "city": "C", "country": "K" },
            "dob": { "date": "2000-01-01T00:00:00Z" },
            "picture": { "large": "https://example.com/p.jpg" }
        }))
        .unwrap()
    }

    #[test]
    fn starts_initial_and_idle() {
        let state = ProfileState::default();
        assert_eq!(state.phase(), Phase::Initial);
        assert!(!state.is_loading());
        assert!(state.profile().is_none());
        assert_eq!(state.latest_ticket(), None);
    }

    #[test]
    fn success_installs_profile() {
        let mut state = ProfileState::default();
        let ticket = state.begin_fetch();
        assert_eq!(state.phase(), Phase::Loading);

        let settlement = state.settle(ticket, Ok(profile("Ada")));
        assert_eq!(settlement, Settlement::Applied);
        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.profile().unwrap().name.first, "Ada");
    }

    #[test]
    fn failure_without_profile_is_failed_idle() {
        let mut state = ProfileState::default();
        let ticket = state.begin_fetch();

        let settlement = state.settle(ticket, Err(FetchError::EmptyResults));
        assert_eq!(settlement.error(), Some(&FetchError::EmptyResults));
        assert_eq!(state.phase(), Phase::FailedIdle);
        assert!(!state.is_loading());
    }

    #[test]
    fn settling_twice_is_ignored() {
        let mut state = ProfileState::default();
        let ticket = state.begin_fetch();
        state.settle(ticket, Ok(profile("Ada")));

        let again = state.settle(ticket, Ok(profile("Grace")));
        assert_eq!(again, Settlement::Unknown);
        assert_eq!(state.profile().unwrap().name.first, "Ada");
    }

    #[test]
    fn tickets_increase() {
        let mut state = ProfileState::default();
        let a = state.begin_fetch();
        let b = state.begin_fetch();
        assert!(b > a);
        assert_eq!(a.to_string(), "#1");
        assert_eq!(state.latest_ticket(), Some(b));
        assert_eq!(state.in_flight(), 2);
    }

    #[test]
    fn overlap_policy_parses_kebab_case() {
        let policy: OverlapPolicy = serde_json::from_str("\"last-settled-wins\"").unwrap();
        assert_eq!(policy, OverlapPolicy::LastSettledWins);
    }
}
