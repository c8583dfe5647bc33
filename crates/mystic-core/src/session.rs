//! Session controller: the reveal state machine.
//!
//! `SessionController` owns the question text, the shaking flag, and the
//! revealed fortune. A trigger arms a single deadline `REVEAL_DELAY` in the
//! future; the caller's event loop feeds the current time into [`poll`] and
//! the fortune is picked once the deadline has passed. Time is always passed in
//! explicitly so the controller never reads a clock on its own.
//!
//! [`poll`]: SessionController::poll

use std::time::{Duration, Instant};

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::OrbConfig;
use crate::fortune::random_fortune;

/// How long the orb shakes before revealing a fortune.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// The mutable record owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The question as typed so far.
    pub question: String,
    /// True only while a reveal is pending.
    pub is_revealing: bool,
    /// The fortune currently shown, if any.
    pub revealed_fortune: Option<&'static str>,
}

impl SessionState {
    /// Whether the question contains anything besides whitespace.
    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }
}

/// Where the session is in the reveal cycle. Derived from [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No question and nothing shown.
    Idle,
    /// A question is present and the orb is ready.
    AwaitingInput,
    /// The orb is shaking; triggers are ignored.
    Revealing,
    /// A fortune is shown; the orb can be shaken again.
    Revealed,
}

/// Why a trigger had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The question is empty or whitespace only.
    BlankQuestion,
    /// A reveal is already pending.
    AlreadyRevealing,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankQuestion => write!(f, "blank question"),
            Self::AlreadyRevealing => write!(f, "already revealing"),
        }
    }
}

/// Result of a trigger request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A reveal cycle started; the fortune is due at `due`.
    Started {
        /// When the pending reveal fires.
        due: Instant,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// A reveal waiting for its deadline.
#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    due: Instant,
}

/// Drives the reveal cycle and is the sole writer of [`SessionState`].
pub struct SessionController<R: Rng = StdRng> {
    state: SessionState,
    pending: Option<PendingReveal>,
    rng: R,
}

impl SessionController<StdRng> {
    /// Create a controller whose random source is described by `config`.
    pub fn from_config(config: &OrbConfig) -> Self {
        Self::with_rng(config.rng())
    }
}

impl<R: Rng> SessionController<R> {
    /// Create a controller that draws fortunes from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SessionState::default(),
            pending: None,
            rng,
        }
    }

    /// Get the full session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the question text.
    pub fn question(&self) -> &str {
        &self.state.question
    }

    /// Whether a reveal is pending.
    pub fn is_revealing(&self) -> bool {
        self.state.is_revealing
    }

    /// The fortune currently shown.
    pub fn revealed_fortune(&self) -> Option<&'static str> {
        self.state.revealed_fortune
    }

    /// When the pending reveal fires, if one is armed.
    pub fn reveal_due(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Whether a trigger right now would start a reveal.
    pub fn can_trigger(&self) -> bool {
        self.state.has_question() && !self.state.is_revealing
    }

    /// Current phase of the reveal cycle.
    pub fn phase(&self) -> Phase {
        if self.state.is_revealing {
            Phase::Revealing
        } else if !self.state.has_question() {
            Phase::Idle
        } else if self.state.revealed_fortune.is_some() {
            Phase::Revealed
        } else {
            Phase::AwaitingInput
        }
    }

    /// Replace the question text.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.state.question = text.into();
    }

    /// Request a reveal at time `now`.
    ///
    /// Clears the shown fortune and arms the deadline. Ignored while a reveal
    /// is pending or when the question is blank.
    pub fn trigger(&mut self, now: Instant) -> TriggerOutcome {
        let reason = if self.state.is_revealing {
            Some(IgnoreReason::AlreadyRevealing)
        } else if !self.state.has_question() {
            Some(IgnoreReason::BlankQuestion)
        } else {
            None
        };
        if let Some(reason) = reason {
            tracing::debug!(%reason, "trigger ignored");
            return TriggerOutcome::Ignored(reason);
        }

        let due = now + REVEAL_DELAY;
        self.state.revealed_fortune = None;
        self.state.is_revealing = true;
        self.pending = Some(PendingReveal { due });
        tracing::debug!(question_len = self.state.question.len(), "reveal started");
        TriggerOutcome::Started { due }
    }

    /// Complete the pending reveal if its deadline has passed.
    ///
    /// Returns the newly revealed fortune, or `None` when nothing fired.
    pub fn poll(&mut self, now: Instant) -> Option<&'static str> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;
        let (index, fortune) = random_fortune(&mut self.rng);
        self.state.revealed_fortune = Some(fortune);
        self.state.is_revealing = false;
        tracing::debug!(index, "fortune revealed");
        Some(fortune)
    }

    /// Time left before the pending reveal fires.
    pub fn time_until_reveal(&self, now: Instant) -> Option<Duration> {
        self.reveal_due()
            .map(|due| due.saturating_duration_since(now))
    }

    /// Tear down the session, discarding any pending reveal.
    pub fn shutdown(&mut self) {
        if self.pending.take().is_some() {
            self.state.is_revealing = false;
            tracing::warn!("session torn down mid-reveal; pending fortune discarded");
        }
    }
}

impl<R: Rng> Drop for SessionController<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
