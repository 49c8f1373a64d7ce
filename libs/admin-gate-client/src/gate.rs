//! Client gate state machine.
//!
//! ```text
//! Initial --mount--> Checking --ok--> Authorized
//!                        \--err--> Denied
//! Authorized | Denied --refresh--> Checking
//! ```
//!
//! At most one check runs at a time; a refresh issued while one is in
//! flight is skipped, not queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use secrecy::SecretString;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::GateClientError;
use crate::transport::{AdminCheck, AdminIdentity, CredentialSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Initial,
    Checking,
    Authorized,
    Denied,
}

/// Snapshot of the cached gate outcome.
#[derive(Debug, Clone)]
pub struct GateState {
    pub phase: GatePhase,
    /// Message of the last failed check.
    pub error: Option<String>,
    /// Credential of the last successful check.
    pub token: Option<SecretString>,
    pub user_id: Option<String>,
}

impl GateState {
    fn initial() -> Self {
        Self {
            phase: GatePhase::Initial,
            error: None,
            token: None,
            user_id: None,
        }
    }

    fn checking() -> Self {
        Self {
            phase: GatePhase::Checking,
            ..Self::initial()
        }
    }

    fn authorized(token: SecretString, identity: AdminIdentity) -> Self {
        Self {
            phase: GatePhase::Authorized,
            error: None,
            token: Some(token),
            user_id: Some(identity.user_id),
        }
    }

    fn denied(error: &GateClientError) -> Self {
        Self {
            phase: GatePhase::Denied,
            error: Some(error.to_string()),
            ..Self::initial()
        }
    }

    /// True until the first check completes and while a check runs.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, GatePhase::Initial | GatePhase::Checking)
    }

    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.phase == GatePhase::Authorized
    }
}

/// What a `mount` or `refresh` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Authorized,
    Denied,
    /// Another check was already running, or the gate was already mounted.
    Skipped,
}

/// Clears the in-flight flag when the check finishes or is cancelled.
///
/// A check dropped before it settled leaves the gate `Denied` rather than
/// stuck in `Checking`.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    state: &'a watch::Sender<GateState>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            info!("admin gate check cancelled");
            self.state
                .send_replace(GateState::denied(&GateClientError::Cancelled));
        }
        self.flag.store(false, Ordering::Release);
    }
}

/// Cached client-side admin gate.
///
/// Scoped to its owner: dropping the gate drops its state. Observers follow
/// transitions through [`ClientGate::subscribe`].
pub struct ClientGate {
    credentials: Arc<dyn CredentialSource>,
    check: Arc<dyn AdminCheck>,
    state: watch::Sender<GateState>,
    mounted: AtomicBool,
    in_flight: AtomicBool,
}

impl ClientGate {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialSource>, check: Arc<dyn AdminCheck>) -> Self {
        let (state, _) = watch::channel(GateState::initial());
        Self {
            credentials,
            check,
            state,
            mounted: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Run the first check. Only the first call does anything.
    pub async fn mount(&self) -> RefreshOutcome {
        if self.mounted.swap(true, Ordering::AcqRel) {
            return RefreshOutcome::Skipped;
        }
        self.refresh().await
    }

    /// Discard the cached outcome and check again.
    pub async fn refresh(&self) -> RefreshOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("admin gate check already in flight; refresh skipped");
            return RefreshOutcome::Skipped;
        }
        let mut guard = InFlight {
            flag: &self.in_flight,
            state: &self.state,
            settled: false,
        };
        self.mounted.store(true, Ordering::Release);

        self.state.send_replace(GateState::checking());

        let outcome = match self.run_check().await {
            Ok((token, identity)) => {
                debug!(user_id = %identity.user_id, "admin gate authorized");
                self.state.send_replace(GateState::authorized(token, identity));
                RefreshOutcome::Authorized
            }
            Err(e) => {
                info!(error = %e, "admin gate denied");
                self.state.send_replace(GateState::denied(&e));
                RefreshOutcome::Denied
            }
        };
        guard.settled = true;
        outcome
    }

    async fn run_check(&self) -> Result<(SecretString, AdminIdentity), GateClientError> {
        let token = self.credentials.acquire().await?;
        let identity = self.check.check(&token).await?;
        Ok((token, identity))
    }
}
