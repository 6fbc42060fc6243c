use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::pkce::PkcePair;
use crate::constants::OAUTH_FLOW_TTL_SECS;

#[derive(Debug)]
struct PendingFlow {
    verifier: String,
    started_at: i64,
}

/// OAuth sign-ins awaiting their callback, keyed by flow id
#[derive(Debug, Clone, Default)]
pub struct OAuthFlows {
    pending: Arc<Mutex<HashMap<Uuid, PendingFlow>>>,
}

impl OAuthFlows {
    /// Register a new flow and return its id with the PKCE pair
    pub fn start(&self) -> (Uuid, PkcePair) {
        let id = Uuid::new_v4();
        let pkce = PkcePair::generate();
        let now = Utc::now().timestamp();

        let mut pending = self.lock();
        pending.retain(|_, flow| now - flow.started_at <= OAUTH_FLOW_TTL_SECS);
        pending.insert(
            id,
            PendingFlow {
                verifier: pkce.verifier.clone(),
                started_at: now,
            },
        );

        (id, pkce)
    }

    /// Consume a flow, returning its verifier if it exists and has not expired
    pub fn take(&self, id: Uuid) -> Option<String> {
        let flow = self.lock().remove(&id)?;
        let age = Utc::now().timestamp() - flow.started_at;
        if age > OAUTH_FLOW_TTL_SECS {
            tracing::warn!("OAuth flow {} expired after {} seconds", id, age);
            return None;
        }
        Some(flow.verifier)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, PendingFlow>> {
        // A poisoned map only holds verifiers; keep serving it
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}
