use sqlx::PgPool;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::AuthUser;
use crate::constants::AUTH_EVENT_CAPACITY;
use crate::db::profiles;
use crate::models::NewProfile;

/// Session change notification
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(AuthUser),
    SignedOut(Uuid),
}

/// Broadcast bus for session changes
#[derive(Debug, Clone)]
pub struct AuthEvents {
    tx: broadcast::Sender<AuthEvent>,
}

impl Default for AuthEvents {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(AUTH_EVENT_CAPACITY);
        Self { tx }
    }
}

impl AuthEvents {
    pub fn publish(&self, event: AuthEvent) {
        // No subscribers is fine; events are advisory
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.tx.subscribe()
    }
}

/// Create a profile row the first time a user signs in.
///
/// Runs until the event bus closes. Database failures are logged and the
/// sign-in is not affected.
pub fn spawn_profile_provisioner(events: &AuthEvents, pool: PgPool) -> JoinHandle<()> {
    let mut rx = events.subscribe();

    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(AuthEvent::SignedIn(user)) => {
                    let profile = NewProfile::for_user(&user);
                    match profiles::ensure(&pool, &profile).await {
                        Ok(true) => tracing::info!("Created profile for user {}", user.id),
                        Ok(false) => {}
                        Err(e) => tracing::error!("Error managing user profile: {:?}", e),
                    }
                }
                Ok(AuthEvent::SignedOut(user_id)) => {
                    tracing::debug!("User {} signed out", user_id);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Profile provisioner lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_events_in_order() {
        let events = AuthEvents::default();
        let mut rx = events.subscribe();

        let user = AuthUser {
            id: Uuid::new_v4(),
            email: Some("cook@example.com".into()),
            user_metadata: serde_json::Value::Null,
        };
        events.publish(AuthEvent::SignedIn(user.clone()));
        events.publish(AuthEvent::SignedOut(user.id));

        assert_eq!(rx.recv().await.unwrap(), AuthEvent::SignedIn(user.clone()));
        assert_eq!(rx.recv().await.unwrap(), AuthEvent::SignedOut(user.id));
    }

    #[test]
    fn test_publish_without_subscribers() {
        AuthEvents::default().publish(AuthEvent::SignedOut(Uuid::new_v4()));
    }
}
