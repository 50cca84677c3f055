//! Workspace user for the current session. Same degrade policy as the session lookup.

use crate::domain::{RequestCredentials, WorkspaceUser};
use crate::ports::UserDirectory;
use crate::usecases::session_service::SessionService;
use std::sync::Arc;

pub struct CurrentUserService {
    sessions: Arc<SessionService>,
    directory: Arc<dyn UserDirectory>,
}

impl CurrentUserService {
    pub fn new(sessions: Arc<SessionService>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            sessions,
            directory,
        }
    }

    /// Anonymous callers never reach the directory.
    pub async fn current_user(&self, credentials: &RequestCredentials) -> Option<WorkspaceUser> {
        let session = self.sessions.current_session(credentials).await?;
        self.directory.current_user(&session.access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::StaticAuthProvider;
    use crate::usecases::session_service::tests::sample_session;
    use std::sync::Mutex;

    struct RecordingDirectory {
        tokens: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl UserDirectory for RecordingDirectory {
        async fn current_user(&self, access_token: &str) -> Option<WorkspaceUser> {
            self.tokens.lock().unwrap().push(access_token.to_string());
            Some(WorkspaceUser {
                id: "u1".into(),
                email: None,
                display_name: Some("Ada".into()),
                organization_id: Some("org1".into()),
            })
        }
    }

    fn directory() -> Arc<RecordingDirectory> {
        Arc::new(RecordingDirectory {
            tokens: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_user_loaded_with_session_token() {
        let dir = directory();
        let sessions = Arc::new(SessionService::new(Arc::new(
            StaticAuthProvider::with_session(Some(sample_session())),
        )));
        let service = CurrentUserService::new(sessions, dir.clone());

        let user = service
            .current_user(&RequestCredentials::bearer("tok"))
            .await
            .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(*dir.tokens.lock().unwrap(), vec!["tok".to_string()]);
    }

    #[tokio::test]
    async fn test_anonymous_skips_directory() {
        let dir = directory();
        let sessions = Arc::new(SessionService::new(Arc::new(
            StaticAuthProvider::with_session(None),
        )));
        let service = CurrentUserService::new(sessions, dir.clone());

        assert!(
            service
                .current_user(&RequestCredentials::anonymous())
                .await
                .is_none()
        );
        assert!(dir.tokens.lock().unwrap().is_empty());
    }
}
