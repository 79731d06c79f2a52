use contracts::system::auth::{PermissionAction, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored session is being validated against the auth service.
    pub restoring: bool,
}

impl AuthState {
    /// No user means no permissions.
    pub fn can(&self, action: PermissionAction, resource: &str) -> bool {
        self.user_info
            .as_ref()
            .map(|u| u.can(action, resource))
            .unwrap_or(false)
    }
}

async fn restore_session(access_token: String) -> Option<AuthState> {
    // Validate token by fetching current user
    match api::get_current_user(&access_token).await {
        Ok(user_info) => Some(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        }),
        Err(e) => {
            log::debug!("stored access token rejected: {}", e);
            let refresh_token = storage::get_refresh_token()?;
            let response = api::refresh_token(refresh_token).await.ok()?;
            storage::save_access_token(&response.access_token);

            let user_info = api::get_current_user(&response.access_token).await.ok()?;
            Some(AuthState {
                access_token: Some(response.access_token),
                user_info: Some(user_info),
                restoring: false,
            })
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored_token = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored_token.is_some(),
        ..AuthState::default()
    });

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        let Some(access_token) = stored_token.clone() else {
            return;
        };
        spawn_local(async move {
            match restore_session(access_token).await {
                Some(state) => {
                    log::info!(
                        "session restored for {}",
                        state.user_info.as_ref().map(|u| u.username.as_str()).unwrap_or("-")
                    );
                    set_auth_state.set(state);
                }
                None => {
                    log::warn!("stored session is no longer valid");
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
