use contracts::system::auth::PermissionAction;
use leptos::prelude::*;
use thaw::*;

use super::context::{use_auth, AuthState};
use crate::shared::icons::icon;

/// What a permission-gated area shows for the current session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Stored session still being validated
    Restoring,
    Denied,
    Allowed,
}

impl Gate {
    pub fn resolve(state: &AuthState, action: PermissionAction, resource: &str) -> Self {
        if state.can(action, resource) {
            Gate::Allowed
        } else if state.restoring {
            Gate::Restoring
        } else {
            Gate::Denied
        }
    }
}

/// Placeholder shown instead of a page the user may not see
#[component]
pub fn NoPermission(
    /// What the user tried to do, e.g. "view invoices"
    #[prop(into)]
    resource_text: String,
) -> impl IntoView {
    view! {
        <div class="no-permission" role="alert">
            {icon("lock")}
            <p class="no-permission__text">
                {format!("You need additional permissions to {}", resource_text)}
            </p>
        </div>
    }
}

/// Renders children only if the signed-in user holds the permission.
///
/// Children are not created at all otherwise, so they issue no requests.
#[component]
pub fn RequirePermission(
    action: PermissionAction,
    #[prop(into)] resource: String,
    #[prop(into)] resource_text: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let gate = Memo::new(move |_| auth_state.with(|s| Gate::resolve(s, action, &resource)));

    move || match gate.get() {
        Gate::Allowed => children().into_any(),
        Gate::Restoring => view! {
            <Flex justify=FlexJustify::Center align=FlexAlign::Center style="padding: 40px;">
                <Spinner />
            </Flex>
        }
        .into_any(),
        Gate::Denied => view! { <NoPermission resource_text=resource_text.clone() /> }.into_any(),
    }
}
