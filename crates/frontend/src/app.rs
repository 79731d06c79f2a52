use contracts::domain::a002_organization::aggregate::Organization;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

use crate::domain::a025_stripe_invoice::ui::list::InvoicesSettingsPage;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::context::AuthProvider;

/// Organization selection carried in the page URL:
/// `?org=acme&name=Acme%20Inc&customer=cus_123`
#[derive(Debug, Default, Deserialize)]
struct OrganizationQuery {
    #[serde(default)]
    org: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    customer: String,
}

fn organization_from_query(search: &str) -> Organization {
    let query: OrganizationQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    Organization::new(query.org, query.name, query.customer)
}

fn current_organization() -> Organization {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    organization_from_query(&search)
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification queue to the whole app via context.
    provide_context(NotificationService::new());

    let organization = RwSignal::new(current_organization());

    // Back/forward navigation may switch the organization
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        let next = current_organization();
        if organization.with_untracked(|o| *o != next) {
            log::debug!("organization changed to {:?}", next.slug);
            organization.set(next);
        }
    });

    view! {
        <AuthProvider>
            <div class="app">
                <div class="app__header">
                    <h2 class="app__title">
                        {move || organization.with(|o| o.display_name().to_string())}
                    </h2>
                </div>
                <InvoicesSettingsPage organization=organization />
            </div>
            <NotificationHost />
        </AuthProvider>
    }
}
