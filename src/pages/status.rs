//! Terminal pages for restricted accounts.

use leptos::prelude::*;

/// Shown when the account has `isBlocked` set.
#[component]
pub fn BlockedPage() -> impl IntoView {
    view! {
        <div class="status-page status-page--blocked">
            <h1>"Account restricted"</h1>
            <p>"Your access to courses has been restricted. Contact support for details."</p>
        </div>
    }
}

/// Shown when the account has `isBlockedAll` set.
#[component]
pub fn OutOfServicePage() -> impl IntoView {
    view! {
        <div class="status-page status-page--out-of-service">
            <h1>"Service unavailable"</h1>
            <p>"The service is not available for this account."</p>
        </div>
    }
}
