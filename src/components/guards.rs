//! Route guards wired into the Leptos router.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BlockGuard` is a parent-route view that renders `<Outlet/>` for nested
//! routes; `AdminRoute` wraps a page's children. Both re-run their decision
//! whenever the auth signal changes and redirect with `replace: true`.
//! Neither writes to the store or to storage.
//!
//! Session facts live in browser storage, so no decision is made during a
//! server render: both guards render a neutral placeholder until an effect
//! marks the component as hydrated. Effects never run on the server, so a
//! server-side `Redirect` (which becomes an HTTP redirect) is never emitted.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};

use crate::config::GuardConfig;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, admin_route_outcome, block_guard_outcome};
use crate::util::storage::StorageHandle;

/// What a guard renders for the current evaluation.
#[derive(Clone)]
pub enum GuardView {
    /// Not yet hydrated; nothing has been decided.
    Pending,
    Render,
    Redirect { path: &'static str, options: NavigateOptions },
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Map a guard outcome to the view it produces.
#[must_use]
pub fn guard_view(hydrated: bool, outcome: GuardOutcome) -> GuardView {
    if !hydrated {
        return GuardView::Pending;
    }
    match outcome {
        GuardOutcome::Allow => GuardView::Render,
        GuardOutcome::Redirect(destination) => GuardView::Redirect { path: destination.path(), options: replace_options() },
    }
}

/// Signal that flips to `true` once the component runs in the browser.
fn use_hydrated() -> ReadSignal<bool> {
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move || set_hydrated.set(true));
    hydrated
}

fn render_guard_view(decision: GuardView, allowed: impl FnOnce() -> AnyView) -> AnyView {
    match decision {
        GuardView::Pending => view! { <div class="guard-pending"></div> }.into_any(),
        GuardView::Render => allowed(),
        GuardView::Redirect { path, options } => {
            log::debug!("guard redirect to {path}");
            view! { <Redirect path=path options=options/> }.into_any()
        }
    }
}

/// Sends blocked users to `/blocked` or `/out-of-service`; otherwise renders nested routes.
#[component]
pub fn BlockGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let storage = expect_context::<StorageHandle>();
    let config = expect_context::<GuardConfig>();
    let hydrated = use_hydrated();

    let outcome = Memo::new(move |_| block_guard_outcome(&auth.get(), storage.as_ref(), &config));

    move || render_guard_view(guard_view(hydrated.get(), outcome.get()), || view! { <Outlet/> }.into_any())
}

/// Renders `children` only when the stored token's role hint is `admin` or `superadmin`.
///
/// The role is decoded without signature verification; the API enforces the
/// real permission check.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let storage = expect_context::<StorageHandle>();
    let hydrated = use_hydrated();

    // Storage is not reactive; track the auth signal so login/logout re-evaluates.
    let outcome = Memo::new(move |_| {
        auth.track();
        admin_route_outcome(storage.as_ref())
    });

    move || render_guard_view(guard_view(hydrated.get(), outcome.get()), || children().into_any())
}
