//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guards::{AdminRoute, BlockGuard};
use crate::config::{ApiConfig, GuardConfig};
use crate::pages::{
    about::AboutPage,
    admin_courses::AllCoursesPage,
    course::{EnglishCoursePage, VideoEditingCoursePage},
    home::HomePage,
    login::LoginPage,
    status::{BlockedPage, OutOfServicePage},
};
use crate::state::auth::AuthState;
use crate::util::storage::default_storage;

/// Root application component.
///
/// Provides the auth store, persistent storage backend, and configuration,
/// then mounts the route table. Course pages and the admin area sit behind
/// `BlockGuard`; the admin area is additionally wrapped in `AdminRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(default_storage());
    provide_context(GuardConfig::from_build_env());
    provide_context(ApiConfig::from_build_env());

    view! {
        <Title text="CourseHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("blocked") view=BlockedPage/>
                <Route path=StaticSegment("out-of-service") view=OutOfServicePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <ParentRoute path=StaticSegment("") view=BlockGuard>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("courses"), StaticSegment("english")) view=EnglishCoursePage/>
                    <Route
                        path=(StaticSegment("courses"), StaticSegment("video-editing"))
                        view=VideoEditingCoursePage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("courses"))
                        view=|| view! { <AdminRoute><AllCoursesPage/></AdminRoute> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
