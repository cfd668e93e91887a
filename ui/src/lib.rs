//! Linkboard UI - Leptos dashboard for LinkedIn profile data
//!
//! Five routed views (Profile, Posts, Articles, Analytics, Configuration)
//! backed by the Linkboard server, each falling back to bundled sample data
//! when the server is unconfigured or unreachable.

pub mod api;
pub mod components;
pub mod fetch;
pub mod nav;
pub mod pages;
pub mod sample;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use components::{Footer, Header, Sidebar};
use pages::{
    analytics::AnalyticsPage, articles::ArticlesPage, config::ConfigPage, posts::PostsPage,
    profile::ProfilePage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Header, drawer, routed content and footer
#[component]
fn Shell() -> impl IntoView {
    let state = expect_context::<AppState>();
    let pathname = use_location().pathname;

    // Close the drawer whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        state.drawer_open.set(false);
    });

    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-page)] text-[var(--text-primary)]">
            <Header />
            <Sidebar is_open=state.drawer_open />
            <main class="flex-1">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProfilePage />
                    <Route path=path!("/posts") view=PostsPage />
                    <Route path=path!("/articles") view=ArticlesPage />
                    <Route path=path!("/analytics") view=AnalyticsPage />
                    <Route path=path!("/config") view=ConfigPage />
                </Routes>
            </main>
            <Footer />
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[var(--text-muted)] mb-4">"404"</h1>
                <p class="text-xl text-[var(--text-muted)] mb-8">"Page not found"</p>
                <a href="/" class="btn btn-primary">"Go Home"</a>
            </div>
        </div>
    }
}
