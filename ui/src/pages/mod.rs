//! Routed views

pub mod analytics;
pub mod articles;
pub mod config;
pub mod posts;
pub mod profile;

use crate::fetch::{banners, load_view, Domain, Notice, ViewState};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Loads a domain on mount and hands back its state plus a reload action.
pub fn use_view<D: Domain + 'static>() -> (RwSignal<ViewState<D::Data>>, impl Fn() + Copy + 'static)
{
    let state = expect_context::<AppState>();
    let view_state = RwSignal::new(ViewState::Loading);

    let load = move || {
        view_state.set(ViewState::Loading);
        let backend = state.backend();
        spawn_local(async move {
            view_state.set(load_view::<D, _>(&backend).await);
        });
    };

    Effect::new(move |_| load());

    (view_state, load)
}

/// Banners derived from a view's state
pub fn view_banners<D: Domain + 'static>(view_state: RwSignal<ViewState<D::Data>>) -> Signal<Vec<Notice>> {
    Signal::derive(move || view_state.with(|s| banners::<D>(s)))
}

/// `1234567` → `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Title, subtitle and an optional refresh action
#[component]
pub fn PageHeading(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional, into)] on_refresh: Option<Callback<()>>,
    #[prop(default = "Refresh")] refresh_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row sm:items-end justify-between gap-4 mb-6">
            <div>
                <h1 class="text-3xl font-bold text-[var(--brand)]">{title}</h1>
                <p class="text-[var(--text-muted)] mt-1">{subtitle}</p>
            </div>
            {on_refresh.map(|cb| view! {
                <button class="btn btn-ghost" on:click=move |_| cb.run(())>
                    "⟳ " {refresh_label}
                </button>
            })}
        </div>
    }
}

/// Call to action when a configured backend has nothing to show
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    message: &'static str,
    action_label: &'static str,
    action_href: &'static str,
) -> impl IntoView {
    let external = action_href.starts_with("http");

    view! {
        <div class="card max-w-2xl mx-auto mt-8 py-12 text-center">
            <div class="text-6xl mb-4">{icon}</div>
            <h2 class="text-xl font-semibold text-[var(--text-muted)] mb-2">{title}</h2>
            <p class="text-[var(--text-muted)] mb-6">{message}</p>
            <a
                href=action_href
                target=if external { Some("_blank") } else { None }
                rel=if external { Some("noopener noreferrer") } else { None }
                class="btn btn-primary"
            >
                {action_label}
            </a>
        </div>
    }
}

/// Likes, comments and shares chips
#[component]
pub fn EngagementChips(likes: u64, comments: u64, shares: u64) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            <span class="chip">"👍 " {format!("{} Likes", group_thousands(likes))}</span>
            <span class="chip">"💬 " {format!("{} Comments", group_thousands(comments))}</span>
            <span class="chip">"🔁 " {format!("{} Shares", group_thousands(shares))}</span>
        </div>
    }
}
