//! Header component

use crate::nav::{page_title, NAV_ITEMS};
use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

/// Sticky top bar with the nav links and the active page title
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let pathname = use_location().pathname;

    let title = Memo::new(move |_| page_title(&pathname.get()));

    view! {
        <Title text=move || format!("{} | LinkedIn Data Analytics", title.get()) />
        <header class="header h-14 sticky top-0 z-40">
            <div class="h-full max-w-6xl mx-auto px-4 flex items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    // Drawer toggle on small viewports
                    <button
                        class="btn btn-ghost lg:hidden"
                        aria-label="Open navigation"
                        on:click=move |_| state.drawer_open.update(|open| *open = !*open)
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                            <path fill-rule="evenodd" d="M3 5h14a1 1 0 010 2H3a1 1 0 010-2zm0 4h14a1 1 0 010 2H3a1 1 0 010-2zm0 4h14a1 1 0 010 2H3a1 1 0 010-2z" clip-rule="evenodd" />
                        </svg>
                    </button>

                    <a href="/" class="logo hover:opacity-80 transition-opacity">
                        <span class="logo-mark">"in"</span>
                        <div>
                            <h1 class="text-base font-semibold text-[var(--brand)]">"LinkedIn Data Analytics"</h1>
                            <p class="text-xs text-[var(--text-muted)] -mt-0.5">{move || title.get()}</p>
                        </div>
                    </a>
                </div>

                <nav class="hidden lg:flex items-center gap-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            view! {
                                <a
                                    href=path
                                    class=move || {
                                        if pathname.get() == path {
                                            "btn btn-ghost nav-active"
                                        } else {
                                            "btn btn-ghost"
                                        }
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
