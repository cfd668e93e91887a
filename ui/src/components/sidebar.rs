//! Sidebar component

use crate::nav::NAV_ITEMS;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Navigation drawer for small viewports
#[component]
pub fn Sidebar(
    /// Whether the drawer is open
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar fixed inset-y-0 left-0 z-40 w-72 flex flex-col lg:hidden
             transform transition-transform duration-300 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-4 flex items-center gap-2 border-b border-[var(--border-default)]">
                <span class="logo-mark">"in"</span>
                <h2 class="text-lg font-semibold text-[var(--brand)]">"LinkedIn Analytics"</h2>
            </div>

            <nav class="flex-1 overflow-y-auto p-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <a
                                href=path
                                on:click=move |_| is_open.set(false)
                                class=move || {
                                    if pathname.get() == path {
                                        "sidebar-item active"
                                    } else {
                                        "sidebar-item"
                                    }
                                }
                            >
                                <span class="text-lg">{item.icon}</span>
                                <span class="font-medium">{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
