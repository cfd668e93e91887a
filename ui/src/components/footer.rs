use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-[var(--border-default)] py-6 mt-12 text-xs text-[var(--text-muted)]">
            <div class="flex flex-wrap items-center justify-center gap-2 mb-2">
                <a href="https://about.linkedin.com/" target="_blank" rel="noopener noreferrer" class="hover:underline">"About"</a>
                <span>"|"</span>
                <a href="https://linkedin.com/help/linkedin" target="_blank" rel="noopener noreferrer" class="hover:underline">"Help Center"</a>
                <span>"|"</span>
                <span>"Privacy And Terms"</span>
            </div>
            <p class="text-center">
                <span class="font-semibold">"LinkedIn"</span>
                {format!(" Corporation © {}", year)}
            </p>
        </footer>
    }
}
