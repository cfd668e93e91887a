//! In-page alert banners

use crate::fetch::{Notice, Severity};
use leptos::prelude::*;

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "alert alert-info",
        Severity::Warning => "alert alert-warning",
        Severity::Error => "alert alert-error",
        Severity::Success => "alert alert-success",
    }
}

#[component]
pub fn Banner(notice: Notice) -> impl IntoView {
    let configure_link = notice.configure_link;

    view! {
        <div class={severity_class(notice.severity)} role="alert">
            <span class="flex-1">{notice.message}</span>
            <Show when=move || configure_link>
                <a href="/config" class="btn btn-ghost text-sm">"Configure Now"</a>
            </Show>
        </div>
    }
}

/// Stack of banners that follows a signal
#[component]
pub fn Notices(#[prop(into)] notices: Signal<Vec<Notice>>) -> impl IntoView {
    view! {
        <div class="space-y-3 mb-6">
            {move || {
                notices
                    .get()
                    .into_iter()
                    .map(|notice| view! { <Banner notice=notice /> })
                    .collect_view()
            }}
        </div>
    }
}
