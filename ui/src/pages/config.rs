//! Configuration view

use super::PageHeading;
use crate::components::{Banner, LoadingDots, PageLoading};
use crate::fetch::{self, status_notice, Notice, Severity};
use crate::state::AppState;
use crate::types::{ConfigStatus, Credentials};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the success banner stays up
const SUCCESS_MS: u32 = 3_000;

const STEPS: [&str; 4] = [
    "Go to LinkedIn Developer Portal and create a new application",
    "Configure your application with the required permissions",
    "Generate your Client ID and Client Secret",
    "Use the OAuth 2.0 flow to obtain an Access Token",
];

#[component]
pub fn ConfigPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let client_id = RwSignal::new(String::new());
    let client_secret = RwSignal::new(String::new());
    let access_token = RwSignal::new(String::new());
    let status = RwSignal::new(None::<ConfigStatus>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let is_loading = RwSignal::new(true);
    let is_busy = RwSignal::new(false);

    let fill = move |creds: Credentials| {
        client_id.set(creds.client_id);
        client_secret.set(creds.client_secret);
        access_token.set(creds.access_token);
    };

    let flash_success = move || {
        success.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_MS).await;
            success.set(false);
        });
    };

    // Load saved credentials on mount
    Effect::new(move |_| {
        let backend = state.backend();
        spawn_local(async move {
            let snapshot = fetch::load_config(&backend).await;
            fill(snapshot.credentials);
            status.set(snapshot.status);
            is_loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(false);

        let creds = Credentials {
            client_id: client_id.get_untracked(),
            client_secret: client_secret.get_untracked(),
            access_token: access_token.get_untracked(),
        };
        let backend = state.backend();
        is_busy.set(true);

        spawn_local(async move {
            match fetch::save_config(&backend, &creds).await {
                Ok(new_status) => {
                    if new_status.is_some() {
                        status.set(new_status);
                    }
                    flash_success();
                }
                Err(e) => error.set(Some(e)),
            }
            is_busy.set(false);
        });
    };

    let on_clear = move |_| {
        error.set(None);
        success.set(false);
        let backend = state.backend();
        is_busy.set(true);

        spawn_local(async move {
            match fetch::clear_config(&backend).await {
                Ok(new_status) => {
                    fill(Credentials::default());
                    if new_status.is_some() {
                        status.set(new_status);
                    }
                    flash_success();
                }
                Err(e) => error.set(Some(e)),
            }
            is_busy.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            <PageHeading
                title="LinkedIn Configuration"
                subtitle="Configure your LinkedIn API credentials to access your profile data, posts, and articles."
            />

            <Show when=move || !is_loading.get() fallback=|| view! { <PageLoading /> }>
                <div class="space-y-3 mb-6">
                    {move || status.get().map(|s| view! { <Banner notice={status_notice(&s)} /> })}
                    {move || error.get().map(|e| view! { <Banner notice={Notice::new(Severity::Error, e)} /> })}
                    <Show when=move || success.get()>
                        <Banner notice={Notice::new(Severity::Success, fetch::UPDATED)} />
                    </Show>
                </div>

                <form on:submit=on_submit class="card space-y-5">
                    <Field label="Client ID" value=client_id input_type="text" />
                    <Field label="Client Secret" value=client_secret input_type="password" />

                    <label class="block">
                        <span class="block text-sm font-medium mb-1">"Access Token"</span>
                        <textarea
                            class="input w-full"
                            rows="3"
                            required
                            prop:value=move || access_token.get()
                            on:input=move |ev| access_token.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="flex flex-wrap gap-3">
                        <button type="submit" class="btn btn-primary" disabled=move || is_busy.get()>
                            <Show when=move || is_busy.get() fallback=|| "Save Configuration">
                                <LoadingDots />
                            </Show>
                        </button>
                        <button
                            type="button"
                            class="btn btn-ghost"
                            disabled=move || is_busy.get()
                            on:click=on_clear
                        >
                            "Clear Configuration"
                        </button>
                    </div>
                </form>
            </Show>

            <section class="card mt-8">
                <h2 class="text-lg font-semibold mb-3">"How to Get LinkedIn API Credentials"</h2>
                <ol class="list-decimal list-inside space-y-2 text-sm">
                    {STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>
                <a
                    href="https://www.linkedin.com/developers/apps"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="link text-sm inline-block mt-4"
                >
                    "LinkedIn Developer Portal"
                </a>
            </section>
        </div>
    }
}

/// Single-line required input bound to a signal
#[component]
fn Field(label: &'static str, value: RwSignal<String>, input_type: &'static str) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium mb-1">{label}</span>
            <input
                type=input_type
                class="input w-full"
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
