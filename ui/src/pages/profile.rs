//! Profile view

use super::{use_view, view_banners, EmptyState, PageHeading};
use crate::components::{Notices, Skeleton};
use crate::fetch::{ProfileDomain, ViewState};
use crate::types::{date_range, Profile};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (view_state, reload) = use_view::<ProfileDomain>();

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <PageHeading
                title="LinkedIn Profile"
                subtitle="Your professional summary, experience and education"
                on_refresh={Callback::new(move |_: ()| reload())}
            />
            <Notices notices={view_banners::<ProfileDomain>(view_state)} />

            {move || match view_state.get() {
                ViewState::Loading => view! { <ProfileSkeleton /> }.into_any(),
                ViewState::Empty => view! {
                    <p class="text-center text-[var(--text-muted)]">"No profile data available."</p>
                    <EmptyState
                        icon="👋"
                        title="Welcome to LinkedIn Analytics"
                        message="Get started by configuring your LinkedIn credentials to view your profile data."
                        action_label="Configure LinkedIn"
                        action_href="/config"
                    />
                }
                .into_any(),
                ViewState::Failed(_) => ().into_any(),
                ViewState::Real(profile) | ViewState::Sample { data: profile, .. } => {
                    view! { <ProfileDetails profile=profile /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileSkeleton() -> impl IntoView {
    view! {
        <div class="card space-y-4">
            <div class="flex items-center gap-4">
                <Skeleton class="w-24 h-24 rounded-full" />
                <div class="flex-1 space-y-2">
                    <Skeleton class="h-6 w-1/2" />
                    <Skeleton class="h-4 w-1/3" />
                </div>
            </div>
            <Skeleton class="h-20 w-full" />
        </div>
    }
}

#[component]
fn ProfileDetails(profile: Profile) -> impl IntoView {
    let name = profile.full_name();
    let alt = name.clone();
    let initials = profile.initials();
    let about = profile.about;

    view! {
        <div class="space-y-6">
            <section class="card flex flex-col sm:flex-row items-center sm:items-start gap-6">
                {match profile.profile_picture {
                    Some(src) => view! {
                        <img src=src alt=alt class="w-24 h-24 rounded-full object-cover" />
                    }
                    .into_any(),
                    None => view! {
                        <div class="avatar w-24 h-24 text-3xl">{initials}</div>
                    }
                    .into_any(),
                }}
                <div class="text-center sm:text-left">
                    <h2 class="text-2xl font-bold">{name}</h2>
                    <p class="text-lg mt-1">{profile.headline}</p>
                    <p class="text-sm text-[var(--text-muted)] mt-1">{profile.location}</p>
                </div>
            </section>

            {(!about.is_empty()).then(|| view! {
                <Section title="About">
                    <p class="whitespace-pre-line">{about}</p>
                </Section>
            })}

            <Section title="Experience">
                <ul class="space-y-4">
                    {profile
                        .experience
                        .into_iter()
                        .map(|exp| view! {
                            <li class="border-l-2 border-[var(--brand)] pl-4">
                                <h4 class="font-semibold">{exp.title}</h4>
                                <p>{exp.company}</p>
                                <p class="text-xs text-[var(--text-muted)]">
                                    {date_range(&exp.start_date, exp.end_date.as_deref())}
                                </p>
                                <p class="text-sm mt-1">{exp.description}</p>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Section>

            <Section title="Education">
                <ul class="space-y-4">
                    {profile
                        .education
                        .into_iter()
                        .map(|edu| view! {
                            <li>
                                <h4 class="font-semibold">{edu.school}</h4>
                                <p>{edu.degree}</p>
                                <p class="text-xs text-[var(--text-muted)]">
                                    {date_range(&edu.start_date, edu.end_date.as_deref())}
                                </p>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Section>

            <Section title="Skills">
                <div class="flex flex-wrap gap-2">
                    {profile
                        .skills
                        .into_iter()
                        .map(|skill| view! { <span class="chip">{skill}</span> })
                        .collect_view()}
                </div>
            </Section>

            <Section title="Contact Information">
                <dl class="space-y-2 text-sm">
                    <div class="flex gap-2">
                        <dt class="text-[var(--text-muted)]">"Email:"</dt>
                        <dd>{profile.email}</dd>
                    </div>
                    {profile
                        .websites
                        .into_iter()
                        .map(|site| {
                            let label = format!("{}:", site.name);
                            let href = site.url.clone();
                            let url = site.url;
                            view! {
                                <div class="flex gap-2">
                                    <dt class="text-[var(--text-muted)]">{label}</dt>
                                    <dd>
                                        <a href=href target="_blank" rel="noopener noreferrer" class="link">
                                            {url}
                                        </a>
                                    </dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </Section>
        </div>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="card">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            {children()}
        </section>
    }
}
