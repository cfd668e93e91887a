//! Posts view

use super::{use_view, view_banners, EmptyState, EngagementChips, PageHeading};
use crate::components::{Notices, PageLoading};
use crate::fetch::{PostsDomain, ViewState};
use crate::types::Post;
use leptos::prelude::*;

#[component]
pub fn PostsPage() -> impl IntoView {
    let (view_state, reload) = use_view::<PostsDomain>();

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <PageHeading
                title="LinkedIn Posts"
                subtitle="View and analyze your LinkedIn posts and their engagement metrics"
                on_refresh={Callback::new(move |_: ()| reload())}
            />
            <Notices notices={view_banners::<PostsDomain>(view_state)} />

            {move || match view_state.get() {
                ViewState::Loading => view! { <PageLoading /> }.into_any(),
                ViewState::Empty => view! {
                    <EmptyState
                        icon="📈"
                        title="No Posts Available"
                        message="Start sharing your thoughts on LinkedIn to see your posts here"
                        action_label="Create a Post on LinkedIn"
                        action_href="https://www.linkedin.com/feed/"
                    />
                }
                .into_any(),
                ViewState::Failed(_) => ().into_any(),
                ViewState::Real(posts) | ViewState::Sample { data: posts, .. } => view! {
                    <div class="space-y-4">
                        {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    view! {
        <article class="card">
            <p class="whitespace-pre-line mb-3">{post.text}</p>
            <p class="text-xs text-[var(--text-muted)] mb-4">
                {format!("Posted on {}", post.created.format("%B %-d, %Y"))}
            </p>
            <div class="flex flex-wrap items-center justify-between gap-3">
                <EngagementChips likes=post.likes comments=post.comments shares=post.shares />
                {post.url.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-ghost text-sm">
                        "View on LinkedIn"
                    </a>
                })}
            </div>
        </article>
    }
}
