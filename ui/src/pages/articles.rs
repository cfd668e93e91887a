//! Articles view

use super::{use_view, view_banners, EmptyState, EngagementChips, PageHeading};
use crate::components::{Notices, PageLoading};
use crate::fetch::{ArticlesDomain, ViewState};
use crate::types::Article;
use leptos::prelude::*;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let (view_state, reload) = use_view::<ArticlesDomain>();

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <PageHeading
                title="LinkedIn Articles"
                subtitle="View and analyze your LinkedIn articles and their engagement metrics"
                on_refresh={Callback::new(move |_: ()| reload())}
            />
            <Notices notices={view_banners::<ArticlesDomain>(view_state)} />

            {move || match view_state.get() {
                ViewState::Loading => view! { <PageLoading /> }.into_any(),
                ViewState::Empty => view! {
                    <EmptyState
                        icon="📰"
                        title="No Articles Available"
                        message="Start writing articles on LinkedIn to see them here"
                        action_label="Write an Article on LinkedIn"
                        action_href="https://www.linkedin.com/pulse/"
                    />
                }
                .into_any(),
                ViewState::Failed(_) => ().into_any(),
                ViewState::Real(articles) | ViewState::Sample { data: articles, .. } => view! {
                    <div class="grid gap-4 md:grid-cols-2">
                        {articles
                            .into_iter()
                            .map(|article| view! { <ArticleCard article=article /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    view! {
        <article class="card flex flex-col">
            <h2 class="text-lg font-semibold mb-2">{article.title}</h2>
            <p class="text-xs text-[var(--text-muted)] mb-3">
                {format!("Published on {}", article.created.format("%B %-d, %Y"))}
            </p>
            <p class="text-sm text-[var(--text-muted)] flex-1 mb-4">{article.text}</p>
            <EngagementChips likes=article.likes comments=article.comments shares=article.shares />
            {article.url.map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-ghost text-sm mt-4 self-start">
                    "Read on LinkedIn"
                </a>
            })}
        </article>
    }
}
