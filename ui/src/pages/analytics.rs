//! Analytics view

use super::{group_thousands, use_view, view_banners, EmptyState, PageHeading};
use crate::components::{BarChart, LineChart, Notices, PageLoading, PieChart};
use crate::fetch::{AnalyticsDomain, ViewState};
use crate::types::Analytics;
use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let (view_state, reload) = use_view::<AnalyticsDomain>();

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <PageHeading
                title="Analytics Dashboard"
                subtitle="Insights and metrics from your LinkedIn activity"
                on_refresh={Callback::new(move |_: ()| reload())}
                refresh_label="Refresh Data"
            />
            <Notices notices={view_banners::<AnalyticsDomain>(view_state)} />

            {move || match view_state.get() {
                ViewState::Loading => view! { <PageLoading /> }.into_any(),
                ViewState::Empty => view! {
                    <p class="text-center text-[var(--text-muted)]">"No analytics data available."</p>
                    <EmptyState
                        icon="📊"
                        title="Generate Analytics"
                        message="Start posting and engaging on LinkedIn to generate analytics data."
                        action_label="Create a Post on LinkedIn"
                        action_href="https://www.linkedin.com/feed/"
                    />
                }
                .into_any(),
                ViewState::Failed(_) => ().into_any(),
                ViewState::Real(analytics) | ViewState::Sample { data: analytics, .. } => {
                    view! { <Dashboard analytics=analytics /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn Dashboard(analytics: Analytics) -> impl IntoView {
    view! {
        <div class="grid gap-4 grid-cols-2 lg:grid-cols-4 mb-6">
            <StatCard label="Total Posts" value=analytics.total_posts />
            <StatCard label="Total Likes" value=analytics.total_likes />
            <StatCard label="Total Comments" value=analytics.total_comments />
            <StatCard label="Total Shares" value=analytics.total_shares />
        </div>

        <div class="grid gap-6 lg:grid-cols-2">
            <ChartCard title="Engagement Over Time" wide=true>
                <LineChart points=analytics.engagement_over_time />
            </ChartCard>
            <ChartCard title="Post Performance">
                <BarChart rows=analytics.post_performance />
            </ChartCard>
            <ChartCard title="Engagement Distribution">
                <PieChart slices=analytics.engagement_distribution />
            </ChartCard>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="card text-center">
            <p class="text-sm text-[var(--text-muted)]">{label}</p>
            <p class="text-3xl font-bold text-[var(--brand)] mt-1">{group_thousands(value)}</p>
        </div>
    }
}

#[component]
fn ChartCard(
    title: &'static str,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=if wide { "card lg:col-span-2" } else { "card" }>
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            {children()}
        </section>
    }
}
