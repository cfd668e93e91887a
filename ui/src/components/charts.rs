//! SVG charts for the Analytics view.
//!
//! Geometry is computed by plain functions so it can be tested natively;
//! the components only turn the numbers into SVG elements.

use crate::types::{DistributionSlice, EngagementPoint, PostPerformance};
use leptos::prelude::*;
use std::f64::consts::{PI, TAU};

/// Series and slice colours, in order
pub const COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

const SERIES: [&str; 3] = ["Likes", "Comments", "Shares"];

/// Drawing area of a cartesian chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub const DEFAULT: Frame = Frame {
        width: 600.0,
        height: 300.0,
        padding: 40.0,
    };

    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    /// y coordinate of `value` on a `0..=max` axis
    pub fn y(&self, value: u64, max: u64) -> f64 {
        if max == 0 {
            return self.bottom();
        }
        self.bottom() - value as f64 / max as f64 * self.inner_height()
    }
}

/// Largest value, never below 1
pub fn scale_max<I: IntoIterator<Item = u64>>(values: I) -> u64 {
    values.into_iter().max().unwrap_or(0).max(1)
}

/// Evenly spaced points across the frame
pub fn line_points(frame: &Frame, values: &[u64], max: u64) -> Vec<(f64, f64)> {
    let step = if values.len() > 1 {
        frame.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };
    let offset = if values.len() == 1 {
        frame.inner_width() / 2.0
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (frame.padding + offset + i as f64 * step, frame.y(v, max)))
        .collect()
}

/// `points` attribute for an SVG polyline
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub series: usize,
}

/// Grouped bars, one group per row and one bar per series
pub fn bars(frame: &Frame, groups: &[[u64; 3]], max: u64) -> Vec<Bar> {
    if groups.is_empty() {
        return Vec::new();
    }
    let group_width = frame.inner_width() / groups.len() as f64;
    let bar_width = group_width * 0.8 / 3.0;

    groups
        .iter()
        .enumerate()
        .flat_map(|(g, values)| {
            values.iter().enumerate().map(move |(s, &v)| {
                let y = frame.y(v, max);
                Bar {
                    x: frame.padding + g as f64 * group_width + group_width * 0.1 + s as f64 * bar_width,
                    y,
                    width: bar_width,
                    height: frame.bottom() - y,
                    series: s,
                }
            })
        })
        .collect()
}

/// Pie slice as angles in radians, clockwise from twelve o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
    pub percent: f64,
}

pub fn pie_slices(values: &[u64]) -> Vec<Slice> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|&v| {
            let fraction = v as f64 / total as f64;
            let slice = Slice {
                start,
                end: start + fraction * TAU,
                percent: fraction * 100.0,
            };
            start = slice.end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for a slice of a circle centred on `(cx, cy)`
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: &Slice) -> String {
    let sweep = slice.end - slice.start;
    if sweep >= TAU - 1e-9 {
        // A single arc cannot close on itself
        return format!(
            "M {cx:.2} {top:.2} A {r} {r} 0 1 1 {cx:.2} {bottom:.2} A {r} {r} 0 1 1 {cx:.2} {top:.2} Z",
            cx = cx,
            r = r,
            top = cy - r,
            bottom = cy + r,
        );
    }

    let (x0, y0) = polar(cx, cy, r, slice.start);
    let (x1, y1) = polar(cx, cy, r, slice.end);
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r} {r} 0 {large_arc} 1 {x1:.2} {y1:.2} Z",
    )
}

/// "{name} {percent}%"
pub fn pie_label(name: &str, percent: f64) -> String {
    format!("{} {:.0}%", name, percent)
}

fn series(row: (u64, u64, u64)) -> [u64; 3] {
    [row.0, row.1, row.2]
}

#[component]
fn Legend() -> impl IntoView {
    view! {
        <div class="flex justify-center gap-4 mt-2 text-xs text-[var(--text-muted)]">
            {SERIES
                .iter()
                .enumerate()
                .map(|(i, name)| view! {
                    <span class="flex items-center gap-1">
                        <span class="w-3 h-3 rounded-sm" style={format!("background:{}", COLORS[i])}></span>
                        {*name}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

/// Likes, comments and shares per day
#[component]
pub fn LineChart(points: Vec<EngagementPoint>) -> impl IntoView {
    let frame = Frame::DEFAULT;
    let rows: Vec<[u64; 3]> = points
        .iter()
        .map(|p| series((p.likes, p.comments, p.shares)))
        .collect();
    let max = scale_max(rows.iter().flatten().copied());

    let lines = (0..3)
        .map(|s| {
            let values: Vec<u64> = rows.iter().map(|r| r[s]).collect();
            let coords = line_points(&frame, &values, max);
            view! {
                <polyline fill="none" stroke={COLORS[s]} stroke-width="2" points={polyline(&coords)} />
                {coords
                    .into_iter()
                    .map(|(x, y)| view! { <circle cx=x cy=y r="3" fill={COLORS[s]} /> })
                    .collect_view()}
            }
        })
        .collect_view();

    let xs = line_points(&frame, &vec![0; points.len()], max);
    let labels = points
        .iter()
        .zip(xs)
        .map(|(p, (x, _))| view! {
            <text x=x y=frame.bottom() + 18.0 text-anchor="middle" class="chart-label">{p.date.clone()}</text>
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", frame.width, frame.height)} class="w-full h-auto">
            <Axes frame=frame max=max />
            {lines}
            {labels}
        </svg>
        <Legend />
    }
}

/// Grouped bars per post
#[component]
pub fn BarChart(rows: Vec<PostPerformance>) -> impl IntoView {
    let frame = Frame::DEFAULT;
    let groups: Vec<[u64; 3]> = rows
        .iter()
        .map(|r| series((r.likes, r.comments, r.shares)))
        .collect();
    let max = scale_max(groups.iter().flatten().copied());
    let group_width = if rows.is_empty() {
        0.0
    } else {
        frame.inner_width() / rows.len() as f64
    };

    let rects = bars(&frame, &groups, max)
        .into_iter()
        .map(|b| view! {
            <rect x=b.x y=b.y width=b.width height=b.height fill={COLORS[b.series]} rx="2" />
        })
        .collect_view();

    let labels = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let x = frame.padding + (i as f64 + 0.5) * group_width;
            view! {
                <text x=x y=frame.bottom() + 18.0 text-anchor="middle" class="chart-label">{r.post.clone()}</text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", frame.width, frame.height)} class="w-full h-auto">
            <Axes frame=frame max=max />
            {rects}
            {labels}
        </svg>
        <Legend />
    }
}

/// Share of likes, comments and shares
#[component]
pub fn PieChart(slices: Vec<DistributionSlice>) -> impl IntoView {
    let (cx, cy, r) = (150.0, 150.0, 100.0);
    let values: Vec<u64> = slices.iter().map(|s| s.value).collect();

    let wedges = pie_slices(&values)
        .into_iter()
        .zip(slices.iter())
        .enumerate()
        .map(|(i, (slice, item))| {
            let mid = (slice.start + slice.end) / 2.0;
            let (lx, ly) = polar(cx, cy, r + 24.0, mid);
            let anchor = if lx < cx { "end" } else { "start" };
            view! {
                <path d={arc_path(cx, cy, r, &slice)} fill={COLORS[i % COLORS.len()]} />
                <text x=lx y=ly text-anchor=anchor class="chart-label">
                    {pie_label(&item.name, slice.percent)}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox="-60 0 420 300" class="w-full h-auto">
            {wedges}
        </svg>
    }
}

#[component]
fn Axes(frame: Frame, max: u64) -> impl IntoView {
    let grid = (0..=4)
        .map(|i| {
            let value = max * i / 4;
            let y = frame.y(value, max);
            view! {
                <line x1=frame.padding y1=y x2=frame.width - frame.padding y2=y class="chart-grid" />
                <text x=frame.padding - 6.0 y=y + 4.0 text-anchor="end" class="chart-label">{value}</text>
            }
        })
        .collect_view();

    view! { <g>{grid}</g> }
}
