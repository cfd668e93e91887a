//! Reusable UI components

pub mod banner;
pub mod charts;
pub mod footer;
pub mod header;
pub mod loading;
pub mod sidebar;

pub use banner::{Banner, Notices};
pub use charts::{BarChart, LineChart, PieChart};
pub use footer::Footer;
pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner, PageLoading, Skeleton};
pub use sidebar::Sidebar;
