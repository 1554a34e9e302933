//! Data pipeline behind the funding leaderboard dashboards.
//!
//! One JSON document is loaded into a [`RawDataset`], projected onto the fixed
//! display columns and wrapped in a [`Dashboard`]. Every panel (table, ticker,
//! chart, map, word cloud, statistics, calculator) reads from that value.

pub mod cells;
pub mod chart;
pub mod columns;
pub mod dashboard;
pub mod dataset;
pub mod format;
pub mod placement;
pub mod projector;
pub mod rank;
pub mod search;
pub mod stage;
pub mod stats;
pub mod ticker;
pub mod velocity;
pub mod word_cloud;

pub use columns::{Column, DISPLAY_COLUMNS};
pub use dashboard::Dashboard;
pub use dataset::{LoadError, RawDataset};
pub use format::{format_number, FormattedNumber};
pub use projector::{CompanyRecord, RankChange};
pub use stage::{FundingStage, Rgb, StageGroup, StageStyle};
