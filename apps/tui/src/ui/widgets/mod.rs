pub mod calculator;
pub mod charts;
pub mod leaderboard;
pub mod map;
pub mod popup;
pub mod stats;
pub mod tables;
pub mod ticker;
pub mod word_cloud;
