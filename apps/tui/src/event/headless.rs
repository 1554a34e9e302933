use color_eyre::Result;
use leaderboard_core::cells::CellContent;
use leaderboard_core::placement::MarkerPlacement;
use leaderboard_core::stats::{StatsPanel, UNAVAILABLE_MESSAGE};
use leaderboard_core::{Column, Dashboard, RankChange};
use serde::Serialize;

const TOP_COMPANIES: usize = 10;

/// Everything the dashboard would show, flattened for stdout.
#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub companies: usize,
    pub stats: StatsPanel,
    pub series: Vec<HeadlessSeries>,
    pub top_companies: Vec<HeadlessCompany>,
    pub markers: Vec<MarkerPlacement>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessSeries {
    pub label: &'static str,
    pub color: String,
    pub points: usize,
}

#[derive(Debug, Serialize)]
pub struct HeadlessCompany {
    pub rank: String,
    pub name: String,
    pub stage: String,
    pub growth_rate: String,
    pub total_funding: String,
    pub change: RankChange,
}

impl HeadlessReport {
    pub fn build(dashboard: &Dashboard) -> Self {
        let series = dashboard
            .series()
            .iter()
            .map(|series| HeadlessSeries {
                label: series.label,
                color: series.color.hex(),
                points: series.points.len(),
            })
            .collect();

        let top_companies = dashboard
            .records()
            .iter()
            .take(TOP_COMPANIES)
            .map(|record| {
                let text = |column| CellContent::for_column(record, column).plain_text();
                HeadlessCompany {
                    rank: record.rank().to_string(),
                    name: record.name().to_string(),
                    stage: text(Column::FundingStage),
                    growth_rate: text(Column::FundingGrowthRate),
                    total_funding: text(Column::TotalFunding),
                    change: record.change(),
                }
            })
            .collect();

        Self {
            companies: dashboard.records().len(),
            stats: dashboard.stats().clone(),
            series,
            top_companies,
            markers: dashboard.markers().to_vec(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            String::new(),
            "Funding Growth Leaderboard".to_string(),
            "==========================".to_string(),
            format!("Companies: {}", self.companies),
            String::new(),
            "Statistics:".to_string(),
        ];

        match &self.stats {
            StatsPanel::Cards(cards) => {
                for card in cards {
                    let by = card
                        .by
                        .as_ref()
                        .map(|name| format!(" (by {name})"))
                        .unwrap_or_default();
                    lines.push(format!("- {}: {}{by}", card.title, card.value));
                }
            }
            StatsPanel::Unavailable => lines.push(format!("- {UNAVAILABLE_MESSAGE}")),
        }

        lines.push(String::new());
        lines.push("Chart series:".to_string());
        for series in &self.series {
            lines.push(format!(
                "- {} ({}): {} companies",
                series.label, series.color, series.points
            ));
        }

        lines.push(String::new());
        lines.push("Top companies:".to_string());
        for company in &self.top_companies {
            let change = company
                .change
                .indicator()
                .map(|indicator| format!(" {indicator}"))
                .unwrap_or_default();
            lines.push(format!(
                "- #{}{change} | {} | {} | FGR {} | Total {}",
                company.rank, company.name, company.stage, company.growth_rate, company.total_funding
            ));
        }

        lines.push(String::new());
        lines.push(format!("Map markers: {}", self.markers.len()));
        for marker in &self.markers {
            lines.push(format!(
                "- {} @ {:.4}, {:.4}",
                marker.name, marker.lat, marker.lon
            ));
        }

        lines.join("\n")
    }
}

/// Run the application in headless mode (no UI)
pub fn run_headless(dashboard: &Dashboard, json: bool) -> Result<()> {
    let report = HeadlessReport::build(dashboard);

    if json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        println!("{}", report.to_text());
    }

    Ok(())
}
