/// The columns shown by the leaderboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Logo,
    CompanyName,
    Ranking,
    FundingGrowthRate,
    FundingStage,
    DaysSinceLastFunding,
    LastFundingRound,
    TotalFunding,
    Location,
    Industries,
    Description,
}

pub const DISPLAY_COLUMNS: [Column; 11] = [
    Column::Logo,
    Column::CompanyName,
    Column::Ranking,
    Column::FundingGrowthRate,
    Column::FundingStage,
    Column::DaysSinceLastFunding,
    Column::LastFundingRound,
    Column::TotalFunding,
    Column::Location,
    Column::Industries,
    Column::Description,
];

/// Raw headers read for derived record fields rather than display cells.
pub const WEBSITE_HEADER: &str = "Website";
pub const LATITUDE_HEADER: &str = "Latitude";
pub const LONGITUDE_HEADER: &str = "Longitude";

impl Column {
    /// Header text as it appears in the source document.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Logo => "Logo",
            Self::CompanyName => "Company Name",
            Self::Ranking => "Ranking",
            Self::FundingGrowthRate => "Funding Growth Rate ($/day)",
            Self::FundingStage => "Funding Stage",
            Self::DaysSinceLastFunding => "Days Since Last Funding",
            Self::LastFundingRound => "Last Funding Round ($)",
            Self::TotalFunding => "Total Funding ($)",
            Self::Location => "Location",
            Self::Industries => "Industries",
            Self::Description => "Description",
        }
    }

    /// Position of the column inside a record's cells.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dollar amounts that get a `$` prefix once formatted.
    pub const fn is_currency(self) -> bool {
        matches!(self, Self::LastFundingRound | Self::TotalFunding)
    }

    /// Columns rendered through the compact number formatter.
    pub const fn is_amount(self) -> bool {
        matches!(
            self,
            Self::FundingGrowthRate | Self::LastFundingRound | Self::TotalFunding
        )
    }

    pub fn parse(header: &str) -> Option<Self> {
        DISPLAY_COLUMNS
            .iter()
            .copied()
            .find(|column| column.header() == header)
    }
}
