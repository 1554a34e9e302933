use serde::{Serialize, Serializer};

/// A 24-bit color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Buckets used for chart series and legend entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageGroup {
    EarlySupport,
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    LateStage,
    Corporate,
    PostIpo,
    Other,
}

impl StageGroup {
    /// Legend order. `Other` is always last.
    pub const PREFERRED_ORDER: [Self; 10] = [
        Self::EarlySupport,
        Self::PreSeed,
        Self::Seed,
        Self::SeriesA,
        Self::SeriesB,
        Self::SeriesC,
        Self::LateStage,
        Self::Corporate,
        Self::PostIpo,
        Self::Other,
    ];

    pub const fn identifier(self) -> &'static str {
        match self {
            Self::EarlySupport => "early_support",
            Self::PreSeed => "pre_seed",
            Self::Seed => "seed",
            Self::SeriesA => "series_a",
            Self::SeriesB => "series_b",
            Self::SeriesC => "series_c",
            Self::LateStage => "late_stage",
            Self::Corporate => "corporate",
            Self::PostIpo => "post_ipo",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlySupport => "Angel / Grant",
            Self::PreSeed => "Pre-Seed",
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
            Self::LateStage => "Late Stage (D+)",
            Self::Corporate => "Corporate Round",
            Self::PostIpo => "Post-IPO",
            Self::Other => "Other and Undisclosed",
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Self::EarlySupport => Rgb(0xfb, 0x71, 0x85),
            Self::PreSeed => Rgb(0x2d, 0xd4, 0xbf),
            Self::Seed => Rgb(0x84, 0xcc, 0x16),
            Self::SeriesA => Rgb(0x38, 0xbd, 0xf8),
            Self::SeriesB => Rgb(0x34, 0xd3, 0x99),
            Self::SeriesC => Rgb(0xfb, 0xbf, 0x24),
            Self::LateStage => Rgb(0xa7, 0x8b, 0xfa),
            Self::Corporate => Rgb(0xfb, 0x92, 0x3c),
            Self::PostIpo => Rgb(0x60, 0xa5, 0xfa),
            Self::Other => Rgb(0xcb, 0xd5, 0xe1),
        }
    }

    /// Badge classes used when the stage is rendered as a label.
    pub const fn display_classes(self) -> &'static str {
        match self {
            Self::EarlySupport => "bg-rose-100 text-rose-800",
            Self::PreSeed => "bg-teal-100 text-teal-800",
            Self::Seed => "bg-lime-100 text-lime-800",
            Self::SeriesA => "bg-sky-100 text-sky-800",
            Self::SeriesB => "bg-emerald-100 text-emerald-800",
            Self::SeriesC => "bg-amber-100 text-amber-800",
            Self::LateStage => "bg-violet-100 text-violet-800",
            Self::Corporate => "bg-orange-100 text-orange-800",
            Self::PostIpo => "bg-blue-100 text-blue-800",
            Self::Other => "bg-slate-100 text-slate-700",
        }
    }
}

/// Funding stages with dedicated styling. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundingStage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    SeriesD,
    SeriesE,
    SeriesF,
    Angel,
    Grant,
    PostIpoEquity,
    PostIpoDebt,
    CorporateRound,
    Other,
}

/// Everything a renderer needs to draw a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageStyle {
    pub display_classes: &'static str,
    pub color: Rgb,
    pub group: StageGroup,
}

impl FundingStage {
    /// Classifies a stage label. Labels are trimmed and matched exactly;
    /// missing, empty and unknown labels all land in `Other`.
    pub fn classify(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("Pre-Seed") => Self::PreSeed,
            Some("Seed") => Self::Seed,
            Some("Series A") => Self::SeriesA,
            Some("Series B") => Self::SeriesB,
            Some("Series C") => Self::SeriesC,
            Some("Series D") => Self::SeriesD,
            Some("Series E") => Self::SeriesE,
            Some("Series F") => Self::SeriesF,
            Some("Angel") => Self::Angel,
            Some("Grant") => Self::Grant,
            Some("Post-IPO Equity") => Self::PostIpoEquity,
            Some("Post-IPO Debt") => Self::PostIpoDebt,
            Some("Corporate Round") => Self::CorporateRound,
            _ => Self::Other,
        }
    }

    pub const fn group(self) -> StageGroup {
        match self {
            Self::PreSeed => StageGroup::PreSeed,
            Self::Seed => StageGroup::Seed,
            Self::SeriesA => StageGroup::SeriesA,
            Self::SeriesB => StageGroup::SeriesB,
            Self::SeriesC => StageGroup::SeriesC,
            Self::SeriesD | Self::SeriesE | Self::SeriesF => StageGroup::LateStage,
            Self::Angel | Self::Grant => StageGroup::EarlySupport,
            Self::PostIpoEquity | Self::PostIpoDebt => StageGroup::PostIpo,
            Self::CorporateRound => StageGroup::Corporate,
            Self::Other => StageGroup::Other,
        }
    }

    pub const fn style(self) -> StageStyle {
        let group = self.group();
        StageStyle {
            display_classes: group.display_classes(),
            color: group.color(),
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_stages_share_a_group_and_color() {
        let styles = ["Series D", "Series E", "Series F"]
            .map(|label| FundingStage::classify(Some(label)).style());
        assert!(styles.iter().all(|style| style.group == StageGroup::LateStage));
        assert!(styles.iter().all(|style| style.color == styles[0].color));
    }

    #[test]
    fn unknown_and_missing_labels_fall_back_to_other() {
        for label in [None, Some(""), Some("   "), Some("Series Z"), Some("seed")] {
            let style = FundingStage::classify(label).style();
            assert_eq!(style.group, StageGroup::Other);
            assert_eq!(style.color.hex(), "#cbd5e1");
        }
    }

    #[test]
    fn labels_are_trimmed_before_matching() {
        assert_eq!(
            FundingStage::classify(Some("  Series A ")),
            FundingStage::SeriesA
        );
    }

    #[test]
    fn other_is_last_in_preferred_order() {
        assert_eq!(StageGroup::PREFERRED_ORDER.last(), Some(&StageGroup::Other));
    }

    #[test]
    fn colors_serialize_as_hex() {
        let json = serde_json::to_string(&StageGroup::Seed.color()).unwrap_or_default();
        assert_eq!(json, "\"#84cc16\"");
    }
}
