use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use leaderboard_core::Dashboard;

/// Rows shown for `query`. Substring mode keeps leaderboard order; fuzzy
/// mode orders by match score, best first, ties in leaderboard order.
pub fn visible_rows(dashboard: &Dashboard, query: &str, fuzzy: bool) -> Vec<usize> {
    let pattern = query.trim();
    if !fuzzy || pattern.is_empty() {
        return dashboard.search(query);
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, usize)> = dashboard
        .records()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            matcher
                .fuzzy_match(record.name(), pattern)
                .map(|score| (score, index))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, index)| index).collect()
}
