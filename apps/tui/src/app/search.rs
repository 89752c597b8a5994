use crate::api::RegionStat;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Filter an already ranked region list by a fuzzy query on the region name.
///
/// An empty query keeps the ranking as is. Otherwise the best matches come
/// first and equal scores keep their rank order.
pub fn filter_regions<'a>(ranked: &'a [RegionStat], query: &str) -> Vec<&'a RegionStat> {
    let query = query.trim();
    if query.is_empty() {
        return ranked.iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &RegionStat)> = ranked
        .iter()
        .filter_map(|region| {
            matcher
                .fuzzy_match(&region.loc, query)
                .map(|score| (score, region))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().map(|(_, region)| region).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> Vec<RegionStat> {
        vec![
            RegionStat::new("Maharashtra", 8_100_000, 148_000, 7_900_000),
            RegionStat::new("Kerala", 6_900_000, 71_000, 6_800_000),
            RegionStat::new("Karnataka", 4_000_000, 40_000, 3_900_000),
            RegionStat::new("Madhya Pradesh", 1_000_000, 10_000, 990_000),
        ]
    }

    #[test]
    fn empty_query_keeps_ranking() {
        let regions = regions();
        let names: Vec<&str> = filter_regions(&regions, "  ")
            .iter()
            .map(|r| r.loc.as_str())
            .collect();

        assert_eq!(names, ["Maharashtra", "Kerala", "Karnataka", "Madhya Pradesh"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let regions = regions();
        let matches = filter_regions(&regions, "kerala");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].loc, "Kerala");
    }

    #[test]
    fn best_match_comes_first() {
        let regions = regions();
        let matches = filter_regions(&regions, "maha");

        assert!(!matches.is_empty());
        assert_eq!(matches[0].loc, "Maharashtra");
    }

    #[test]
    fn no_match_yields_nothing() {
        let regions = regions();
        assert!(filter_regions(&regions, "zzz").is_empty());
    }
}
