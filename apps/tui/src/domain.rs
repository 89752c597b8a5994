use crate::api::{RawStatsResponse, RegionStat, StatsSummary};
use chrono::{DateTime, Utc};

/// Regions kept in the ranking.
pub const TOP_REGION_LIMIT: usize = 10;
/// Rows in the "State Updates" list.
pub const UPDATE_LIST_LIMIT: usize = 8;
/// Rows beside the map.
pub const MAP_LIST_LIMIT: usize = 7;
/// Deaths above this mark a region as high mortality in the updates list.
pub const HIGH_MORTALITY_THRESHOLD: u64 = 1000;

/// One group of the confirmed / deaths / recovered bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarDatum {
    pub name: String,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// Render-ready view of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub summary: StatsSummary,
    pub top_regions: Vec<RegionStat>,
    pub ranked_regions: Vec<RegionStat>,
    pub last_refreshed: Option<DateTime<Utc>>,
    pub last_origin_update: Option<DateTime<Utc>>,
}

/// Rank regions by confirmed cases and keep the top ten.
///
/// The sort is stable, so regions with equal counts keep their input order.
/// `raw` is only borrowed and is left untouched.
pub fn build_view_model(raw: &RawStatsResponse) -> ViewModel {
    let ranked_regions = rank_regions(&raw.regional);
    let top_regions = ranked_regions
        .iter()
        .take(TOP_REGION_LIMIT)
        .cloned()
        .collect();

    ViewModel {
        summary: raw.summary.clone(),
        top_regions,
        ranked_regions,
        last_refreshed: raw.last_refreshed,
        last_origin_update: raw.last_origin_update,
    }
}

fn rank_regions(regions: &[RegionStat]) -> Vec<RegionStat> {
    let mut ranked = regions.to_vec();
    ranked.sort_by(|a, b| b.total_confirmed.cmp(&a.total_confirmed));
    ranked
}

pub const fn is_high_mortality(region: &RegionStat) -> bool {
    region.deaths > HIGH_MORTALITY_THRESHOLD
}

impl ViewModel {
    pub fn bar_series(&self) -> Vec<BarDatum> {
        self.top_regions
            .iter()
            .map(|region| BarDatum {
                name: region.loc.clone(),
                confirmed: region.total_confirmed,
                deaths: region.deaths,
                recovered: region.discharged,
            })
            .collect()
    }

    pub fn updates(&self) -> &[RegionStat] {
        self.leading(UPDATE_LIST_LIMIT)
    }

    pub fn map_rows(&self) -> &[RegionStat] {
        self.leading(MAP_LIST_LIMIT)
    }

    /// Per-region series over the ranking, used by the summary card trend lines.
    pub fn series(&self, pick: impl Fn(&RegionStat) -> u64) -> Vec<u64> {
        self.top_regions.iter().map(pick).collect()
    }

    fn leading(&self, limit: usize) -> &[RegionStat] {
        &self.top_regions[..self.top_regions.len().min(limit)]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_stats(count: usize) -> RawStatsResponse {
        let regional = (0..count)
            .map(|index| {
                let confirmed = ((index * 7_919) % 13) as u64 * 1_000;
                RegionStat::new(format!("Region {index}"), confirmed, confirmed / 50, confirmed / 2)
            })
            .collect();
        RawStatsResponse::new(StatsSummary::new(1_000_000, 12_000, 900_000), regional)
    }

    fn scenario() -> RawStatsResponse {
        RawStatsResponse::new(
            StatsSummary::new(250, 6, 190),
            vec![
                RegionStat::new("A", 50, 1, 40),
                RegionStat::new("B", 200, 5, 150),
            ],
        )
    }

    #[test]
    fn ranks_two_regions_descending() {
        let raw = scenario();
        let view = build_view_model(&raw);

        let names: Vec<&str> = view.top_regions.iter().map(|r| r.loc.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(view.summary, StatsSummary::new(250, 6, 190));
    }

    #[test]
    fn keeps_at_most_ten_regions() {
        for count in [0, 1, 9, 10, 11, 36] {
            let view = build_view_model(&sample_stats(count));
            assert_eq!(view.top_regions.len(), count.min(TOP_REGION_LIMIT));
            assert_eq!(view.ranked_regions.len(), count);
        }
    }

    #[test]
    fn ranking_is_non_increasing() {
        let view = build_view_model(&sample_stats(36));

        assert!(view
            .top_regions
            .windows(2)
            .all(|pair| pair[0].total_confirmed >= pair[1].total_confirmed));
    }

    #[test]
    fn ties_keep_input_order() {
        let raw = RawStatsResponse::new(
            StatsSummary::new(0, 0, 0),
            vec![
                RegionStat::new("first", 10, 0, 0),
                RegionStat::new("big", 99, 0, 0),
                RegionStat::new("second", 10, 0, 0),
                RegionStat::new("third", 10, 0, 0),
            ],
        );

        let view = build_view_model(&raw);
        let names: Vec<&str> = view.top_regions.iter().map(|r| r.loc.as_str()).collect();
        assert_eq!(names, ["big", "first", "second", "third"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let raw = sample_stats(20);
        let before = raw.clone();

        let _ = build_view_model(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn bar_series_follows_ranking() {
        let view = build_view_model(&scenario());

        assert_eq!(
            view.bar_series(),
            vec![
                BarDatum {
                    name: "B".to_string(),
                    confirmed: 200,
                    deaths: 5,
                    recovered: 150,
                },
                BarDatum {
                    name: "A".to_string(),
                    confirmed: 50,
                    deaths: 1,
                    recovered: 40,
                },
            ]
        );
    }

    #[test]
    fn list_slices_are_bounded() {
        let view = build_view_model(&sample_stats(36));
        assert_eq!(view.updates().len(), UPDATE_LIST_LIMIT);
        assert_eq!(view.map_rows().len(), MAP_LIST_LIMIT);

        let view = build_view_model(&scenario());
        assert_eq!(view.updates().len(), 2);
        assert_eq!(view.map_rows().len(), 2);
    }

    #[test]
    fn high_mortality_is_strictly_above_threshold() {
        assert!(!is_high_mortality(&RegionStat::new("x", 5_000, 1_000, 0)));
        assert!(is_high_mortality(&RegionStat::new("x", 5_000, 1_001, 0)));
    }
}
