use crate::models::trip::{RegionCount, Trip, TravelStats};

const TOP_REGIONS: usize = 6;

pub struct TripStatsService;

impl TripStatsService {
    /// Summarize a user's trip history for the dashboard: trip count,
    /// average duration in whole days, and most-visited regions.
    pub fn summarize(trips: &[Trip]) -> TravelStats {
        let total_trips = trips.len() as u32;

        let average_trip_duration = if trips.is_empty() {
            0
        } else {
            let total_days: f64 = trips
                .iter()
                .map(|trip| {
                    let seconds = (trip.end_date - trip.start_date).num_seconds();
                    (seconds as f64 / 86_400.0).ceil()
                })
                .sum();
            (total_days / trips.len() as f64).round().max(0.0) as u32
        };

        // Destinations are "City, Region" strings; tally the leading part.
        let mut order: Vec<String> = Vec::new();
        let mut counts: std::collections::HashMap<String, u32> = std::collections::HashMap::new();
        for trip in trips {
            for destination in &trip.destinations {
                let region = destination
                    .split(',')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_string();
                if region.is_empty() {
                    continue;
                }
                if !counts.contains_key(&region) {
                    order.push(region.clone());
                }
                *counts.entry(region).or_insert(0) += 1;
            }
        }

        let mut favorite_regions: Vec<RegionCount> = order
            .into_iter()
            .map(|name| {
                let count = counts[&name];
                RegionCount { name, count }
            })
            .collect();
        // Stable sort keeps first-seen order among equal counts
        favorite_regions.sort_by(|a, b| b.count.cmp(&a.count));
        favorite_regions.truncate(TOP_REGIONS);

        TravelStats {
            total_trips,
            average_trip_duration,
            favorite_regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use mongodb::bson::oid::ObjectId;

    fn trip(destinations: &[&str], days: i64) -> Trip {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Trip {
            id: None,
            user_id: ObjectId::new(),
            name: "Test trip".to_string(),
            destinations: destinations.iter().map(|d| d.to_string()).collect(),
            start_date: start,
            end_date: start + Duration::days(days),
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn empty_history_yields_zeroes() {
        let stats = TripStatsService::summarize(&[]);
        assert_eq!(stats.total_trips, 0);
        assert_eq!(stats.average_trip_duration, 0);
        assert!(stats.favorite_regions.is_empty());
    }

    #[test]
    fn average_duration_rounds_to_whole_days() {
        let trips = vec![trip(&["Hunza, Northern Pakistan"], 3), trip(&["Karachi, Coastal Pakistan"], 6)];
        let stats = TripStatsService::summarize(&trips);
        assert_eq!(stats.total_trips, 2);
        // (3 + 6) / 2 = 4.5 rounds to 5 (round-half-up like the dashboard)
        assert_eq!(stats.average_trip_duration, 5);
    }

    #[test]
    fn favorite_regions_count_destination_prefixes() {
        let trips = vec![
            trip(&["Hunza, Gilgit-Baltistan", "Skardu, Gilgit-Baltistan"], 5),
            trip(&["Hunza, Gilgit-Baltistan"], 4),
            trip(&["Lahore, Punjab"], 2),
        ];
        let stats = TripStatsService::summarize(&trips);
        assert_eq!(
            stats.favorite_regions,
            vec![
                RegionCount { name: "Hunza".to_string(), count: 2 },
                RegionCount { name: "Skardu".to_string(), count: 1 },
                RegionCount { name: "Lahore".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn favorite_regions_cap_at_six() {
        let trips = vec![trip(
            &["A, x", "B, x", "C, x", "D, x", "E, x", "F, x", "G, x", "H, x"],
            3,
        )];
        let stats = TripStatsService::summarize(&trips);
        assert_eq!(stats.favorite_regions.len(), 6);
    }
}
