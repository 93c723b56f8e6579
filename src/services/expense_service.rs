use crate::db::regions::RegionCatalog;
use crate::models::planner::{ExpenseBreakdown, ExpenseEstimate, PlannerError, TravelStyle};

pub struct ExpenseService;

impl ExpenseService {
    /// Estimate the cost of a trip for a party of `people` staying `days` days.
    ///
    /// Accommodation is priced per double-occupancy room, food and activities
    /// per person per day, and transportation per day for the whole group
    /// (one shared vehicle). All arithmetic is exact integer math.
    pub fn estimate(
        catalog: &RegionCatalog,
        region: &str,
        style: TravelStyle,
        days: u32,
        people: u32,
    ) -> Result<ExpenseEstimate, PlannerError> {
        let costs = catalog
            .region(region)
            .map(|r| &r.costs)
            .ok_or_else(|| PlannerError::UnknownRegion(region.to_string()))?;

        let days = days as u64;
        let people = people as u64;
        let rooms = people.div_ceil(2);

        let breakdown = ExpenseBreakdown {
            accommodation: costs.accommodation.for_style(style) as u64 * days * rooms,
            food: costs.food.for_style(style) as u64 * days * people,
            transportation: costs.transportation.for_style(style) as u64 * days,
            activities: costs.activities.for_style(style) as u64 * days * people,
        };

        Ok(ExpenseEstimate {
            total: breakdown.sum(),
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::regions::pakistan_catalog;

    #[test]
    fn standard_northern_trip_matches_published_rates() {
        let catalog = pakistan_catalog();
        let estimate =
            ExpenseService::estimate(&catalog, "Northern Pakistan", TravelStyle::Standard, 5, 2)
                .unwrap();

        assert_eq!(estimate.breakdown.accommodation, 400); // 80 * 5 days * 1 room
        assert_eq!(estimate.breakdown.food, 300); // 30 * 5 days * 2 people
        assert_eq!(estimate.breakdown.transportation, 250); // 50 * 5 days
        assert_eq!(estimate.breakdown.activities, 500); // 50 * 5 days * 2 people
        assert_eq!(estimate.total, 1450);
    }

    #[test]
    fn total_always_equals_breakdown_sum() {
        let catalog = pakistan_catalog();
        for region in catalog.regions() {
            for style in TravelStyle::ALL {
                for days in [1, 3, 7, 14] {
                    for people in [1, 2, 5, 9] {
                        let estimate =
                            ExpenseService::estimate(&catalog, &region.name, style, days, people)
                                .unwrap();
                        assert_eq!(estimate.total, estimate.breakdown.sum());
                    }
                }
            }
        }
    }

    #[test]
    fn estimates_grow_with_days_and_people() {
        let catalog = pakistan_catalog();
        for region in catalog.regions() {
            for style in TravelStyle::ALL {
                let base =
                    ExpenseService::estimate(&catalog, &region.name, style, 3, 2).unwrap();
                let longer =
                    ExpenseService::estimate(&catalog, &region.name, style, 4, 2).unwrap();
                let bigger =
                    ExpenseService::estimate(&catalog, &region.name, style, 3, 3).unwrap();

                assert!(longer.breakdown.accommodation >= base.breakdown.accommodation);
                assert!(longer.breakdown.food >= base.breakdown.food);
                assert!(longer.breakdown.transportation >= base.breakdown.transportation);
                assert!(longer.breakdown.activities >= base.breakdown.activities);

                assert!(bigger.breakdown.accommodation >= base.breakdown.accommodation);
                assert!(bigger.breakdown.food >= base.breakdown.food);
                assert!(bigger.breakdown.transportation >= base.breakdown.transportation);
                assert!(bigger.breakdown.activities >= base.breakdown.activities);
            }
        }
    }

    #[test]
    fn solo_traveler_pays_for_a_full_room() {
        let catalog = pakistan_catalog();
        let solo =
            ExpenseService::estimate(&catalog, "Coastal Pakistan", TravelStyle::Budget, 4, 1)
                .unwrap();
        let pair =
            ExpenseService::estimate(&catalog, "Coastal Pakistan", TravelStyle::Budget, 4, 1 + 1)
                .unwrap();

        // ceil(1/2) == ceil(2/2) == 1 room either way
        assert_eq!(solo.breakdown.accommodation, pair.breakdown.accommodation);
    }

    #[test]
    fn odd_party_sizes_round_rooms_up() {
        let catalog = pakistan_catalog();
        let three =
            ExpenseService::estimate(&catalog, "Central Pakistan", TravelStyle::Luxury, 2, 3)
                .unwrap();
        // 3 people -> 2 rooms at 250/night for 2 days
        assert_eq!(three.breakdown.accommodation, 250 * 2 * 2);
    }

    #[test]
    fn transportation_is_independent_of_party_size() {
        let catalog = pakistan_catalog();
        let two =
            ExpenseService::estimate(&catalog, "Northern Pakistan", TravelStyle::Standard, 5, 2)
                .unwrap();
        let eight =
            ExpenseService::estimate(&catalog, "Northern Pakistan", TravelStyle::Standard, 5, 8)
                .unwrap();
        assert_eq!(two.breakdown.transportation, eight.breakdown.transportation);
    }

    #[test]
    fn unknown_region_is_rejected() {
        let catalog = pakistan_catalog();
        let err =
            ExpenseService::estimate(&catalog, "Southern Pakistan", TravelStyle::Budget, 3, 2)
                .unwrap_err();
        assert!(matches!(err, PlannerError::UnknownRegion(_)));
    }

    #[test]
    fn unrecognized_style_fails_to_parse() {
        let err = "deluxe".parse::<TravelStyle>().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidStyle(_)));
        assert_eq!("luxury".parse::<TravelStyle>().unwrap(), TravelStyle::Luxury);
    }
}
