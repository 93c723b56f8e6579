use chrono::{Duration, NaiveTime};

use crate::db::regions::RegionCatalog;
use crate::models::planner::{
    ActivityType, DailyPlan, ItineraryPlan, PlannerError, RegionAttraction, ScheduledVisit,
};

// A day keeps accepting attractions while its total is under 8 hours, but a
// single addition may push it up to (never over) 9 hours. The two thresholds
// are distinct on purpose.
const PACK_MORE_BELOW_HOURS: u32 = 8;
const MAX_DAY_HOURS: u32 = 9;
const DAY_START: (u32, u32) = (9, 0);

pub struct ItineraryService;

impl ItineraryService {
    /// Build a day-by-day visiting schedule for a region.
    ///
    /// Attractions are filtered by `preferences` (original catalog order is
    /// kept) and packed greedily into days. When the filtered pool runs out
    /// between days and more days were requested, it is refilled so long
    /// trips revisit earlier attractions. A day whose next attraction cannot
    /// fit is closed; the attraction leads the following day instead.
    pub fn generate(
        catalog: &RegionCatalog,
        region: &str,
        days: u32,
        preferences: &[ActivityType],
    ) -> Result<ItineraryPlan, PlannerError> {
        let itinerary = catalog
            .region(region)
            .map(|r| &r.itinerary)
            .ok_or_else(|| PlannerError::UnknownRegion(region.to_string()))?;

        let pool: Vec<&RegionAttraction> = itinerary
            .attractions
            .iter()
            .filter(|spot| preferences.contains(&spot.activity_type))
            .collect();

        let mut daily_plan = Vec::new();
        let mut cursor = 0usize;

        if !pool.is_empty() {
            for day in 1..=days {
                let mut day_hours = 0u32;
                let mut visits = Vec::new();

                while day_hours < PACK_MORE_BELOW_HOURS && cursor < pool.len() {
                    let spot = pool[cursor];
                    if day_hours + spot.duration_hours > MAX_DAY_HOURS {
                        break;
                    }
                    visits.push(ScheduledVisit {
                        attraction: spot.clone(),
                        start_time: clock_time(day_hours),
                        end_time: clock_time(day_hours + spot.duration_hours),
                    });
                    day_hours += spot.duration_hours;
                    cursor += 1;
                }

                if !visits.is_empty() {
                    daily_plan.push(DailyPlan { day, activities: visits });
                }

                // Refill only between days: a day never wraps around within
                // itself, it simply ends when the pool is exhausted.
                if cursor >= pool.len() && day < days {
                    cursor = 0;
                }
            }
        }

        Ok(ItineraryPlan {
            daily_plan,
            tips: itinerary.tips.clone(),
            best_time_to_visit: itinerary.best_time_to_visit.clone(),
        })
    }
}

/// Renders 09:00 plus an hour offset as a zero-padded 24-hour clock string.
/// Minute arithmetic, so fractional durations stay representable.
fn clock_time(offset_hours: u32) -> String {
    let opening = NaiveTime::from_hms_opt(DAY_START.0, DAY_START.1, 0).unwrap();
    let time = opening + Duration::minutes(offset_hours as i64 * 60);
    time.format("%H:%M").to_string()
}
