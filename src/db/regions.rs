use crate::models::planner::{
    ActivityType, CostTier, Region, RegionAttraction, RegionCosts, RegionItinerary,
};

fn attraction(
    name: &str,
    description: &str,
    duration_hours: u32,
    activity_type: ActivityType,
) -> RegionAttraction {
    RegionAttraction {
        name: name.to_string(),
        description: description.to_string(),
        duration_hours,
        activity_type,
    }
}

fn tips(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Builds the immutable regional reference tables used by the trip planner.
/// Constructed once at startup and shared read-only across workers.
pub fn pakistan_catalog() -> RegionCatalog {
    RegionCatalog {
        regions: vec![
            Region {
                name: "Northern Pakistan".to_string(),
                costs: RegionCosts {
                    accommodation: CostTier { budget: 30, standard: 80, luxury: 200 },
                    food: CostTier { budget: 15, standard: 30, luxury: 60 },
                    transportation: CostTier { budget: 20, standard: 50, luxury: 150 },
                    activities: CostTier { budget: 25, standard: 50, luxury: 100 },
                },
                itinerary: RegionItinerary {
                    attractions: vec![
                        attraction(
                            "Hunza Valley",
                            "Spectacular mountain valley with views of Rakaposhi peak and ancient watchtowers",
                            8,
                            ActivityType::Nature,
                        ),
                        attraction(
                            "Baltit Fort",
                            "Historic fort offering panoramic views of Hunza Valley",
                            3,
                            ActivityType::Culture,
                        ),
                        attraction(
                            "Attabad Lake",
                            "Stunning turquoise lake perfect for boating and photography",
                            4,
                            ActivityType::Nature,
                        ),
                        attraction(
                            "Fairy Meadows",
                            "Scenic grassland with spectacular views of Nanga Parbat",
                            8,
                            ActivityType::Nature,
                        ),
                        attraction(
                            "Khunjerab Pass",
                            "World's highest paved border crossing with stunning views",
                            6,
                            ActivityType::Sight,
                        ),
                        attraction(
                            "Naltar Valley",
                            "Beautiful valley known for its colorful lakes and skiing",
                            6,
                            ActivityType::Activity,
                        ),
                    ],
                    recommended_days: vec![5, 7, 10],
                    best_time_to_visit: "May to October".to_string(),
                    tips: tips(&[
                        "Pack warm clothes as temperatures can drop significantly",
                        "Book accommodations in advance during peak season",
                        "Hire a local guide for mountain treks",
                        "Carry altitude sickness medication",
                    ]),
                },
            },
            Region {
                name: "Coastal Pakistan".to_string(),
                costs: RegionCosts {
                    accommodation: CostTier { budget: 25, standard: 70, luxury: 180 },
                    food: CostTier { budget: 12, standard: 25, luxury: 50 },
                    transportation: CostTier { budget: 15, standard: 40, luxury: 120 },
                    activities: CostTier { budget: 20, standard: 40, luxury: 80 },
                },
                itinerary: RegionItinerary {
                    attractions: vec![
                        attraction(
                            "Clifton Beach",
                            "Popular beach in Karachi with camel rides and food stalls",
                            4,
                            ActivityType::Activity,
                        ),
                        attraction(
                            "Manora Island",
                            "Historic lighthouse and beach perfect for day trips",
                            5,
                            ActivityType::Sight,
                        ),
                        attraction(
                            "French Beach",
                            "Pristine private beach ideal for swimming and sunbathing",
                            6,
                            ActivityType::Nature,
                        ),
                        attraction(
                            "Kund Malir",
                            "Remote beach along the Makran Coast Highway",
                            4,
                            ActivityType::Nature,
                        ),
                        attraction(
                            "Gwadar Port",
                            "Deep-sea port with beautiful coastal views",
                            3,
                            ActivityType::Sight,
                        ),
                    ],
                    recommended_days: vec![3, 5, 7],
                    best_time_to_visit: "October to March".to_string(),
                    tips: tips(&[
                        "Visit beaches early morning or late afternoon to avoid heat",
                        "Respect local customs and dress modestly",
                        "Carry sunscreen and stay hydrated",
                        "Check tide timings for beach activities",
                    ]),
                },
            },
            Region {
                name: "Central Pakistan".to_string(),
                costs: RegionCosts {
                    accommodation: CostTier { budget: 35, standard: 90, luxury: 250 },
                    food: CostTier { budget: 18, standard: 35, luxury: 70 },
                    transportation: CostTier { budget: 25, standard: 60, luxury: 180 },
                    activities: CostTier { budget: 30, standard: 60, luxury: 120 },
                },
                itinerary: RegionItinerary {
                    attractions: vec![
                        attraction(
                            "Badshahi Mosque",
                            "Magnificent Mughal-era mosque in Lahore",
                            3,
                            ActivityType::Culture,
                        ),
                        attraction(
                            "Lahore Fort",
                            "UNESCO World Heritage site with stunning architecture",
                            4,
                            ActivityType::Culture,
                        ),
                        attraction(
                            "Faisal Mosque",
                            "Iconic modern mosque in Islamabad",
                            2,
                            ActivityType::Culture,
                        ),
                        attraction(
                            "Margalla Hills",
                            "Popular hiking trails with city views",
                            5,
                            ActivityType::Activity,
                        ),
                        attraction(
                            "Walled City of Lahore",
                            "Historic old city with bazaars and traditional food",
                            6,
                            ActivityType::Culture,
                        ),
                        attraction(
                            "Pakistan Monument",
                            "National monument with museum in Islamabad",
                            3,
                            ActivityType::Culture,
                        ),
                    ],
                    recommended_days: vec![4, 6, 8],
                    best_time_to_visit: "November to March".to_string(),
                    tips: tips(&[
                        "Visit historical sites early to avoid crowds",
                        "Try local street food in recommended areas",
                        "Use ride-hailing apps for convenient transportation",
                        "Book guided tours for historical sites",
                    ]),
                },
            },
        ],
    }
}

/// Ordered collection of supported regions. Iteration order matters: the chat
/// interpreter matches region names in this order.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|region| region.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_three_regions_in_order() {
        let catalog = pakistan_catalog();
        let names: Vec<&str> = catalog.region_names().collect();
        assert_eq!(
            names,
            vec!["Northern Pakistan", "Coastal Pakistan", "Central Pakistan"]
        );
    }

    #[test]
    fn every_region_has_attractions_and_tips() {
        let catalog = pakistan_catalog();
        for region in catalog.regions() {
            assert!(!region.itinerary.attractions.is_empty());
            assert!(!region.itinerary.tips.is_empty());
            assert!(!region.itinerary.best_time_to_visit.is_empty());
            for spot in &region.itinerary.attractions {
                assert!(spot.duration_hours > 0, "{} has zero duration", spot.name);
            }
        }
    }

    #[test]
    fn region_lookup_is_case_sensitive() {
        let catalog = pakistan_catalog();
        assert!(catalog.region("Northern Pakistan").is_some());
        assert!(catalog.region("northern pakistan").is_none());
    }
}
