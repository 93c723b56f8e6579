use crate::db::regions::RegionCatalog;
use crate::models::planner::{
    ActivityType, ExpenseEstimate, ItineraryPlan, TravelStyle,
};
use crate::services::expense_service::ExpenseService;
use crate::services::itinerary_service::ItineraryService;

pub struct ChatService;

impl ChatService {
    /// Turn one free-text message into a reply: either the combined expense
    /// breakdown + itinerary, or the first applicable clarifying prompt.
    ///
    /// Slot extraction is literal token matching, not NLP: the day and people
    /// counts are read from the single token immediately before the keyword,
    /// so "5 days" parses and "five days" deliberately does not.
    pub fn interpret(catalog: &RegionCatalog, message: &str) -> String {
        let lower = message.to_lowercase();
        let words: Vec<String> = lower
            .split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string()
            })
            .collect();

        let region = catalog
            .region_names()
            .find(|name| lower.contains(&name.to_lowercase()));
        let style = TravelStyle::ALL
            .into_iter()
            .find(|style| words.iter().any(|word| word == style.keyword()));
        let days = count_before_keyword(&words, &["days", "day"]);
        let people = count_before_keyword(&words, &["people", "person", "persons"]);

        let mut preferences: Vec<ActivityType> = ActivityType::ALL
            .into_iter()
            .filter(|pref| words.iter().any(|word| word == pref.keyword()))
            .collect();
        if preferences.is_empty() {
            preferences = ActivityType::ALL.to_vec();
        }

        if let (Some(region), Some(style), Some(days), Some(people)) =
            (region, style, days, people)
        {
            let computed = ExpenseService::estimate(catalog, region, style, days, people)
                .and_then(|expense| {
                    ItineraryService::generate(catalog, region, days, &preferences)
                        .map(|itinerary| (expense, itinerary))
                });

            return match computed {
                Ok((expense, itinerary)) => {
                    Self::format_reply(region, style, days, people, &expense, &itinerary)
                }
                Err(_) => "I couldn't calculate the expenses and itinerary. Please try again with valid information.".to_string(),
            };
        }

        if region.is_none() {
            return "Please specify a region (Northern, Coastal, or Central Pakistan).".to_string();
        }
        if style.is_none() {
            return "What's your preferred travel style (budget, standard, or luxury)?".to_string();
        }
        if days.is_none() {
            return "How many days are you planning to stay?".to_string();
        }
        if people.is_none() {
            return "For how many people should I calculate the expenses?".to_string();
        }

        "I couldn't understand that. Please provide region, style, days, and number of people."
            .to_string()
    }

    fn format_reply(
        region: &str,
        style: TravelStyle,
        days: u32,
        people: u32,
        expense: &ExpenseEstimate,
        itinerary: &ItineraryPlan,
    ) -> String {
        format!(
            "{}\n\n📅 Suggested Itinerary:\n{}\n\n🌟 Best Time to Visit: {}\n\n💡 Travel Tips:\n{}",
            Self::format_expense(region, style, days, people, expense),
            Self::format_itinerary(itinerary),
            itinerary.best_time_to_visit,
            itinerary
                .tips
                .iter()
                .map(|tip| format!("• {}", tip))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    fn format_expense(
        region: &str,
        style: TravelStyle,
        days: u32,
        people: u32,
        expense: &ExpenseEstimate,
    ) -> String {
        format!(
            "Here's the expense breakdown for {} people in {} for {} days ({} style):\n\n\
             🏨 Accommodation: ${}\n\
             🍽️ Food: ${}\n\
             🚗 Transportation: ${}\n\
             🎯 Activities: ${}\n\n\
             💰 Total estimated cost: ${}\n\n\
             This includes daily expenses for accommodation, food, local transportation, and activities. Prices may vary based on season and availability.",
            people,
            region,
            days,
            style,
            expense.breakdown.accommodation,
            expense.breakdown.food,
            expense.breakdown.transportation,
            expense.breakdown.activities,
            expense.total,
        )
    }

    fn format_itinerary(itinerary: &ItineraryPlan) -> String {
        itinerary
            .daily_plan
            .iter()
            .map(|day| {
                let activities = day
                    .activities
                    .iter()
                    .map(|visit| {
                        format!(
                            "{} - {}: {}\n  {}",
                            visit.start_time,
                            visit.end_time,
                            visit.attraction.name,
                            visit.attraction.description
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("\nDay {}:\n{}", day.day, activities)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Finds the first of `keywords` among the tokens and parses the token right
/// before it as a positive count. A keyword in first position has no token
/// before it, and zero or unparsable values count as missing.
fn count_before_keyword(words: &[String], keywords: &[&str]) -> Option<u32> {
    let index = words
        .iter()
        .position(|word| keywords.contains(&word.as_str()))?;
    if index == 0 {
        return None;
    }
    words[index - 1].parse::<u32>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::regions::pakistan_catalog;

    fn reply(message: &str) -> String {
        let catalog = pakistan_catalog();
        ChatService::interpret(&catalog, message)
    }

    #[test]
    fn full_request_returns_combined_reply() {
        let answer = reply("5 days in Northern Pakistan for 2 people, standard style");
        assert!(answer.contains("expense breakdown for 2 people in Northern Pakistan for 5 days (standard style)"));
        assert!(answer.contains("🏨 Accommodation: $400"));
        assert!(answer.contains("🍽️ Food: $300"));
        assert!(answer.contains("🚗 Transportation: $250"));
        assert!(answer.contains("🎯 Activities: $500"));
        assert!(answer.contains("💰 Total estimated cost: $1450"));
        assert!(answer.contains("📅 Suggested Itinerary:"));
        assert!(answer.contains("Day 1:"));
        assert!(answer.contains("🌟 Best Time to Visit: May to October"));
        assert!(answer.contains("• Pack warm clothes as temperatures can drop significantly"));
    }

    #[test]
    fn itinerary_days_never_exceed_request() {
        let answer = reply("3 days in Coastal Pakistan for 4 people, budget style");
        assert!(!answer.contains("Day 4:"));
    }

    #[test]
    fn missing_region_is_asked_first() {
        assert_eq!(
            reply("I want to visit Pakistan"),
            "Please specify a region (Northern, Coastal, or Central Pakistan)."
        );
    }

    #[test]
    fn missing_style_is_asked_second() {
        assert_eq!(
            reply("5 days in Northern Pakistan for 2 people"),
            "What's your preferred travel style (budget, standard, or luxury)?"
        );
    }

    #[test]
    fn missing_days_is_asked_third() {
        assert_eq!(
            reply("Northern Pakistan for 2 people, luxury"),
            "How many days are you planning to stay?"
        );
    }

    #[test]
    fn missing_people_is_asked_fourth() {
        assert_eq!(
            reply("7 days in Central Pakistan, budget"),
            "For how many people should I calculate the expenses?"
        );
    }

    #[test]
    fn region_match_is_substring_based() {
        // Substring containment is the historical matching rule, so a region
        // name buried inside a longer phrase still resolves.
        let answer = reply("thinking about northern pakistan highlights, 2 days, 2 people, budget");
        assert!(answer.contains("Northern Pakistan"));
        assert!(answer.contains("💰 Total estimated cost:"));
    }

    #[test]
    fn spelled_out_numbers_do_not_parse() {
        // Known limitation: only the literal token before the keyword is read.
        assert_eq!(
            reply("five days in Northern Pakistan for 2 people, budget"),
            "How many days are you planning to stay?"
        );
    }

    #[test]
    fn keyword_in_first_position_has_no_count() {
        assert_eq!(
            reply("days in Northern Pakistan? 2 people, budget"),
            "How many days are you planning to stay?"
        );
    }

    #[test]
    fn zero_counts_are_treated_as_missing() {
        assert_eq!(
            reply("0 days in Northern Pakistan for 2 people, budget"),
            "How many days are you planning to stay?"
        );
    }

    #[test]
    fn punctuation_next_to_tokens_is_ignored() {
        let answer = reply("4 days in Coastal Pakistan for 3 people, standard.");
        assert!(answer.contains("💰 Total estimated cost:"));
    }

    #[test]
    fn preference_tokens_narrow_the_itinerary() {
        let answer = reply("2 days in Northern Pakistan for 2 people, standard, nature only");
        // Nature pool starts with Hunza Valley (8h) then Attabad Lake.
        assert!(answer.contains("Hunza Valley"));
        assert!(!answer.contains("Khunjerab Pass"));
        assert!(!answer.contains("Baltit Fort"));
    }

    #[test]
    fn style_keyword_must_be_a_whole_token() {
        // "budgeting" must not count as the budget style.
        assert_eq!(
            reply("budgeting 5 days in Northern Pakistan for 2 people"),
            "What's your preferred travel style (budget, standard, or luxury)?"
        );
    }
}
