use outta_core::events::Event;
use outta_core::filter::FilterState;

/// Derive the active deck from the catalog: keep events that survive
/// the filter, in catalog order. Pure and stable; the category filter
/// and the query filter compose by AND.
pub fn filter_events(events: &[Event], filter: &FilterState) -> Vec<Event> {
    events
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outta_core::events::Category;
    use outta_core::filter::CategoryFilter;
    use outta_core::ids::EventId;

    fn event(id: &str, title: &str, category: Category) -> Event {
        Event {
            id: EventId::from_raw(id),
            title: title.to_string(),
            category,
            description: format!("{title} description"),
            location: "Saket".to_string(),
            area: "South Delhi".to_string(),
            date: "Feb 28 \u{2022} 8:00 PM".to_string(),
            price: "\u{20b9}499".to_string(),
            capacity: 120,
            attending: 60,
            friends_interested: 4,
            image_url: String::new(),
        }
    }

    fn catalog() -> Vec<Event> {
        vec![
            event("evt_1", "Jazz Under the Stars", Category::Music),
            event("evt_2", "Delhi Tech Conference", Category::Tech),
            event("evt_3", "Smooth Jazz Brunch", Category::Music),
            event("evt_4", "Jazz History Walk", Category::Cultural),
        ]
    }

    #[test]
    fn unfiltered_returns_catalog_in_order() {
        let events = catalog();
        let deck = filter_events(&events, &FilterState::default());
        assert_eq!(deck, events);
    }

    #[test]
    fn category_only() {
        let deck = filter_events(
            &catalog(),
            &FilterState::new(CategoryFilter::Only(Category::Music), ""),
        );
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].id.as_str(), "evt_1");
        assert_eq!(deck[1].id.as_str(), "evt_3");
    }

    #[test]
    fn category_and_query_compose() {
        let deck = filter_events(
            &catalog(),
            &FilterState::new(CategoryFilter::Only(Category::Music), "jazz"),
        );
        // evt_4 matches the query but not the category.
        assert_eq!(deck.len(), 2);
        assert!(deck.iter().all(|e| e.category == Category::Music));
    }

    #[test]
    fn query_without_matches_yields_empty_deck() {
        let deck = filter_events(&catalog(), &FilterState::new(CategoryFilter::All, "zz"));
        assert!(deck.is_empty());
    }

    #[test]
    fn filtering_is_pure() {
        let events = catalog();
        let filter = FilterState::new(CategoryFilter::Only(Category::Tech), "");
        let a = filter_events(&events, &filter);
        let b = filter_events(&events, &filter);
        assert_eq!(a, b);
        // The source catalog is untouched.
        assert_eq!(events.len(), 4);
    }
}
