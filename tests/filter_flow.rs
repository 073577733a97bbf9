use std::time::{Duration, Instant};

use events_filter::engine::filter;
use events_filter::infrastructure::{LocationProvider, MemoryHistory, ServerContext};
use events_filter::query::{build_url, parse_url};
use events_filter::ui::bridge::{ItemList, MemoryItemList, PresentationBridge};
use events_filter::ui::components::{ActiveFilters, FilterDropdown, SearchInput, SortSelect};
use events_filter::{
    ActiveFilter, AvailableFilters, DropdownKind, EventFilterProvider, FilterCriteria,
    FilterUpdate, FilterableItem, ProviderProps, SortOrder,
};

const BASE: &str = "https://example.com/events";

fn items() -> Vec<FilterableItem> {
    vec![
        FilterableItem::new("1", "Intro to Go", "2024-01-01")
            .with_topics(["go"])
            .with_location("Osaka"),
        FilterableItem::new("2", "Rust Basics", "2024-02-01")
            .with_topics(["rust"])
            .with_location("Tokyo"),
    ]
}

fn catalogue() -> Vec<FilterableItem> {
    vec![
        FilterableItem::new("a", "Go Concurrency", "2024-03-10")
            .with_description("Channels and goroutines")
            .with_topics(["go", "concurrency"])
            .with_location("Osaka"),
        FilterableItem::new("b", "Async Rust", "2024-05-02")
            .with_topics(["rust", "concurrency"])
            .with_location("Tokyo"),
        FilterableItem::new("c", "Rust in Production", "not a date")
            .with_topics(["rust"])
            .with_location("Kyoto"),
        FilterableItem::new("d", "Frontend Night", "2023-12-24T19:00:00+09:00")
            .with_topics(["javascript"])
            .with_location("Tokyo"),
        FilterableItem::new("e", "Database Internals", "2024-01-15")
            .with_description("Storage engines in Rust and Go")
            .with_topics(["databases"]),
    ]
}

fn ids(items: &[FilterableItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

fn props() -> ProviderProps {
    ProviderProps::new(items()).with_available_filters(AvailableFilters {
        topics: vec!["go".into(), "rust".into()],
        locations: vec!["Osaka".into(), "Tokyo".into()],
    })
}

#[test]
fn default_criteria_sort_newest_first() {
    let out = filter(&items(), &FilterCriteria::default());
    assert_eq!(ids(&out), vec!["2", "1"]);
}

#[test]
fn topic_filter_keeps_matching_items() {
    let criteria = FilterCriteria {
        topics: vec!["go".into()],
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&items(), &criteria)), vec!["1"]);
}

#[test]
fn location_filter_ignores_case() {
    let criteria = FilterCriteria {
        location: "tokyo".into(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&items(), &criteria)), vec!["2"]);
}

#[test]
fn search_tolerates_typos() {
    let criteria = FilterCriteria {
        search: "Rst Basics".into(),
        ..FilterCriteria::default()
    };
    assert!(ids(&filter(&items(), &criteria)).contains(&"2"));
}

#[test]
fn clear_all_restores_full_listing() {
    let mut provider = EventFilterProvider::new(props(), MemoryHistory::new(BASE)).mount();
    provider.update_filter(FilterUpdate::Topics(vec!["go".into()]));
    assert_eq!(ids(provider.store().filtered_items()), vec!["1"]);

    provider.clear_all_filters();
    assert_eq!(ids(provider.store().filtered_items()), vec!["2", "1"]);
    assert_eq!(provider.browser().current().url, BASE);
}

#[test]
fn date_desc_output_is_totally_ordered() {
    let out = filter(&catalogue(), &FilterCriteria::default());
    assert_eq!(ids(&out), vec!["b", "a", "e", "d", "c"]);

    let asc = FilterCriteria {
        sort: SortOrder::DateAsc,
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalogue(), &asc)), vec!["d", "e", "a", "b", "c"]);
}

#[test]
fn first_topic_never_grows_the_result() {
    let base = FilterCriteria::default();
    let unfiltered = filter(&catalogue(), &base).len();
    for topic in ["go", "rust", "concurrency", "javascript", "databases", "missing"] {
        let narrowed = FilterCriteria {
            topics: vec![topic.to_string()],
            ..base.clone()
        };
        assert!(filter(&catalogue(), &narrowed).len() <= unfiltered, "topic {topic}");
    }
}

#[test]
fn criteria_survive_a_url_round_trip() {
    let samples = [
        FilterCriteria::default(),
        FilterCriteria {
            search: "rust & go, together".into(),
            topics: vec!["go".into(), "c++".into(), "data science".into()],
            location: "São Paulo".into(),
            sort: SortOrder::DateAsc,
        },
        FilterCriteria {
            location: "Tokyo".into(),
            ..FilterCriteria::default()
        },
    ];
    for criteria in samples {
        let url = build_url("https://example.com/events?view=gallery#list", &criteria).expect("build url");
        assert_eq!(parse_url(&url).expect("parse url"), criteria, "{url}");
    }
}

#[test]
fn mount_keeps_incoming_query_and_later_changes_push_history() {
    let history = MemoryHistory::new("https://example.com/events?utm_source=mail&topics=go");
    let mut provider = EventFilterProvider::new(props(), history).mount();
    assert_eq!(provider.browser().entries().len(), 1);
    assert_eq!(provider.store().criteria().topics, vec!["go"]);

    provider.update_filter(FilterUpdate::Sort(SortOrder::DateAsc));
    assert_eq!(
        provider.browser().current().url,
        "https://example.com/events?utm_source=mail&topics=go&sort=date-asc"
    );
    assert_eq!(provider.browser().entries().len(), 2);

    assert!(!provider.update_filter(FilterUpdate::Sort(SortOrder::DateAsc)));
    assert_eq!(provider.browser().entries().len(), 2);
}

#[test]
fn back_and_forward_restore_filters_without_pushing() {
    let mut provider = EventFilterProvider::new(props(), MemoryHistory::new(BASE)).mount();
    provider.update_filter(FilterUpdate::ToggleTopic("go".into()));
    provider.update_filter(FilterUpdate::Location("Osaka".into()));
    assert_eq!(provider.browser().entries().len(), 3);

    let state = provider.browser_mut().back().expect("an earlier entry");
    provider.popstate(state);
    assert_eq!(provider.store().criteria().topics, vec!["go"]);
    assert!(provider.store().criteria().location.is_empty());

    let state = provider.browser_mut().back().expect("the initial entry");
    assert!(state.is_none());
    assert!(!provider.popstate(state));
    assert_eq!(provider.store().criteria().topics, vec!["go"]);

    let state = provider.browser_mut().forward().expect("a later entry");
    provider.popstate(state);
    let state = provider.browser_mut().forward().expect("the newest entry");
    provider.popstate(state);
    assert_eq!(provider.store().criteria().location, "Osaka");
    assert_eq!(provider.browser().entries().len(), 3);
}

#[test]
fn bridge_applies_latest_result_on_frame() {
    let bridge = PresentationBridge::new(MemoryItemList::new(["1", "2"]), "events").into_shared();
    let mut provider = EventFilterProvider::new(props(), MemoryHistory::new(BASE))
        .with_observer(bridge.clone())
        .mount();

    assert_eq!(bridge.borrow().list().count_text(), "2 events");
    assert!(bridge.on_animation_frame());
    assert_eq!(bridge.borrow().list().item_ids(), vec!["2", "1"]);

    provider.update_filter(FilterUpdate::Location("Osaka".into()));
    provider.update_filter(FilterUpdate::Sort(SortOrder::DateAsc));
    assert_eq!(bridge.borrow().list().visible_ids(), vec!["2", "1"]);

    assert!(bridge.on_animation_frame());
    let b = bridge.borrow();
    assert_eq!(b.list().visible_ids(), vec!["1"]);
    assert_eq!(b.list().item_ids(), vec!["1", "2"]);
    assert_eq!(b.list().count_text(), "1 events");
    assert_eq!(b.list().events().len(), 3);
}

#[test]
fn unrelated_history_state_keeps_filters() {
    let mut provider = EventFilterProvider::new(props(), MemoryHistory::new(BASE)).mount();
    provider.update_filter(FilterUpdate::ToggleTopic("go".into()));

    let scroll_state = serde_json::json!({"index": 3, "scrollX": 0, "scrollY": 120});
    assert!(!provider.popstate(Some(scroll_state)));
    assert_eq!(provider.store().criteria().topics, vec!["go"]);
    assert_eq!(ids(provider.store().filtered_items()), vec!["1"]);
}

#[test]
fn blank_search_keeps_the_full_listing() {
    let mut provider = EventFilterProvider::new(props(), MemoryHistory::new(BASE)).mount();
    assert!(provider.update_filter(FilterUpdate::Search(" ".into())));
    assert_eq!(ids(provider.store().filtered_items()), vec!["2", "1"]);
}

#[test]
fn widgets_drive_the_provider() {
    let mut provider = EventFilterProvider::new(props(), MemoryHistory::new(BASE)).mount();

    let mut search = SearchInput::new(Some(provider.store())).expect("inside provider");
    let t0 = Instant::now();
    search.on_input("Rust", t0);
    assert!(search.poll(t0 + Duration::from_millis(299)).is_none());
    let event = search.poll(t0 + Duration::from_millis(300)).expect("debounce elapsed");
    assert!(provider.dispatch(event));
    search.sync_from_store(provider.store().criteria());
    assert_eq!(search.value(), "Rust");
    assert_eq!(ids(provider.store().filtered_items()), vec!["2"]);

    let mut topics = FilterDropdown::new(DropdownKind::Topics, Some(provider.store())).expect("inside provider");
    provider.dispatch(topics.choose("rust", true));
    assert_eq!(topics.badge(provider.store().criteria()), 1);

    let sort = SortSelect::new(Some(provider.store())).expect("inside provider");
    provider.dispatch(sort.select("date-asc"));

    let chips = ActiveFilters::chips(provider.store().criteria());
    assert_eq!(chips.len(), 2);
    provider.dispatch(ActiveFilters::remove(ActiveFilter::Search("Rust".into())));
    search.sync_from_store(provider.store().criteria());
    assert_eq!(search.value(), "");

    assert_eq!(
        provider.browser().current().url,
        "https://example.com/events?topics=rust&sort=date-asc"
    );

    provider.dispatch(ActiveFilters::clear_all());
    assert!(!ActiveFilters::is_visible(provider.store().criteria()));
}

#[test]
fn widgets_outside_a_provider_fail_fast() {
    assert!(SearchInput::new(None).is_err());
    assert!(SortSelect::new(None).is_err());
    assert!(FilterDropdown::new(DropdownKind::Location, None).is_err());
}

#[test]
fn server_context_filters_without_history() {
    let mut provider = EventFilterProvider::new(props(), ServerContext).mount();
    assert!(!provider.browser().is_browser());
    assert!(provider.update_filter(FilterUpdate::Location("Osaka".into())));
    assert_eq!(ids(provider.store().filtered_items()), vec!["1"]);
}
