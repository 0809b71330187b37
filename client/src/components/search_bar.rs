//! Trip search widget: free-text query plus activity filter.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::TripQuery;

/// Activity filter options as `(value, label)`.
pub const ACTIVITY_TYPES: [(&str, &str); 7] = [
    ("all", "All Activities"),
    ("hiking", "Hiking"),
    ("camping", "Camping"),
    ("diving", "Diving"),
    ("kayaking", "Kayaking"),
    ("canyoning", "Canyoning"),
    ("paragliding", "Paragliding"),
];

/// Listing route for a search, omitting empty filters.
#[must_use]
pub fn search_target(query: &str, activity: &str) -> String {
    let filters = TripQuery {
        search: Some(query.to_owned()),
        activity_type: Some(activity.to_owned()),
        ..TripQuery::default()
    };
    let pairs = filters.to_pairs();
    if pairs.is_empty() {
        return "/trips".to_owned();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("/trips?{encoded}")
}

#[component]
pub fn SearchBar(
    #[prop(optional, into)] initial_query: String,
    #[prop(optional_no_strip)] initial_activity: Option<String>,
) -> impl IntoView {
    let navigate = use_navigate();
    let query = RwSignal::new(initial_query);
    let activity = RwSignal::new(initial_activity.unwrap_or_else(|| "all".to_owned()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&search_target(&query.get(), &activity.get()), NavigateOptions::default());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search adventures..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select
                class="search-bar__activity"
                prop:value=move || activity.get()
                on:change=move |ev| activity.set(event_target_value(&ev))
            >
                {ACTIVITY_TYPES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <button class="search-bar__submit" type="submit">"Search"</button>
        </form>
    }
}
