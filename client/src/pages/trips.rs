//! Trip listing driven by the `search` / `activity_type` / `page` query.

#[cfg(test)]
#[path = "trips_test.rs"]
mod trips_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::search_bar::SearchBar;
use crate::components::trip_card::TripCard;
#[cfg(feature = "hydrate")]
use crate::net::api::HttpApi;
use crate::net::types::{TripQuery, TripSummary};

pub const PAGE_SIZE: u32 = 12;

/// Issues increasing request numbers so only the newest response is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    #[must_use]
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Listing filters from raw query-string values.
#[must_use]
pub fn trip_query_from(search: Option<String>, activity_type: Option<String>, page: Option<String>) -> TripQuery {
    TripQuery {
        search,
        activity_type,
        featured: None,
        page: page.and_then(|p| p.parse::<u32>().ok()).filter(|p| *p >= 1),
        limit: Some(PAGE_SIZE),
    }
}

#[component]
pub fn TripsPage() -> impl IntoView {
    let query_map = use_query_map();
    let filters = Memo::new(move |_| {
        query_map.with(|q| trip_query_from(q.get("search"), q.get("activity_type"), q.get("page")))
    });
    let trips = RwSignal::new(Vec::<TripSummary>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<HttpApi>();
        let requests = StoredValue::new(RequestSeq::default());
        Effect::new(move || {
            let query = filters.get();
            let api = api.clone();
            let Some(ticket) = requests.try_update_value(RequestSeq::issue) else {
                return;
            };
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let result = api.list_trips(&query).await;
                // A newer filter change owns the listing now.
                if !requests.try_with_value(|seq| seq.is_latest(ticket)).unwrap_or(false) {
                    return;
                }
                match result {
                    Ok(list) => trips.set(list.trips),
                    Err(e) => {
                        leptos::logging::warn!("trip listing failed: {e}");
                        trips.set(Vec::new());
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
        });
    }

    let initial = filters.get_untracked();

    view! {
        <section class="trips-page">
            <SearchBar
                initial_query=initial.search.unwrap_or_default()
                initial_activity=initial.activity_type
            />
            <Show when=move || !loading.get() fallback=|| view! { <p class="trips-page__status">"Loading trips..."</p> }>
                <Show when=move || error.get().is_none() fallback=move || view! { <p class="trips-page__status">{move || error.get().unwrap_or_default()}</p> }>
                    <Show when=move || !trips.get().is_empty() fallback=|| view! { <p class="trips-page__status">"No adventures match your search."</p> }>
                        <div class="trip-grid">
                            <For
                                each=move || trips.get()
                                key=|trip| trip.trip_id.clone()
                                children=move |trip: TripSummary| view! { <TripCard trip=trip/> }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}
