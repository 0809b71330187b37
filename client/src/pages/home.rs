//! Landing page: hero, search, and featured trips.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::trip_card::TripCard;
#[cfg(feature = "hydrate")]
use crate::net::api::HttpApi;
#[cfg(feature = "hydrate")]
use crate::net::types::TripQuery;
use crate::net::types::TripSummary;

#[cfg(feature = "hydrate")]
const FEATURED_LIMIT: u32 = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = RwSignal::new(Vec::<TripSummary>::new());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<HttpApi>();
        leptos::task::spawn_local(async move {
            let query = TripQuery { featured: Some(true), limit: Some(FEATURED_LIMIT), ..TripQuery::default() };
            match api.list_trips(&query).await {
                Ok(list) => featured.set(list.trips),
                Err(e) => leptos::logging::warn!("featured trips unavailable: {e}"),
            }
        });
    }

    view! {
        <section class="hero">
            <h1 class="hero__title">"Discover Your Next Adventure"</h1>
            <p class="hero__subtitle">
                "Explore breathtaking destinations with expert guides. From mountain peaks to ocean depths, your adventure starts here."
            </p>
            <SearchBar/>
        </section>
        <Show when=move || !featured.get().is_empty()>
            <section class="featured">
                <h2>"Featured Adventures"</h2>
                <div class="trip-grid">
                    <For
                        each=move || featured.get()
                        key=|trip| trip.trip_id.clone()
                        children=move |trip: TripSummary| view! { <TripCard trip=trip/> }
                    />
                </div>
                <a class="featured__more" href="/trips">"View all adventures"</a>
            </section>
        </Show>
    }
}
