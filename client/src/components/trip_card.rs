//! Trip card with an image carousel and a wishlist toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Favorite clicks from signed-out visitors go to `/login`. Signed-in toggles
//! are optimistic and revert if the wishlist call fails.

#[cfg(test)]
#[path = "trip_card_test.rs"]
mod trip_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpApi;
use crate::net::types::TripSummary;
use crate::state::auth::AuthController;

#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

#[must_use]
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Whether to show an image and whether the prev/next buttons apply.
#[must_use]
pub fn carousel_controls(image_count: usize) -> (bool, bool) {
    (image_count > 0, image_count > 1)
}

/// Whole-unit price with thousands separators, e.g. `RM 1,250`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_price(currency: &str, price: f64) -> String {
    let whole = price.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{currency} {grouped}")
}

#[component]
pub fn TripCard(trip: TripSummary) -> impl IntoView {
    let auth = expect_context::<AuthController>();
    let navigate = use_navigate();

    let image_count = trip.images.len();
    let images = StoredValue::new(trip.images.clone());
    let image_index = RwSignal::new(0_usize);
    let favorite = RwSignal::new(false);
    let trip_id = trip.trip_id.clone();

    #[cfg(feature = "hydrate")]
    if let Some(token) = auth.access_token() {
        let api = expect_context::<HttpApi>();
        let trip_id = trip_id.clone();
        leptos::task::spawn_local(async move {
            match api.wishlist_contains(&token, &trip_id).await {
                Ok(in_wishlist) => favorite.set(in_wishlist),
                Err(e) => leptos::logging::warn!("wishlist check failed for {trip_id}: {e}"),
            }
        });
    }

    let on_favorite = move |_: leptos::ev::MouseEvent| {
        let Some(token) = auth.access_token() else {
            navigate("/login", NavigateOptions::default());
            return;
        };
        let adding = !favorite.get_untracked();
        favorite.set(adding);
        #[cfg(feature = "hydrate")]
        {
            let api = expect_context::<HttpApi>();
            let trip_id = trip_id.clone();
            leptos::task::spawn_local(async move {
                let result = if adding {
                    api.add_to_wishlist(&token, &trip_id).await
                } else {
                    api.remove_from_wishlist(&token, &trip_id).await
                };
                if let Err(e) = result {
                    leptos::logging::warn!("wishlist update failed for {trip_id}: {e}");
                    favorite.set(!adding);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, &trip_id);
    };

    let current_image = move || images.with_value(|imgs| imgs.get(image_index.get()).cloned().unwrap_or_default());
    let (has_images, can_page) = carousel_controls(image_count);
    let href = trip.detail_path();
    let price = format_price(&trip.currency, trip.price);

    // Buttons stay outside the links; interactive content cannot nest in <a>.
    view! {
        <article class="trip-card">
            <div class="trip-card__media">
                <a class="trip-card__image-link" href=href.clone()>
                    <Show
                        when=move || has_images
                        fallback=|| view! { <div class="trip-card__placeholder"></div> }
                    >
                        <img class="trip-card__image" src=current_image alt=""/>
                    </Show>
                </a>
                <Show when=move || can_page>
                    <button
                        class="trip-card__nav trip-card__nav--prev"
                        on:click=move |_| image_index.update(|i| *i = prev_index(*i, image_count))
                    >
                        "‹"
                    </button>
                    <button
                        class="trip-card__nav trip-card__nav--next"
                        on:click=move |_| image_index.update(|i| *i = next_index(*i, image_count))
                    >
                        "›"
                    </button>
                </Show>
                <button
                    class="trip-card__favorite"
                    class:trip-card__favorite--active=move || favorite.get()
                    on:click=on_favorite
                >
                    {move || if favorite.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <a class="trip-card__body" href=href>
                <span class="trip-card__activity">{trip.activity_type}</span>
                <h3 class="trip-card__title">{trip.title}</h3>
                <p class="trip-card__meta">{trip.location} " · " {trip.duration} " · " {trip.difficulty}</p>
                <p class="trip-card__price">{price}</p>
            </a>
        </article>
    }
}
