//! Site footer with contact details from the content API.
//!
//! The fallback literals render immediately; the fetched section replaces
//! them once it arrives.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpApi;
use crate::net::types::FooterContent;

/// `wa.me` chat link for a WhatsApp number written in any format.
#[must_use]
pub fn whatsapp_link(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

/// `tel:` link keeping only the leading `+` and digits.
#[must_use]
pub fn tel_link(number: &str) -> String {
    let cleaned: String = number
        .trim()
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();
    format!("tel:{cleaned}")
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = RwSignal::new(FooterContent::default());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<HttpApi>();
        leptos::task::spawn_local(async move {
            content.set(api.footer_content().await);
        });
    }

    view! {
        <footer class="footer">
            <div class="footer__about">
                <h3>"Seeker Adventure"</h3>
                <p>{move || content.with(|c| c.company_description.clone())}</p>
            </div>
            <div class="footer__contact">
                <h4>"Contact"</h4>
                <a href=move || content.with(|c| tel_link(&c.phone_1))>{move || content.with(|c| c.phone_1.clone())}</a>
                <a href=move || content.with(|c| tel_link(&c.phone_2))>{move || content.with(|c| c.phone_2.clone())}</a>
                <a href=move || content.with(|c| format!("mailto:{}", c.email))>{move || content.with(|c| c.email.clone())}</a>
                <span>{move || content.with(|c| c.location.clone())}</span>
            </div>
            <div class="footer__social">
                <a href=move || content.with(|c| whatsapp_link(&c.whatsapp))>"WhatsApp"</a>
                <a href=move || content.with(|c| c.facebook_url.clone())>"Facebook"</a>
                <a href=move || content.with(|c| c.instagram_url.clone())>"Instagram"</a>
                <a href=move || content.with(|c| c.tiktok_url.clone())>"TikTok"</a>
            </div>
        </footer>
    }
}
