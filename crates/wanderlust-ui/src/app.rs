//! Main application component.

use leptos::prelude::*;
use wanderlust_core::FooterLink;

use crate::components::{BrowserClock, Footer, provide_clock};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    provide_clock(BrowserClock);

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <div class="app-shell bg-color-background font-sans">
            <main class="app-main"></main>
            <Footer
                on_about_us=navigate(FooterLink::AboutUs)
                on_privacy_policy=navigate(FooterLink::PrivacyPolicy)
                on_contact_us=navigate(FooterLink::ContactUs)
                on_support=navigate(FooterLink::Support)
            />
        </div>
    }
}

/// Footer handler for `link`. Page routing lives in the host shell.
fn navigate(link: FooterLink) -> Callback<()> {
    Callback::new(move |()| {
        leptos::logging::log!("Footer navigation: {}", link);
    })
}
