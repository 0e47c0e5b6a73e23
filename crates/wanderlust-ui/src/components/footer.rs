//! Footer component.
//!
//! Static branding, four navigation buttons and a copyright line. Navigation
//! is delegated to the caller's callbacks; the footer keeps no state.

use std::sync::Arc;

use leptos::prelude::*;
use wanderlust_core::{BRAND_NAME, Clock, FooterLink, copyright_line_now};

use crate::theme::classes;

/// The four navigation callbacks, owned by the parent.
#[derive(Clone, Copy)]
pub struct FooterActions {
    /// "About Us" handler.
    pub about_us: Callback<()>,
    /// "Privacy Policy" handler.
    pub privacy_policy: Callback<()>,
    /// "Contact Us" handler.
    pub contact_us: Callback<()>,
    /// "Support" handler.
    pub support: Callback<()>,
}

impl FooterActions {
    /// The callback behind `link`.
    pub const fn callback(&self, link: FooterLink) -> Callback<()> {
        match link {
            FooterLink::AboutUs => self.about_us,
            FooterLink::PrivacyPolicy => self.privacy_policy,
            FooterLink::ContactUs => self.contact_us,
            FooterLink::Support => self.support,
        }
    }

    /// Run the callback behind `link` once.
    pub fn run(&self, link: FooterLink) {
        self.callback(link).run(());
    }
}

/// Clock used for render-time values, provided through context.
#[derive(Clone)]
pub struct ClockContext(pub Arc<dyn Clock>);

/// Provide `clock` to every component below the current owner.
pub fn provide_clock(clock: impl Clock + 'static) {
    provide_context(ClockContext(Arc::new(clock)));
}

/// The clock from context, or the host clock when none was provided.
pub fn use_clock() -> Arc<dyn Clock> {
    use_context::<ClockContext>().map_or_else(host_clock, |ctx| ctx.0)
}

#[cfg(target_arch = "wasm32")]
fn host_clock() -> Arc<dyn Clock> {
    Arc::new(BrowserClock)
}

#[cfg(not(target_arch = "wasm32"))]
fn host_clock() -> Arc<dyn Clock> {
    Arc::new(wanderlust_core::SystemClock)
}

/// Clock backed by the browser's `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

/// Everything the footer shows, computed for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContent {
    /// Brand wordmark.
    pub brand: &'static str,
    /// Navigation links in display order.
    pub links: [FooterLink; 4],
    /// Copyright line for the render's year.
    pub copyright: String,
}

impl FooterContent {
    /// Compute the footer content against `clock`.
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            brand: BRAND_NAME,
            links: FooterLink::ALL,
            copyright: copyright_line_now(clock),
        }
    }
}

/// Application footer.
#[component]

pub fn Footer(
    /// Runs when "About Us" is clicked.
    on_about_us: Callback<()>,
    /// Runs when "Privacy Policy" is clicked.
    on_privacy_policy: Callback<()>,
    /// Runs when "Contact Us" is clicked.
    on_contact_us: Callback<()>,
    /// Runs when "Support" is clicked.
    on_support: Callback<()>,
) -> impl IntoView {
    let actions = FooterActions {
        about_us: on_about_us,
        privacy_policy: on_privacy_policy,
        contact_us: on_contact_us,
        support: on_support,
    };
    let content = FooterContent::new(use_clock().as_ref());

    view! {
        <footer class=format!("app-footer {}", classes::FOOTER)>
            <div class="footer-content">
                <div class="footer-brand">
                    <svg
                        class=format!("footer-logo {}", classes::LOGO)
                        viewBox="0 0 24 24"
                        width="28"
                        height="28"
                        fill="currentColor"
                        aria-hidden="true"
                    >
                        <path d=LOGO_PATH />
                    </svg>
                    <span class=format!("footer-brand-name {}", classes::BRAND_NAME)>
                        {content.brand}
                    </span>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    {content
                        .links
                        .into_iter()
                        .map(|link| view! { <FooterButton link=link actions=actions /> })
                        .collect_view()}
                </nav>
                <p class=format!("footer-copyright {}", classes::COPYRIGHT)>{content.copyright}</p>
            </div>
        </footer>
    }
}

/// A single footer navigation button.
#[component]

fn FooterButton(link: FooterLink, actions: FooterActions) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("footer-link {}", classes::FOOTER_LINK)
            on:click=move |_| actions.run(link)
        >
            {link.label()}
        </button>
    }
}

/// Compass mark used as the brand logo.
const LOGO_PATH: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 18a8 8 0 1 1 0-16 8 8 0 0 1 0 16zm-5.5-2.5 7.51-3.49L17.5 6.5 9.99 9.99 6.5 17.5zm5.5-6.6a1.1 1.1 0 1 1 0 2.2 1.1 1.1 0 0 1 0-2.2z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wanderlust_core::FixedClock;

    struct Counters {
        about_us: Arc<AtomicUsize>,
        privacy_policy: Arc<AtomicUsize>,
        contact_us: Arc<AtomicUsize>,
        support: Arc<AtomicUsize>,
    }

    impl Counters {
        fn new() -> Self {
            Self {
                about_us: Arc::default(),
                privacy_policy: Arc::default(),
                contact_us: Arc::default(),
                support: Arc::default(),
            }
        }

        fn actions(&self) -> FooterActions {
            FooterActions {
                about_us: counting(&self.about_us),
                privacy_policy: counting(&self.privacy_policy),
                contact_us: counting(&self.contact_us),
                support: counting(&self.support),
            }
        }

        fn snapshot(&self) -> [usize; 4] {
            [
                self.about_us.load(Ordering::SeqCst),
                self.privacy_policy.load(Ordering::SeqCst),
                self.contact_us.load(Ordering::SeqCst),
                self.support.load(Ordering::SeqCst),
            ]
        }
    }

    fn counting(counter: &Arc<AtomicUsize>) -> Callback<()> {
        let counter = Arc::clone(counter);
        Callback::new(move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn render_footer(counters: &Counters) -> String {
        let actions = counters.actions();
        view! {
            <Footer
                on_about_us=actions.about_us
                on_privacy_policy=actions.privacy_policy
                on_contact_us=actions.contact_us
                on_support=actions.support
            />
        }
        .to_html()
    }

    #[test]
    fn test_each_link_runs_only_its_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let counters = Counters::new();
            let actions = counters.actions();

            actions.run(FooterLink::AboutUs);
            assert_eq!(counters.snapshot(), [1, 0, 0, 0]);
            actions.run(FooterLink::PrivacyPolicy);
            assert_eq!(counters.snapshot(), [1, 1, 0, 0]);
            actions.run(FooterLink::ContactUs);
            assert_eq!(counters.snapshot(), [1, 1, 1, 0]);
            actions.run(FooterLink::Support);
            assert_eq!(counters.snapshot(), [1, 1, 1, 1]);
        });
    }

    #[test]
    fn test_repeated_clicks_run_once_each() {
        let owner = Owner::new();
        owner.with(|| {
            let counters = Counters::new();
            let actions = counters.actions();

            for _ in 0..3 {
                actions.run(FooterLink::Support);
            }
            assert_eq!(counters.snapshot(), [0, 0, 0, 3]);
        });
    }

    #[test]
    fn test_render_shows_links_and_mocked_year() {
        let owner = Owner::new();
        owner.with(|| {
            provide_clock(FixedClock(2030));
            let counters = Counters::new();

            let html = render_footer(&counters);

            let positions: Vec<usize> = ["About Us", "Privacy Policy", "Contact Us", "Support"]
                .iter()
                .map(|label| html.find(label).unwrap_or_else(|| panic!("{label} missing")))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(html.matches(r#"type="button""#).count(), 4);
            assert!(html.contains("© 2030 Wanderlust AI. All rights reserved."));
            assert!(html.contains("<footer"));
            assert!(html.contains("<nav"));
        });
    }

    #[test]
    fn test_render_runs_no_callback() {
        let owner = Owner::new();
        owner.with(|| {
            provide_clock(FixedClock(2025));
            let counters = Counters::new();

            let _html = render_footer(&counters);
            assert_eq!(counters.snapshot(), [0, 0, 0, 0]);
        });
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let owner = Owner::new();
        owner.with(|| {
            provide_clock(FixedClock(2027));
            let counters = Counters::new();

            let first = render_footer(&counters);
            let second = render_footer(&counters);
            assert_eq!(first, second);
            assert_eq!(counters.snapshot(), [0, 0, 0, 0]);
        });
    }

    #[test]
    fn test_render_reads_clock_each_time() {
        let owner = Owner::new();
        owner.with(|| {
            let counters = Counters::new();

            provide_clock(FixedClock(2031));
            assert!(render_footer(&counters).contains("© 2031 Wanderlust AI."));
            provide_clock(FixedClock(2032));
            assert!(render_footer(&counters).contains("© 2032 Wanderlust AI."));
        });
    }

    #[test]
    fn test_copyright_follows_provided_clock() {
        let owner = Owner::new();
        owner.with(|| {
            provide_clock(FixedClock(2030));
            let content = FooterContent::new(use_clock().as_ref());
            assert_eq!(
                content.copyright,
                "© 2030 Wanderlust AI. All rights reserved."
            );
        });
    }

    #[test]
    fn test_content_is_idempotent_for_same_clock() {
        let clock = FixedClock(2027);
        assert_eq!(FooterContent::new(&clock), FooterContent::new(&clock));
    }

    #[test]
    fn test_content_lists_links_in_order() {
        let content = FooterContent::new(&FixedClock(2025));
        let labels: Vec<_> = content.links.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            ["About Us", "Privacy Policy", "Contact Us", "Support"]
        );
        assert_eq!(content.brand, "Wanderlust AI");
    }

    #[test]
    fn test_use_clock_falls_back_to_host_clock() {
        let owner = Owner::new();
        owner.with(|| {
            let year = use_clock().current_year();
            assert!(year >= 2024);
        });
    }
}
