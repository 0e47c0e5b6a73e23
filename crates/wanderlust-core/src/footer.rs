//! Footer content shared by the UI and its tests.

use std::fmt;

use crate::clock::Clock;

/// Brand name shown in the footer mark and copyright line.
pub const BRAND_NAME: &str = "Wanderlust AI";

/// Navigation destinations offered by the footer, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterLink {
    /// "About Us".
    AboutUs,
    /// "Privacy Policy".
    PrivacyPolicy,
    /// "Contact Us".
    ContactUs,
    /// "Support".
    Support,
}

impl FooterLink {
    /// All links in the order they are rendered.
    pub const ALL: [Self; 4] = [
        Self::AboutUs,
        Self::PrivacyPolicy,
        Self::ContactUs,
        Self::Support,
    ];

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AboutUs => "About Us",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::ContactUs => "Contact Us",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for FooterLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Copyright text for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}

/// Copyright text for whatever year `clock` reports right now.
pub fn copyright_line_now(clock: &dyn Clock) -> String {
    copyright_line(clock.current_year())
}
