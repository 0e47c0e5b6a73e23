//! UI components for `Wanderlust AI`.

mod footer;

pub use footer::{
    BrowserClock, ClockContext, Footer, FooterActions, FooterContent, provide_clock, use_clock,
};
