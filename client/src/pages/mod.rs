//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session gate, form submits)
//! and delegates chrome to `components`. [`render`] is the deferred loader
//! behind the navigation table: a page is only built once its route is
//! active.

pub mod forbidden;
pub mod home;
pub mod login;
pub mod manage;
pub mod section;

use leptos::prelude::*;

use crate::routes::View;

use self::forbidden::ForbiddenPage;
use self::home::HomePage;
use self::login::LoginPage;
use self::manage::ManagePage;
use self::section::SectionPage;

/// Build the page for `view`.
pub fn render(view: View) -> AnyView {
    match view {
        View::Index => view! { <HomePage/> }.into_any(),
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Manage => view! { <ManagePage/> }.into_any(),
        View::Forbidden => view! { <ForbiddenPage/> }.into_any(),
        View::Signup | View::Forgot => view! { <SectionPage view=view gated=false/> }.into_any(),
        View::ChangePass
        | View::Test
        | View::Tools
        | View::BibleCo
        | View::Cws
        | View::InfoRetrieval
        | View::OutlineTranslate => view! { <SectionPage view=view gated=true/> }.into_any(),
    }
}
