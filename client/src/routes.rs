//! Static navigation table for hash-based routing.
//!
//! DESIGN
//! ======
//! The table only maps paths to [`View`] tags; building the view is deferred
//! to `pages::render`, so a page's component tree exists only while its
//! route is active. Resolution is first exact match; there are no guards,
//! nested routes or redirects at this level.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Hash target for the authenticated landing page.
pub const HOME_PATH: &str = "/";

/// Hash target when no valid session exists.
pub const LOGIN_PATH: &str = "/login";

/// Hash target when the session's role lacks access. Written without a
/// leading slash; [`path_from_hash`] normalizes it to `/pg403`.
pub const FORBIDDEN_PATH: &str = "pg403";

/// Views reachable from the navigation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Index,
    Login,
    Signup,
    Forgot,
    ChangePass,
    Manage,
    Test,
    Forbidden,
    Tools,
    BibleCo,
    Cws,
    InfoRetrieval,
    OutlineTranslate,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            Self::Index => "Home",
            Self::Login => "Sign in",
            Self::Signup => "Sign up",
            Self::Forgot => "Forgot password",
            Self::ChangePass => "Change password",
            Self::Manage => "Management",
            Self::Test => "Test",
            Self::Forbidden => "403 Forbidden",
            Self::Tools => "Toolbox",
            Self::BibleCo => "Bible collection",
            Self::Cws => "Word search",
            Self::InfoRetrieval => "Information retrieval",
            Self::OutlineTranslate => "Outline translation",
        }
    }
}

/// One navigation table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: &[Route] = &[
    Route { path: "/", view: View::Index },
    Route { path: "/login", view: View::Login },
    Route { path: "/signup", view: View::Signup },
    Route { path: "/forgot", view: View::Forgot },
    Route { path: "/changepass", view: View::ChangePass },
    Route { path: "/manage", view: View::Manage },
    Route { path: "/test", view: View::Test },
    Route { path: "/pg403", view: View::Forbidden },
    Route { path: "/tools", view: View::Tools },
    Route { path: "/bibco", view: View::BibleCo },
    Route { path: "/cws", view: View::Cws },
    Route { path: "/info-retrieval", view: View::InfoRetrieval },
    Route { path: "/outline-translate", view: View::OutlineTranslate },
];

/// Find the view for `path`, first exact match wins.
pub fn resolve(path: &str) -> Option<View> {
    ROUTES.iter().find(|r| r.path == path).map(|r| r.view)
}

/// Route path for `view`.
pub fn path_of(view: View) -> &'static str {
    ROUTES
        .iter()
        .find(|r| r.view == view)
        .map_or(HOME_PATH, |r| r.path)
}

/// Normalize a raw `location.hash` into a table path.
///
/// Strips the `#`, drops any `?query`, and guarantees a leading `/`, so both
/// `#pg403` and `#/pg403` become `/pg403`. An empty hash is the root.
pub fn path_from_hash(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let raw = raw.split_once('?').map_or(raw, |(path, _)| path);
    if raw.is_empty() {
        HOME_PATH.to_owned()
    } else if raw.starts_with('/') {
        raw.to_owned()
    } else {
        format!("/{raw}")
    }
}
