//! Route table
//!
//! Every page is a fixed, ordered list of template fragments. The first
//! fragment is always the shared layout; the last supplies the main content
//! slot. Intermediate fragments fill auxiliary slots the layout includes by
//! name. The table is immutable and never derived from request data.

/// Template name the layout is registered under; rendering starts here.
pub const LAYOUT_SLOT: &str = "layout";

/// Template name of the slot the last fragment fills.
pub const MAIN_SLOT: &str = "main";

/// One template fragment: the slot it fills and its file path relative to
/// the configured templates directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub slot: &'static str,
    pub file: &'static str,
}

/// One page: URL path plus the ordered fragments composed to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub fragments: &'static [Fragment],
}

const LAYOUT: Fragment = Fragment {
    slot: LAYOUT_SLOT,
    file: "layout.html",
};

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        fragments: &[
            LAYOUT,
            Fragment {
                slot: MAIN_SLOT,
                file: "pages/home.html",
            },
        ],
    },
    Route {
        path: "/resume",
        fragments: &[
            LAYOUT,
            Fragment {
                slot: MAIN_SLOT,
                file: "pages/resume.html",
            },
        ],
    },
    Route {
        path: "/projects",
        fragments: &[
            LAYOUT,
            Fragment {
                slot: MAIN_SLOT,
                file: "pages/projects.html",
            },
        ],
    },
    Route {
        path: "/projects/raylib-snake",
        fragments: &[
            LAYOUT,
            Fragment {
                slot: "embed",
                file: "emscripten/content.html",
            },
            Fragment {
                slot: "scripts",
                file: "emscripten/scripts.html",
            },
            Fragment {
                slot: MAIN_SLOT,
                file: "pages/projects/raylib-snake.html",
            },
        ],
    },
];

/// Look up a route by exact path match.
pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}
