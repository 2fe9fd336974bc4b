#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Blog,
    Contact,
}

pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
    pub keys: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        page: Page::Blog,
        label: "Blog",
        keys: "^B",
    },
    NavLink {
        page: Page::Contact,
        label: "Contact",
        keys: "^T",
    },
];
