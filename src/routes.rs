//! Page Routing
//!
//! Each page is its own URL; moving between them is a full navigation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Local-storage variant
    Local,
    Login,
    Register,
    /// Remote to-do page, requires a cached session
    Todos,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/index.html" | "/index" => Page::Local,
            "/login.html" | "/login" => Page::Login,
            "/register.html" | "/register" => Page::Register,
            "/todos.html" | "/todos" => Page::Todos,
            _ => Page::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Local | Page::NotFound => "/",
            Page::Login => "/login.html",
            Page::Register => "/register.html",
            Page::Todos => "/todos.html",
        }
    }
}

pub fn current_page() -> Page {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&path)
}

pub fn redirect(page: Page) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(page.path()) {
        log::error!("Navigation to {} failed: {:?}", page.path(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Local);
        assert_eq!(Page::from_path("/index.html"), Page::Local);
        assert_eq!(Page::from_path("/login.html"), Page::Login);
        assert_eq!(Page::from_path("/register"), Page::Register);
        assert_eq!(Page::from_path("/todos.html/"), Page::Todos);
        assert_eq!(Page::from_path("/elsewhere"), Page::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for page in [Page::Login, Page::Register, Page::Todos] {
            assert_eq!(Page::from_path(page.path()), page);
        }
        assert_eq!(Page::from_path(Page::Local.path()), Page::Local);
    }
}
