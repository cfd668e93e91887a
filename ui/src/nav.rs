//! Navigation entries shared by the header and the drawer

/// A routed view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Profile",
        path: "/",
        icon: "👤",
    },
    NavItem {
        label: "Posts",
        path: "/posts",
        icon: "📝",
    },
    NavItem {
        label: "Articles",
        path: "/articles",
        icon: "📰",
    },
    NavItem {
        label: "Analytics",
        path: "/analytics",
        icon: "📊",
    },
    NavItem {
        label: "Configuration",
        path: "/config",
        icon: "⚙️",
    },
];

/// Title for the active path, "Dashboard" for anything unrouted
pub fn page_title(pathname: &str) -> &'static str {
    let normalized = match pathname.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    NAV_ITEMS
        .iter()
        .find(|item| item.path == normalized)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("/"), "Profile");
        assert_eq!(page_title(""), "Profile");
        assert_eq!(page_title("/posts"), "Posts");
        assert_eq!(page_title("/analytics/"), "Analytics");
        assert_eq!(page_title("/config"), "Configuration");
        assert_eq!(page_title("/nowhere"), "Dashboard");
    }
}
