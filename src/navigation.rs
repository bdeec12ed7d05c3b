// Dashboard navigation model
// Static, ordered sidebar entries and the active-route predicate

/// Absolute dashboard routes
pub mod routes {
    /// Dashboard overview
    pub const DASHBOARD: &str = "/dashboard";
    /// Listings owned by the signed-in user
    pub const MY_AGENTS: &str = "/dashboard/my-agents";
    /// Payment history
    pub const PAYMENTS: &str = "/dashboard/payments";
    /// Orders placed for the user's agents
    pub const ORDERS: &str = "/dashboard/orders";
    /// API key management
    pub const API_KEYS: &str = "/dashboard/api-keys";
    /// Third-party integrations
    pub const INTEGRATIONS: &str = "/dashboard/integrations";
    /// Account settings
    pub const SETTINGS: &str = "/dashboard/settings";
    /// New listing form
    pub const CREATE_AGENT: &str = "/dashboard/create-agent";
}

/// Glyph shown next to a sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    /// Overview grid
    LayoutDashboard,
    /// Robot
    Bot,
    /// Card
    CreditCard,
    /// Cart
    ShoppingCart,
    /// Key
    Key,
    /// Share
    Share2,
    /// Gear
    Settings,
}

impl NavIcon {
    /// Text glyph used to render the icon
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::LayoutDashboard => "▦",
            NavIcon::Bot => "🤖",
            NavIcon::CreditCard => "💳",
            NavIcon::ShoppingCart => "🛒",
            NavIcon::Key => "🔑",
            NavIcon::Share2 => "🔗",
            NavIcon::Settings => "⚙",
        }
    }
}

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Label shown in the sidebar
    pub title: &'static str,
    /// Route the entry links to
    pub href: &'static str,
    /// Leading glyph
    pub icon: NavIcon,
}

impl NavigationItem {
    /// Whether this entry matches `current_path` exactly
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Sidebar entries in display order
pub const SIDEBAR_ITEMS: [NavigationItem; 7] = [
    NavigationItem {
        title: "Overview",
        href: routes::DASHBOARD,
        icon: NavIcon::LayoutDashboard,
    },
    NavigationItem {
        title: "My Agents",
        href: routes::MY_AGENTS,
        icon: NavIcon::Bot,
    },
    NavigationItem {
        title: "Payments",
        href: routes::PAYMENTS,
        icon: NavIcon::CreditCard,
    },
    NavigationItem {
        title: "Orders",
        href: routes::ORDERS,
        icon: NavIcon::ShoppingCart,
    },
    NavigationItem {
        title: "API Keys",
        href: routes::API_KEYS,
        icon: NavIcon::Key,
    },
    NavigationItem {
        title: "Integrations",
        href: routes::INTEGRATIONS,
        icon: NavIcon::Share2,
    },
    NavigationItem {
        title: "Settings",
        href: routes::SETTINGS,
        icon: NavIcon::Settings,
    },
];

/// Sidebar entries in display order
pub fn sidebar_items() -> &'static [NavigationItem] {
    &SIDEBAR_ITEMS
}

/// The entry matching `current_path`, if any
pub fn active_item(current_path: &str) -> Option<&'static NavigationItem> {
    SIDEBAR_ITEMS.iter().find(|item| item.is_active(current_path))
}
