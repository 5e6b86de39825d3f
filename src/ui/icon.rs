use leptos::prelude::*;

/// Inline SVG icon drawn with `currentColor`
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
    /// Fill color; stroke-only by default
    #[prop(default = "none")]
    fill: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=icon_markup(name)
        ></svg>
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const TRENDING_UP: &str = "trending-up";
    pub const SHIELD: &str = "shield";
    pub const ZAP: &str = "zap";
    pub const ACTIVITY: &str = "activity";
    pub const GLOBE: &str = "globe";
    pub const LOCK: &str = "lock";
    pub const CPU: &str = "cpu";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHECK: &str = "check";
    pub const STAR: &str = "star";
    pub const TWITTER: &str = "twitter";
    pub const LINKEDIN: &str = "linkedin";
    pub const FACEBOOK: &str = "facebook";
}

/// SVG body for an icon name; unknown names render nothing
pub fn icon_markup(name: &str) -> &'static str {
    match name {
        icons::MENU => {
            r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
        }
        icons::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        icons::TRENDING_UP => {
            r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
        }
        icons::SHIELD => {
            r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
        }
        icons::ZAP => {
            r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
        }
        icons::ACTIVITY => r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#,
        icons::GLOBE => {
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
        }
        icons::LOCK => {
            r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
        }
        icons::CPU => {
            r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#
        }
        icons::ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        icons::CHEVRON_DOWN => r#"<path d="m6 9 6 6 6-6"/>"#,
        icons::CHECK => r#"<path d="M20 6 9 17l-5-5"/>"#,
        icons::STAR => {
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
        }
        icons::TWITTER => {
            r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
        }
        icons::LINKEDIN => {
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
        }
        icons::FACEBOOK => {
            r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FEATURES, PROCESS_STEPS};

    #[test]
    fn test_fixture_icons_exist() {
        for name in FEATURES.iter().map(|f| f.icon).chain(PROCESS_STEPS.iter().map(|s| s.icon)) {
            assert!(!icon_markup(name).is_empty(), "missing icon {name}");
        }
    }

    #[test]
    fn test_unknown_icon_is_empty() {
        assert_eq!(icon_markup("does-not-exist"), "");
    }
}
