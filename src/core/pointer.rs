//! Pointer tracking for the custom cursor overlay
//!
//! The tracker keeps the last pointer position plus two flags: whether the
//! pointer sits over something interactive and whether a button is held.
//! Overlay styles are derived from that state and nothing else.

/// Tags that always count as interactive
pub const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input", "textarea"];

/// Class that marks any element as interactive
pub const INTERACTIVE_CLASS: &str = "clickable";

/// Minimal view of a DOM element needed to decide interactivity.
///
/// Implemented for `web_sys::Element` in the browser build and for plain
/// structs in tests.
pub trait ElementProbe: Sized {
    /// Lower- or upper-case tag name; compared case-insensitively
    fn tag_name(&self) -> String;

    fn has_class(&self, class: &str) -> bool;

    fn parent(&self) -> Option<Self>;

    fn is_interactive(&self) -> bool {
        let tag = self.tag_name();
        INTERACTIVE_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
            || self.has_class(INTERACTIVE_CLASS)
    }
}

/// Walk from `target` up through its ancestors and return the nearest
/// interactive element, `target` included.
pub fn nearest_interactive<E: ElementProbe>(target: E) -> Option<E> {
    let mut current = Some(target);
    while let Some(element) = current {
        if element.is_interactive() {
            return Some(element);
        }
        current = element.parent();
    }
    None
}

/// Cursor state updated on every pointer event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
    pub pressed: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move event
    pub fn moved(&mut self, x: f64, y: f64, hovering: bool) {
        self.x = x;
        self.y = y;
        self.hovering = hovering;
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Style for the small filled dot
    pub fn dot(&self) -> CursorOverlay {
        CursorOverlay {
            left: self.x,
            top: self.y,
            size: if self.hovering { 32.0 } else { 8.0 },
            color: Some(if self.hovering { "#00f0ff" } else { "#ffffff" }),
            scale: if self.pressed { 0.8 } else { 1.0 },
            opacity: 0.8,
        }
    }

    /// Style for the trailing ring
    pub fn ring(&self) -> CursorOverlay {
        CursorOverlay {
            left: self.x,
            top: self.y,
            size: if self.hovering { 48.0 } else { 24.0 },
            color: None,
            scale: 1.0,
            opacity: 0.4,
        }
    }
}

/// Computed geometry and paint for one overlay element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOverlay {
    /// Center x in viewport pixels
    pub left: f64,
    /// Center y in viewport pixels
    pub top: f64,
    /// Width and height in pixels
    pub size: f64,
    /// Fill color; `None` leaves it to the stylesheet
    pub color: Option<&'static str>,
    pub scale: f64,
    pub opacity: f64,
}

impl CursorOverlay {
    /// Inline `style` attribute value
    pub fn style(&self) -> String {
        let transform = if self.scale == 1.0 {
            "translate(-50%, -50%)".to_string()
        } else {
            format!("translate(-50%, -50%) scale({})", self.scale)
        };
        let mut style = format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; transform: {}; opacity: {};",
            self.left, self.top, self.size, self.size, transform, self.opacity
        );
        if let Some(color) = self.color {
            style.push_str(&format!(" background-color: {};", color));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeElement {
        tag: &'static str,
        classes: &'static [&'static str],
        id: u32,
        parent: Option<Box<FakeElement>>,
    }

    impl FakeElement {
        fn new(id: u32, tag: &'static str) -> Self {
            Self {
                tag,
                classes: &[],
                id,
                parent: None,
            }
        }

        fn classes(mut self, classes: &'static [&'static str]) -> Self {
            self.classes = classes;
            self
        }

        fn inside(mut self, parent: FakeElement) -> Self {
            self.parent = Some(Box::new(parent));
            self
        }
    }

    impl ElementProbe for FakeElement {
        fn tag_name(&self) -> String {
            self.tag.to_string()
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }

        fn parent(&self) -> Option<Self> {
            self.parent.as_deref().cloned()
        }
    }

    #[test]
    fn test_interactive_tags() {
        for tag in ["A", "BUTTON", "input", "TextArea"] {
            assert!(FakeElement::new(1, tag).is_interactive(), "{tag}");
        }
        assert!(!FakeElement::new(1, "DIV").is_interactive());
        assert!(!FakeElement::new(1, "SELECT").is_interactive());
    }

    #[test]
    fn test_clickable_class_is_interactive() {
        let card = FakeElement::new(1, "DIV").classes(&["glass-card", "clickable"]);
        assert!(card.is_interactive());
    }

    #[test]
    fn test_interactive_ancestor_detected() {
        let span = FakeElement::new(3, "SPAN")
            .inside(FakeElement::new(2, "BUTTON").inside(FakeElement::new(1, "BODY")));
        assert_eq!(nearest_interactive(span).map(|e| e.id), Some(2));
    }

    #[test]
    fn test_no_interactive_ancestor() {
        let p = FakeElement::new(3, "P")
            .inside(FakeElement::new(2, "SECTION").inside(FakeElement::new(1, "BODY")));
        assert!(nearest_interactive(p).is_none());
    }

    #[test]
    fn test_nearest_interactive_ancestor_wins() {
        let icon = FakeElement::new(4, "svg").inside(
            FakeElement::new(3, "DIV")
                .classes(&["clickable"])
                .inside(FakeElement::new(2, "A").inside(FakeElement::new(1, "BODY"))),
        );
        assert_eq!(nearest_interactive(icon).map(|e| e.id), Some(3));
    }

    #[test]
    fn test_target_itself_counts() {
        let input = FakeElement::new(7, "INPUT");
        assert_eq!(nearest_interactive(input).map(|e| e.id), Some(7));
    }

    #[test]
    fn test_overlays_centered_on_pointer() {
        let mut state = PointerState::new();
        for (x, y) in [(0.0, 0.0), (120.5, 48.0), (1919.0, 1079.0)] {
            state.moved(x, y, false);
            assert_eq!((state.dot().left, state.dot().top), (x, y));
            assert_eq!((state.ring().left, state.ring().top), (x, y));
        }
    }

    #[test]
    fn test_hover_enlarges_overlays() {
        let mut state = PointerState::new();
        assert_eq!(state.dot().size, 8.0);
        assert_eq!(state.ring().size, 24.0);
        assert_eq!(state.dot().color, Some("#ffffff"));

        state.moved(10.0, 10.0, true);
        assert_eq!(state.dot().size, 32.0);
        assert_eq!(state.ring().size, 48.0);
        assert_eq!(state.dot().color, Some("#00f0ff"));
    }

    #[test]
    fn test_press_shrinks_dot_only() {
        let mut state = PointerState::new();
        state.press();
        assert_eq!(state.dot().scale, 0.8);
        assert_eq!(state.ring().scale, 1.0);
        state.release();
        assert_eq!(state.dot().scale, 1.0);
    }

    #[test]
    fn test_overlay_style_string() {
        let mut state = PointerState::new();
        state.moved(100.0, 50.0, false);
        state.press();
        assert_eq!(
            state.dot().style(),
            "left: 100px; top: 50px; width: 8px; height: 8px; \
             transform: translate(-50%, -50%) scale(0.8); opacity: 0.8; background-color: #ffffff;"
        );
        assert_eq!(
            state.ring().style(),
            "left: 100px; top: 50px; width: 24px; height: 24px; \
             transform: translate(-50%, -50%); opacity: 0.4;"
        );
    }
}
