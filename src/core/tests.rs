#[cfg(test)]
mod tests {
    use crate::core::{
        Accordion, ContactForm, ExperienceLevel, FAQ_ITEMS, NavbarState, NavbarStyle,
        PointerState, SubmissionStatus,
    };

    // ========================================================================
    // Interaction scenarios across the page's state machines
    // ========================================================================

    #[test]
    fn test_cursor_follows_pointer_and_hover() {
        let mut pointer = PointerState::new();
        pointer.moved(321.0, 123.0, false);
        let dot = pointer.dot();
        assert_eq!((dot.left, dot.top), (321.0, 123.0));

        pointer.moved(322.0, 124.0, true);
        assert!(pointer.hovering);
        assert_eq!(pointer.ring().size, 48.0);

        pointer.moved(400.0, 300.0, false);
        assert!(!pointer.hovering);
        assert_eq!(pointer.ring().size, 24.0);
    }

    #[test]
    fn test_navbar_scroll_down_and_back() {
        let mut nav = NavbarState::new();
        let mut styles = vec![nav.style()];
        for offset in [0.0, 21.0] {
            if nav.scroll_to(offset) {
                styles.push(nav.style());
            }
        }
        assert_eq!(styles, [NavbarStyle::Transparent, NavbarStyle::Condensed]);

        assert!(nav.scroll_to(19.0));
        assert_eq!(nav.style(), NavbarStyle::Transparent);
    }

    #[test]
    fn test_faq_single_open() {
        let mut faq = Accordion::new(FAQ_ITEMS.len());
        faq.toggle(1);
        faq.toggle(2);
        let open: Vec<_> = (0..faq.len()).filter(|&i| faq.is_open(i)).collect();
        assert_eq!(open, [2]);

        faq.toggle(2);
        assert!((0..faq.len()).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn test_contact_submission_scenario() {
        let mut form = ContactForm::new();
        form.set_name("Jane Doe");
        form.set_email("jane@example.com");
        form.set_level(ExperienceLevel::Professional);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.is_busy());

        // Timer fires
        assert!(form.complete_submit());
        assert_eq!(form.status(), SubmissionStatus::Success);

        form.send_another();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields.name, "");
        assert_eq!(form.fields.email, "");
        assert_eq!(form.fields.level, ExperienceLevel::Beginner);
    }
}
