//! Swap animation for the two zap boxes
//!
//! Purely cosmetic: the boxes are translated onto each other's position and
//! back. Nothing here touches the stores.

use tracing::trace;

/// CSS transition applied while the boxes move
pub const ZAP_TRANSITION: &str = "all .4s cubic-bezier(0.4, 0, 0.2, 1)";

/// Rendered element whose inline style can be written
pub trait StyledElement {
    /// Top edge of the element's bounding box, in px
    fn rect_top(&self) -> f64;

    fn set_style_property(&self, name: &str, value: &str);
}

/// Which of the two boxes an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZapSlot {
    Zap1,
    Zap2,
}

pub struct ZapTwoElements<E> {
    zap1: Option<E>,
    zap2: Option<E>,
    has_wrapped: bool,
    animating: [bool; 2],
}

fn translate_y(offset: f64) -> String {
    // avoid "-0px"
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateY({}px)", offset)
}

impl<E: StyledElement> ZapTwoElements<E> {
    /// With `default_has_wrapped` the boxes start swapped, placed without a transition
    pub fn new(zap1: Option<E>, zap2: Option<E>, default_has_wrapped: bool) -> Self {
        let elements = Self {
            zap1,
            zap2,
            has_wrapped: default_has_wrapped,
            animating: [false; 2],
        };
        if default_has_wrapped {
            elements.apply_swapped("");
        }
        elements
    }

    pub fn has_wrapped(&self) -> bool {
        self.has_wrapped
    }

    pub fn element(&self, slot: ZapSlot) -> Option<&E> {
        match slot {
            ZapSlot::Zap1 => self.zap1.as_ref(),
            ZapSlot::Zap2 => self.zap2.as_ref(),
        }
    }

    fn both(&self) -> Option<(&E, &E)> {
        Some((self.zap1.as_ref()?, self.zap2.as_ref()?))
    }

    /// Translate each box onto the other's position
    fn apply_swapped(&self, transition: &str) -> bool {
        let Some((dom1, dom2)) = self.both() else {
            return false;
        };
        let (top1, top2) = (dom1.rect_top(), dom2.rect_top());
        let distance = top2 - top1;
        let direction = if top1 < top2 { 1.0 } else { -1.0 };

        dom1.set_style_property("transition", transition);
        dom2.set_style_property("transition", transition);
        dom1.set_style_property("transform", &translate_y(distance * direction));
        dom2.set_style_property("transform", &translate_y(-distance * direction));
        trace!(distance, "zap boxes swapped");
        true
    }

    fn apply_origin(&self) -> bool {
        let Some((dom1, dom2)) = self.both() else {
            return false;
        };
        for dom in [dom1, dom2] {
            dom.set_style_property("transition", ZAP_TRANSITION);
            dom.set_style_property("transform", &translate_y(0.0));
        }
        true
    }

    /// Swap the boxes, or move them back if already swapped.
    /// No-op while either box is unmounted.
    pub fn toggle_zap(&mut self) {
        if self.has_wrapped {
            if self.apply_origin() {
                self.has_wrapped = false;
            }
        } else if self.apply_swapped(ZAP_TRANSITION) {
            self.has_wrapped = true;
        }
    }

    /// Move both boxes back without changing the wrapped flag
    pub fn reset_zap_position(&self) {
        self.apply_origin();
    }

    pub fn on_transition_start(&mut self, slot: ZapSlot) {
        self.set_animating(slot, true);
    }

    pub fn on_transition_end(&mut self, slot: ZapSlot) {
        self.set_animating(slot, false);
    }

    fn set_animating(&mut self, slot: ZapSlot, animating: bool) {
        let index = match slot {
            ZapSlot::Zap1 => 0,
            ZapSlot::Zap2 => 1,
        };
        self.animating[index] = animating;
        if let Some(element) = self.element(slot) {
            element.set_style_property("pointer-events", if animating { "none" } else { "" });
        }
    }

    /// Either box is mid-transition
    pub fn is_animating(&self) -> bool {
        self.animating.iter().any(|a| *a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MockElement {
        top: f64,
        style: RefCell<HashMap<String, String>>,
    }

    impl MockElement {
        fn at(top: f64) -> Self {
            Self {
                top,
                style: RefCell::new(HashMap::new()),
            }
        }

        fn style(&self, name: &str) -> Option<String> {
            self.style.borrow().get(name).cloned()
        }
    }

    impl StyledElement for MockElement {
        fn rect_top(&self) -> f64 {
            self.top
        }

        fn set_style_property(&self, name: &str, value: &str) {
            self.style.borrow_mut().insert(name.to_string(), value.to_string());
        }
    }

    fn pair() -> ZapTwoElements<MockElement> {
        ZapTwoElements::new(Some(MockElement::at(100.0)), Some(MockElement::at(180.0)), false)
    }

    #[test]
    fn test_toggle_swaps_positions() {
        let mut zap = pair();
        zap.toggle_zap();

        assert!(zap.has_wrapped());
        let dom1 = zap.element(ZapSlot::Zap1).unwrap();
        let dom2 = zap.element(ZapSlot::Zap2).unwrap();
        assert_eq!(dom1.style("transform").as_deref(), Some("translateY(80px)"));
        assert_eq!(dom2.style("transform").as_deref(), Some("translateY(-80px)"));
        assert_eq!(dom1.style("transition").as_deref(), Some(ZAP_TRANSITION));
    }

    #[test]
    fn test_toggle_twice_is_net_zero() {
        let mut zap = pair();
        zap.toggle_zap();
        zap.on_transition_start(ZapSlot::Zap1);
        zap.on_transition_end(ZapSlot::Zap1);
        zap.toggle_zap();

        assert!(!zap.has_wrapped());
        for slot in [ZapSlot::Zap1, ZapSlot::Zap2] {
            let element = zap.element(slot).unwrap();
            assert_eq!(element.style("transform").as_deref(), Some("translateY(0px)"));
        }
    }

    #[test]
    fn test_default_wrapped_applies_without_transition() {
        let zap = ZapTwoElements::new(
            Some(MockElement::at(100.0)),
            Some(MockElement::at(180.0)),
            true,
        );
        assert!(zap.has_wrapped());
        let dom1 = zap.element(ZapSlot::Zap1).unwrap();
        assert_eq!(dom1.style("transition").as_deref(), Some(""));
        assert_eq!(dom1.style("transform").as_deref(), Some("translateY(80px)"));
    }

    #[test]
    fn test_reset_keeps_flag() {
        let mut zap = pair();
        zap.toggle_zap();
        zap.reset_zap_position();
        assert!(zap.has_wrapped());
        let dom2 = zap.element(ZapSlot::Zap2).unwrap();
        assert_eq!(dom2.style("transform").as_deref(), Some("translateY(0px)"));
    }

    #[test]
    fn test_unmounted_element_is_noop() {
        let mut zap: ZapTwoElements<MockElement> =
            ZapTwoElements::new(Some(MockElement::at(0.0)), None, true);
        zap.toggle_zap();
        zap.reset_zap_position();
        zap.on_transition_start(ZapSlot::Zap2);

        let dom1 = zap.element(ZapSlot::Zap1).unwrap();
        assert_eq!(dom1.style("transform"), None);
        assert!(zap.has_wrapped());
    }

    #[test]
    fn test_pointer_events_suspended_while_animating() {
        let mut zap = pair();
        zap.on_transition_start(ZapSlot::Zap2);
        assert!(zap.is_animating());
        let dom2 = zap.element(ZapSlot::Zap2).unwrap();
        assert_eq!(dom2.style("pointer-events").as_deref(), Some("none"));

        zap.on_transition_end(ZapSlot::Zap2);
        assert!(!zap.is_animating());
        let dom2 = zap.element(ZapSlot::Zap2).unwrap();
        assert_eq!(dom2.style("pointer-events").as_deref(), Some(""));
    }
}
