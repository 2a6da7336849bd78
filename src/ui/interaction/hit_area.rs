//! Hit area system for mouse interaction.
//!
//! Components register clickable regions while rendering, and the event loop
//! queries the registry to decide what a click does.

use ratatui::layout::Rect;

use crate::app::Page;
use crate::forms::ContactField;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Navigation
    /// Header tab
    NavigatePage(Page),

    // Carousel controls (the carousel on the current page)
    /// `◀` control
    CarouselPrev,
    /// `▶` control
    CarouselNext,
    /// Position dot
    CarouselDot(usize),
    /// Play/pause label
    ToggleAutoplay,

    // Newsletter footer
    /// Email field
    FocusNewsletter,
    /// Subscribe button
    SubmitNewsletter,

    // Contact page
    /// Focus one of the contact inputs
    FocusContactField(ContactField),
    /// Country selector
    CycleCountry,
    /// Send button
    SubmitContact,
    /// "Send another message" on the thank-you panel
    SendAnother,

    // Status line
    /// Toggle the reduced-motion preference
    ToggleMotion,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

/// Whether `(x, y)` lies inside `rect`. Zero-sized rects contain nothing.
#[inline]
pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && (x as u32) < rect.x as u32 + rect.width as u32
        && y >= rect.y
        && (y as u32) < rect.y as u32 + rect.height as u32
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Hover state survives the clear so a redraw does not lose it;
/// it is recomputed on the next mouse move.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (later = on top)
    areas: Vec<HitArea>,
    /// Rect of the currently hovered area (if any)
    hovered: Option<Rect>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find(x, y).map(|area| area.action.clone())
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self.find(x, y).map(|area| area.rect);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    fn find(&self, x: u16, y: u16) -> Option<&HitArea> {
        self.areas.iter().rev().find(|area| area.contains(x, y))
    }

    /// Whether `rect` is the hovered area.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.hovered == Some(rect)
    }

    /// Rect of the hovered area, kept across clears.
    pub fn hovered_rect(&self) -> Option<Rect> {
        self.hovered
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::CarouselNext);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 10));
        assert!(area.contains(10, 19));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 9));
        assert!(!area.contains(10, 20));
        assert!(!area.contains(0, 0));
    }

    #[test]
    fn test_zero_size_area_is_not_registered() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(5, 5, 0, 0), ClickAction::ToggleAutoplay);
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(5, 5), None);
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::CarouselPrev);
        registry.register(make_rect(10, 0, 10, 10), ClickAction::CarouselNext);
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(5, 5), None);
    }

    #[test]
    fn test_hit_test_basic() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 1), ClickAction::NavigatePage(Page::Home));
        registry.register(make_rect(20, 0, 10, 1), ClickAction::NavigatePage(Page::About));
        registry.register(make_rect(40, 0, 10, 1), ClickAction::CarouselDot(2));

        assert_eq!(registry.hit_test(5, 0), Some(ClickAction::NavigatePage(Page::Home)));
        assert_eq!(registry.hit_test(25, 0), Some(ClickAction::NavigatePage(Page::About)));
        assert_eq!(registry.hit_test(45, 0), Some(ClickAction::CarouselDot(2)));
        assert_eq!(registry.hit_test(15, 0), None);
        assert_eq!(registry.hit_test(100, 100), None);
    }

    #[test]
    fn test_hit_test_overlapping_areas() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 20, 20), ClickAction::FocusNewsletter);
        registry.register(make_rect(5, 5, 10, 10), ClickAction::SubmitNewsletter);

        assert_eq!(registry.hit_test(10, 10), Some(ClickAction::SubmitNewsletter));
        assert_eq!(registry.hit_test(2, 2), Some(ClickAction::FocusNewsletter));
        assert_eq!(registry.hit_test(18, 18), Some(ClickAction::FocusNewsletter));
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::CarouselPrev);
        registry.register(make_rect(20, 0, 10, 10), ClickAction::CarouselNext);

        assert!(registry.update_hover(5, 5));
        assert!(!registry.update_hover(5, 5));
        assert!(!registry.update_hover(8, 8));
        assert!(registry.update_hover(25, 5));
        assert!(registry.update_hover(100, 100));
        assert!(!registry.update_hover(200, 200));
    }

    #[test]
    fn test_hover_survives_clear() {
        let mut registry = HitAreaRegistry::new();
        let rect = make_rect(0, 0, 10, 1);
        registry.register(rect, ClickAction::ToggleAutoplay);
        registry.update_hover(3, 0);

        registry.clear();
        registry.register(rect, ClickAction::ToggleAutoplay);
        assert!(registry.is_hovered(rect));
    }

    #[test]
    fn test_boundary_conditions() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 5, 5), ClickAction::SendAnother);
        assert_eq!(registry.hit_test(0, 0), Some(ClickAction::SendAnother));

        registry.clear();
        let max_x = u16::MAX - 10;
        let max_y = u16::MAX - 10;
        registry.register(make_rect(max_x, max_y, 5, 5), ClickAction::CycleCountry);
        assert_eq!(
            registry.hit_test(max_x + 2, max_y + 2),
            Some(ClickAction::CycleCountry)
        );
    }
}
