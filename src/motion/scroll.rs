//! Normalized scroll progress of an element through the viewport.

/// A position along an element or the viewport, measured from its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

/// The scroll position at which `element` lines up with `viewport`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub element: Edge,
    pub viewport: Edge,
}

impl Boundary {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    pub fn offset(&self, geometry: &Geometry) -> f64 {
        geometry.element_top + geometry.element_height * self.element.fraction()
            - geometry.viewport_height * self.viewport.fraction()
    }
}

/// Layout measurements in document coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

impl Geometry {
    pub fn new(element_top: f64, element_height: f64, viewport_height: f64) -> Self {
        Self {
            element_top,
            element_height,
            viewport_height,
        }
    }

    /// Builds document-space geometry from a viewport-relative bounding box.
    pub fn from_client_rect(
        rect_top: f64,
        rect_height: f64,
        scroll_y: f64,
        viewport_height: f64,
    ) -> Self {
        Self::new(rect_top + scroll_y, rect_height, viewport_height)
    }
}

/// Window of scroll positions over which progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Boundary,
    pub end: Boundary,
}

impl ScrollRange {
    pub const fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// Element top meets viewport bottom, until element center meets viewport center.
    pub const fn entering_to_center() -> Self {
        Self::new(
            Boundary::new(Edge::Start, Edge::End),
            Boundary::new(Edge::Center, Edge::Center),
        )
    }

    /// Progress in `[0, 1]`. Unmeasurable geometry or scroll reads as 0.
    pub fn progress(&self, geometry: &Geometry, scroll_y: f64) -> f64 {
        let start = self.start.offset(geometry);
        let end = self.end.offset(geometry);
        let length = end - start;
        if !(length.is_finite() && scroll_y.is_finite()) {
            return 0.0;
        }
        if length <= 0.0 {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / length).clamp(0.0, 1.0)
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::entering_to_center()
    }
}
