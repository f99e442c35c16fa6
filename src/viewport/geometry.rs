use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::ids::ElementId;

/// Lookup of laid-out element rectangles in document space.
pub trait ElementGeometry {
    /// Document-space bounds of `id`, or `None` when the element is not mounted.
    fn element_rect(&self, id: ElementId) -> Option<Rect>;
}

impl ElementGeometry for std::collections::BTreeMap<ElementId, Rect> {
    fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.get(&id).copied()
    }
}

/// The visible window onto the document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible size in px.
    pub size: Size,
    /// Document y at the top edge of the window.
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport of `width`×`height` scrolled to the top.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scroll_y: 0.0,
        }
    }

    /// Visible region in document space.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(0.0, self.scroll_y), self.size)
    }
}

/// Fraction of `element`'s area that lies inside `viewport`, in `[0, 1]`.
///
/// Zero-area elements report `0.0`: they can never be seen.
pub fn intersection_ratio(viewport: Rect, element: Rect) -> f64 {
    let element = element.abs();
    let area = element.area();
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = viewport.abs().intersect(element);
    (overlap.area() / area).clamp(0.0, 1.0)
}
