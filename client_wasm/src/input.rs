//! Pointer coordinate mapping

use glam::Vec2;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Map a client-space point into field pixels given the element's bounding
/// box. The canvas may be scaled by CSS, so both axes are rescaled.
pub fn to_field(client: Vec2, origin: Vec2, display: Vec2, field: Vec2) -> Vec2 {
    let local = client - origin;
    let scale = Vec2::new(
        if display.x > 0.0 { field.x / display.x } else { 1.0 },
        if display.y > 0.0 { field.y / display.y } else { 1.0 },
    );
    local * scale
}

pub fn field_point(event: &MouseEvent, canvas: &HtmlCanvasElement, field: Vec2) -> Vec2 {
    client_to_field(
        Vec2::new(event.client_x() as f32, event.client_y() as f32),
        canvas,
        field,
    )
}

pub fn client_to_field(client: Vec2, canvas: &HtmlCanvasElement, field: Vec2) -> Vec2 {
    let bounds = canvas.get_bounding_client_rect();
    to_field(
        client,
        Vec2::new(bounds.left() as f32, bounds.top() as f32),
        Vec2::new(bounds.width() as f32, bounds.height() as f32),
        field,
    )
}

/// Client-space point of a mouse event
pub fn client_point(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}
