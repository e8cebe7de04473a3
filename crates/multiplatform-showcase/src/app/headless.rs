//! Helpers driving egui frames without a window.

use egui::{Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Vec2};

/// Screen used by headless frames, tall enough for the expanded list.
pub const SCREEN_SIZE: Vec2 = egui::vec2(480.0, 900.0);

pub fn input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN_SIZE)),
        events,
        ..Default::default()
    }
}

/// Every painted text with its bounds, in paint order.
pub fn texts(output: &FullOutput) -> Vec<(String, Rect)> {
    fn collect(shape: &Shape, found: &mut Vec<(String, Rect)>) {
        match shape {
            Shape::Text(text) => {
                found.push((text.galley.text().to_string(), shape.visual_bounding_rect()))
            }
            Shape::Vec(shapes) => shapes.iter().for_each(|shape| collect(shape, found)),
            _ => {}
        }
    }

    let mut found = Vec::new();
    for clipped in &output.shapes {
        collect(&clipped.shape, &mut found);
    }
    found
}

/// Center of the first painted text equal to `label`.
pub fn text_center(output: &FullOutput, label: &str) -> Option<Pos2> {
    texts(output)
        .into_iter()
        .find(|(text, _)| text == label)
        .map(|(_, rect)| rect.center())
}

/// Event batches for one primary click at `pos`, one batch per frame.
pub fn click_frames(pos: Pos2) -> [Vec<Event>; 3] {
    let button = |pressed| Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    };
    [vec![Event::PointerMoved(pos)], vec![button(true)], vec![button(false)]]
}

pub fn key(key: egui::Key, pressed: bool) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}
