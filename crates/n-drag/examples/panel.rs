// SPDX-License-Identifier: MIT
//
// n-drag demo — a scripted drag across a saturation/value panel.
//
// Wires a `DragSession` to a `PointerHub`, feeds it a pointer path that
// starts on the panel, wanders off it and comes back, and prints the color
// under the pointer for every move the session reports. Moves that leave
// the panel never reach the callback.
//
// Usage:
//   cargo run -p n-drag --example panel

use n_color::hsv_to_rgb;
use n_drag::{DragConfig, DragSession, PointerEvent, PointerHub, TargetId};

/// Panel edge length in host pixels.
const PANEL_SIZE: f64 = 200.0;

/// Hue of the panel, normalized (0.6 ≈ blue).
const HUE: f64 = 0.6;

const PANEL: TargetId = TargetId(1);
const BACKDROP: TargetId = TargetId(2);

/// Color under (`x`, `y`): saturation grows rightward, value grows upward.
fn color_at(x: f64, y: f64) -> String {
    let s = (x / PANEL_SIZE).clamp(0.0, 1.0);
    let v = 1.0 - (y / PANEL_SIZE).clamp(0.0, 1.0);
    hsv_to_rgb(HUE, s, v).to_hex()
}

fn main() {
    let hub = PointerHub::new();

    let session = DragSession::new(
        hub.clone(),
        DragConfig::new()
            .on_start(|e| println!("start  ({:>5.1}, {:>5.1})  {}", e.x, e.y, color_at(e.x, e.y)))
            .on_move(|e| println!("move   ({:>5.1}, {:>5.1})  {}", e.x, e.y, color_at(e.x, e.y)))
            .on_end(|e| println!("end    ({:>5.1}, {:>5.1})  {}", e.x, e.y, color_at(e.x, e.y))),
    );
    session.attach(PANEL);

    let path = [
        PointerEvent::press(PANEL, 20.0, 180.0),
        PointerEvent::moved(PANEL, 60.0, 140.0),
        PointerEvent::moved(PANEL, 120.0, 80.0),
        PointerEvent::moved(BACKDROP, 240.0, 40.0),
        PointerEvent::moved(PANEL, 190.0, 10.0),
        PointerEvent::release(PANEL, 190.0, 10.0),
    ];

    for event in &path {
        let ran = hub.dispatch(event);
        if ran == 0 {
            println!("(no listeners for {:?} on {:?})", event.kind, event.target);
        }
    }

    println!("dragging after release: {}", session.is_dragging());
}
