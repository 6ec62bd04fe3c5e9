use reorder::{GeometrySnapshot, ReorderList, Size};
use reorder_adapter::{DragController, GestureConfig, PointerEvent};

fn main() {
    // Example: a host frame loop feeding raw pointer events through the controller.
    //
    // An adapter would:
    // - forward pointer events over the list to `on_pointer`
    // - call `tick(now_ms)` once per frame
    // - apply `scroll_request` to the real scroll container and rebuild the geometry
    // - render each row shifted by `row_offset(index)`
    let items: Vec<String> = (1..=30).map(|i| format!("item {i}")).collect();
    let list = ReorderList::new(items, |s: &String| s.clone());
    let mut c = DragController::new(list, GestureConfig::default());

    let row = 50.0f32;
    let viewport = Size::new(320.0, 300.0);
    let mut scroll = 0.0f32;
    let mut geometry = GeometrySnapshot::uniform(viewport, c.list().len(), row, scroll);

    let mut now_ms = 0u64;
    let mut y = 125.0f32;
    c.on_pointer(
        PointerEvent::Down {
            id: 7,
            pos: reorder::Point::new(300.0, y),
            now_ms,
        },
        &geometry,
    );

    // Hold still, then drag toward the bottom edge.
    for frame in 0..80 {
        now_ms += 16;
        let mut out = c.tick(now_ms, &geometry);
        if let Some(session) = out.started {
            println!("t={now_ms} drag started at {}", session.start_index);
        }
        if frame > 35 && y < 295.0 {
            y += 9.0;
            out = c.on_pointer(
                PointerEvent::Move {
                    id: 7,
                    pos: reorder::Point::new(300.0, y),
                    now_ms,
                },
                &geometry,
            );
        }
        if let Some(dy) = out.scroll_request {
            scroll = (scroll + dy).max(0.0);
            geometry = GeometrySnapshot::uniform(viewport, c.list().len(), row, scroll);
            println!("t={now_ms} auto-scroll by {dy:.1} to {scroll:.1}");
        }
    }

    let out = c.on_pointer(
        PointerEvent::Up {
            id: 7,
            pos: reorder::Point::new(300.0, y),
            now_ms,
        },
        &geometry,
    );
    println!("committed={:?}", out.committed);
    println!("first rows={:?}", &c.list().items()[..6]);
}
