use reorder::{GeometrySnapshot, Point, ReorderList, ReorderOptions, Size};

#[derive(Clone, Debug)]
struct Task {
    id: u32,
    title: &'static str,
}

fn main() {
    // Example: drag the first task two rows down by its handle.
    let tasks = vec![
        Task { id: 1, title: "write report" },
        Task { id: 2, title: "water plants" },
        Task { id: 3, title: "call bank" },
        Task { id: 4, title: "gym" },
    ];
    let mut list = ReorderList::new(tasks, |t: &Task| t.id)
        .with_options(ReorderOptions::new().with_handle_width(40.0))
        .with_on_move(|items: &[Task], mv| {
            // A real app would persist the new sort order here.
            let order: Vec<u32> = items.iter().map(|t| t.id).collect();
            println!("moved {} -> {}, new order {order:?}", mv.from, mv.to);
        });

    // The host lays out 56px rows in a 360x400 viewport.
    let geometry = GeometrySnapshot::uniform(Size::new(360.0, 400.0), list.len(), 56.0, 0.0);

    // Long-press on the handle of row 0.
    let session = list.begin_drag(Point::new(350.0, 20.0), &geometry);
    println!("session={session:?}");

    for delta in [18.0, 22.0, 30.0, 40.0] {
        let update = list.on_drag_move(delta, &geometry);
        println!(
            "delta={delta} index={:?} offset={:?} swaps={} scroll={:?}",
            update.session.map(|s| s.current_index),
            update.session.map(|s| s.accumulated_offset),
            update.swaps,
            update.scroll_request
        );
    }

    let committed = list.on_drag_end();
    println!("committed={committed:?}");
    for task in list.items() {
        println!("  {} {}", task.id, task.title);
    }
}
