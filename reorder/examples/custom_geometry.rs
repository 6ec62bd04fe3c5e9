use reorder::{GeometryProvider, Point, ReorderEngine, ReorderOptions, RowGeometry, Size};

// Example: a host that computes row geometry on the fly instead of building a snapshot.
struct VariableRows {
    heights: Vec<f32>,
    scroll_offset: f32,
    viewport: Size,
}

impl GeometryProvider for VariableRows {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn for_each_visible_row(&self, f: &mut dyn FnMut(RowGeometry)) {
        let mut start = 0.0f32;
        for (index, &size) in self.heights.iter().enumerate() {
            let top = start - self.scroll_offset;
            start += size;
            if top + size <= 0.0 {
                continue;
            }
            if top >= self.viewport.height {
                break;
            }
            f(RowGeometry { index, top, size });
        }
    }
}

fn main() {
    let host = VariableRows {
        heights: vec![40.0, 80.0, 40.0, 120.0, 40.0, 40.0],
        scroll_offset: 30.0,
        viewport: Size::new(320.0, 200.0),
    };
    let mut items: Vec<char> = "abcdef".chars().collect();
    let mut engine = ReorderEngine::new(ReorderOptions::default());

    println!(
        "visible={:?}..={:?}",
        host.first_visible_index(),
        host.last_visible_index()
    );

    let session = engine.begin_drag(Point::new(300.0, 50.0), &host, items.len());
    println!("session={session:?}");

    for delta in [30.0, 30.0, 60.0] {
        let update = engine.on_drag_move(&mut items, delta, &host);
        println!("update={update:?} items={items:?}");
    }
    println!("committed={:?}", engine.end_drag());
}
