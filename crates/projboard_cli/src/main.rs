//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projboard_core` linkage.
//! - Walk the whole board flow once with deterministic output.

use projboard_core::{
    payload_for_item, DragGesture, ListView, ProjectForm, ProjectStatus, ProjectStore,
    SharedListView,
};
use std::rc::Rc;

fn main() {
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    let store = ProjectStore::shared();
    let active = ListView::attach(&store, ProjectStatus::Active);
    let finished = ListView::attach(&store, ProjectStatus::Finished);

    let mut form = ProjectForm::new(Rc::clone(&store));
    form.set_title("Build API");
    form.set_description("Design and build");
    form.set_people("3");
    match form.submit() {
        Ok(_) => println!("submit=ok"),
        Err(err) => println!("submit=rejected reason={err}"),
    }
    print_board(&active, &finished);

    // One drag gesture: the sole active item moves to the finished list.
    let mut gesture = DragGesture::new();
    if let Some((payload, effect)) = payload_for_item(&active, 0) {
        let mut target = Rc::clone(&finished);
        gesture.begin_with(payload, effect);
        gesture.over(&mut target);
        gesture.drop_on(&mut target);
        println!("drag=done");
    }
    print_board(&active, &finished);
}

fn print_board(active: &SharedListView, finished: &SharedListView) {
    for view in [active, finished] {
        let view = view.borrow();
        println!("{}", view.title());
        for item in view.items() {
            println!("  - {} ({})", item.heading(), item.subheading());
        }
    }
}
