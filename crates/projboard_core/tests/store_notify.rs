use projboard_core::{Project, ProjectStatus, ProjectStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn counting_store() -> (Rc<RefCell<ProjectStore>>, Rc<RefCell<Vec<Vec<Project>>>>) {
    let store = ProjectStore::shared();
    let deliveries: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&deliveries);
    store
        .borrow_mut()
        .add_listener(move |snapshot| sink.borrow_mut().push(snapshot));
    (store, deliveries)
}

#[test]
fn add_preserves_insertion_order_and_unique_ids() {
    let mut store = ProjectStore::new();
    let ids = [
        store.add_project("a", "first project", 1),
        store.add_project("b", "second project", 2),
        store.add_project("c", "third project", 3),
    ];

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(
        snapshot.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
        ["a", "b", "c"]
    );
    assert_eq!(snapshot.iter().map(|p| p.id).collect::<Vec<_>>(), ids);

    let distinct: HashSet<_> = ids.into_iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn add_notifies_each_listener_once_with_a_full_snapshot() {
    let (store, deliveries) = counting_store();
    store.borrow_mut().add_project("a", "first project", 1);

    let deliveries = deliveries.borrow();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].len(), 1);
    assert_eq!(deliveries[0][0].status, ProjectStatus::Active);
}

#[test]
fn move_with_unknown_id_is_a_silent_no_op() {
    let (store, deliveries) = counting_store();
    store.borrow_mut().add_project("a", "first project", 1);
    let before = store.borrow().snapshot();
    let delivered_before = deliveries.borrow().len();

    store
        .borrow_mut()
        .move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert_eq!(store.borrow().snapshot(), before);
    assert_eq!(deliveries.borrow().len(), delivered_before);
}

#[test]
fn move_to_the_current_status_does_not_notify() {
    let (store, deliveries) = counting_store();
    let id = store.borrow_mut().add_project("a", "first project", 1);
    let delivered_before = deliveries.borrow().len();

    store.borrow_mut().move_project(id, ProjectStatus::Active);

    assert_eq!(deliveries.borrow().len(), delivered_before);
    assert_eq!(store.borrow().snapshot()[0].status, ProjectStatus::Active);
}

#[test]
fn move_to_another_status_notifies_once_and_preserves_identity() {
    let (store, deliveries) = counting_store();
    let id = store.borrow_mut().add_project("a", "first project", 4);
    let delivered_before = deliveries.borrow().len();

    store.borrow_mut().move_project(id, ProjectStatus::Finished);

    let deliveries = deliveries.borrow();
    assert_eq!(deliveries.len(), delivered_before + 1);
    let moved = &deliveries.last().unwrap()[0];
    assert_eq!(moved.id, id);
    assert_eq!(moved.title, "a");
    assert_eq!(moved.description, "first project");
    assert_eq!(moved.number_of_people, 4);
    assert_eq!(moved.status, ProjectStatus::Finished);
}

#[test]
fn listeners_receive_an_independent_copy() {
    let store = ProjectStore::shared();
    store.borrow_mut().add_listener(|mut snapshot| {
        // Wrecking the delivered copy must not touch the store.
        snapshot.clear();
    });
    store.borrow_mut().add_project("a", "first project", 1);

    assert_eq!(store.borrow().len(), 1);
}

#[test]
fn listeners_are_notified_in_registration_order() {
    let store = ProjectStore::shared();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    store
        .borrow_mut()
        .add_listener(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    store
        .borrow_mut()
        .add_listener(move |_| second.borrow_mut().push("second"));

    store.borrow_mut().add_project("a", "first project", 1);

    assert_eq!(order.borrow().as_slice(), ["first", "second"]);
}
