use super::{Contexts, Handler, Storage};

#[test]
fn test_contexts_forward_without_save() {
    let storage: Storage<u32> = Storage::new();
    let contexts = Contexts::new(&storage);

    contexts.receive(1);
    assert_eq!(*storage.as_vec(), vec![1]);
}

#[test]
fn test_contexts_commit_merges_into_enclosing() {
    let storage: Storage<u32> = Storage::new();
    let contexts = Contexts::new(&storage);

    let outer = contexts.save();
    contexts.receive(1);

    let inner = contexts.save();
    contexts.receive(2);
    contexts.receive(3);
    assert_eq!(contexts.count(), 2);

    contexts.commit(inner);
    assert_eq!(contexts.count(), 3);
    assert!(storage.as_vec().is_empty());

    contexts.commit(outer);
    assert_eq!(*storage.as_vec(), vec![1, 2, 3]);
}

#[test]
fn test_contexts_clear_discards() {
    let storage: Storage<u32> = Storage::new();
    let contexts = Contexts::new(&storage);

    let outer = contexts.save();
    contexts.receive(1);

    let inner = contexts.save();
    contexts.receive(2);
    contexts.clear(inner);

    contexts.commit(outer);
    assert_eq!(*storage.as_vec(), vec![1]);
}

#[test]
#[should_panic = "reverse order"]
fn test_contexts_commit_out_of_order() {
    let storage: Storage<u32> = Storage::new();
    let contexts = Contexts::new(&storage);

    let outer = contexts.save();
    let _inner = contexts.save();

    contexts.commit(outer);
}
