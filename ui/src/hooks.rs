use leptos::ev::scroll;
use leptos::prelude::{
    Effect, GetUntracked, LocalStorage, ReadSignal, Set, StoredValue, UpdateValue, document,
    on_cleanup, signal, window,
};
use leptos_use::{UseEventListenerOptions, use_event_listener_with_options, use_window};

use crate::nav::{Overflow, ScrollLock, is_scrolled, sync_scroll_lock};

/// `true` once the window has been scrolled past the navbar threshold.
///
/// Starts `false` and is only recomputed on scroll notifications. The
/// listener is passive and goes away with the calling component.
pub fn use_scrolled() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    let _ = use_event_listener_with_options(
        use_window(),
        scroll,
        move |_| {
            let now = is_scrolled(window().scroll_y().unwrap_or_default());
            // only notify the navbar on an actual flip
            if now != scrolled.get_untracked() {
                set_scrolled.set(now);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    scrolled
}

type LockSlot<T> = StoredValue<Option<ScrollLock<T>>, LocalStorage>;

/// Empty lock slot owned by the current reactive owner.
///
/// Whatever lock it holds is released when the owner is cleaned up.
fn scroll_lock_slot<T: Overflow + 'static>() -> LockSlot<T> {
    let held: LockSlot<T> = StoredValue::new_local(None);

    on_cleanup(move || {
        if held.try_update_value(|slot| slot.take()).is_none() {
            // value already disposed, its Drop did the unlock
            log::debug!("scroll lock slot gone before cleanup");
        }
    });

    held
}

/// Holds a lock on whatever `acquire` yields while `open()` is true.
///
/// The lock is released when `open()` turns false and again on cleanup of
/// the calling component, so a torn-down view never leaves the page stuck.
pub fn use_scroll_lock_with<T, O, A>(open: O, acquire: A)
where
    T: Overflow + 'static,
    O: Fn() -> bool + 'static,
    A: Fn() -> Option<T> + 'static,
{
    let held = scroll_lock_slot::<T>();

    Effect::new(move |_| {
        let open = open();
        held.update_value(|slot| sync_scroll_lock(slot, open, &acquire));
        log::debug!("scroll lock held: {open}");
    });
}

/// Keeps `document.body` from scrolling while `open()` is true.
pub fn use_body_scroll_lock(open: impl Fn() -> bool + 'static) {
    use_scroll_lock_with(open, || document().body());
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        locked: Rc<Cell<bool>>,
    }

    impl Overflow for FakeBody {
        fn lock(&self) {
            self.locked.set(true);
        }

        fn unlock(&self) {
            self.locked.set(false);
        }
    }

    #[test]
    fn owner_cleanup_releases_held_lock() {
        let body = FakeBody::default();
        let owner = Owner::new();
        let held = owner.with(scroll_lock_slot::<FakeBody>);

        held.update_value(|slot| sync_scroll_lock(slot, true, || Some(body.clone())));
        assert!(body.locked.get());

        owner.cleanup();
        assert!(!body.locked.get());
    }

    #[test]
    fn closing_before_cleanup_leaves_nothing_to_release() {
        let body = FakeBody::default();
        let owner = Owner::new();
        let held = owner.with(scroll_lock_slot::<FakeBody>);

        held.update_value(|slot| sync_scroll_lock(slot, true, || Some(body.clone())));
        held.update_value(|slot| sync_scroll_lock(slot, false, || Some(body.clone())));
        assert!(!body.locked.get());

        owner.cleanup();
        assert!(!body.locked.get());
    }

    #[test]
    fn cleanup_without_lock_is_harmless() {
        let body = FakeBody::default();
        let owner = Owner::new();
        let held = owner.with(scroll_lock_slot::<FakeBody>);

        held.update_value(|slot| sync_scroll_lock(slot, false, || Some(body.clone())));
        owner.cleanup();
        assert!(!body.locked.get());
    }
}
