//! Navbar state: the scroll threshold, the overlay menu and the body scroll lock.
//!
//! Nothing in here touches the reactive runtime, the DOM side lives behind
//! [`Overflow`] so the lock can be exercised without a browser.

/// Vertical offset (px) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Used by every link inside the overlay, regardless of how we got here.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }
}

/// Something whose scrolling can be switched off and back on.
pub trait Overflow {
    fn lock(&self);
    fn unlock(&self);
}

impl Overflow for web_sys::HtmlElement {
    fn lock(&self) {
        if let Err(e) = self.style().set_property("overflow", "hidden") {
            log::warn!("failed to lock body scroll: {:?}", e);
        }
    }

    fn unlock(&self) {
        if let Err(e) = self.style().remove_property("overflow") {
            log::warn!("failed to restore body scroll: {:?}", e);
        }
    }
}

/// Held while the overlay is visible. Dropping it restores scrolling.
#[must_use = "scrolling is restored as soon as the lock is dropped"]
pub struct ScrollLock<T: Overflow> {
    target: T,
}

impl<T: Overflow> ScrollLock<T> {
    pub fn engage(target: T) -> Self {
        target.lock();
        Self { target }
    }
}

impl<T: Overflow> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.unlock();
    }
}

/// Brings `slot` in line with the menu: a lock is held iff `open`.
///
/// `acquire` is only called on a closed -> open transition; if it yields
/// nothing (no body element) the slot stays empty.
pub fn sync_scroll_lock<T, F>(slot: &mut Option<ScrollLock<T>>, open: bool, acquire: F)
where
    T: Overflow,
    F: FnOnce() -> Option<T>,
{
    match (open, slot.is_some()) {
        (true, false) => *slot = acquire().map(ScrollLock::engage),
        (false, true) => {
            slot.take();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        locked: Rc<Cell<bool>>,
        locks: Rc<Cell<usize>>,
    }

    impl Overflow for FakeBody {
        fn lock(&self) {
            self.locked.set(true);
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.locked.set(false);
        }
    }

    #[derive(Copy, Clone)]
    enum Op {
        Toggle,
        Close,
    }

    #[test]
    fn threshold_is_exclusive() {
        let got: Vec<bool> = [0.0, 20.0, 21.0, 1000.0].into_iter().map(is_scrolled).collect();
        assert_eq!(got, vec![false, false, true, true]);
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn close_wins_over_any_toggle_count() {
        for toggles in 0..5 {
            let mut menu = MenuState::default();
            for _ in 0..toggles {
                menu.toggle();
            }
            menu.close();
            assert_eq!(menu, MenuState::Closed, "after {toggles} toggles");
        }
    }

    #[test]
    fn lock_restores_on_drop() {
        let body = FakeBody::default();
        let lock = ScrollLock::engage(body.clone());
        assert!(body.locked.get());
        drop(lock);
        assert!(!body.locked.get());
    }

    #[test]
    fn sync_is_idempotent() {
        let body = FakeBody::default();
        let mut slot = None;

        sync_scroll_lock(&mut slot, true, || Some(body.clone()));
        sync_scroll_lock(&mut slot, true, || Some(body.clone()));
        assert_eq!(body.locks.get(), 1);
        assert!(body.locked.get());

        sync_scroll_lock(&mut slot, false, || Some(body.clone()));
        sync_scroll_lock(&mut slot, false, || Some(body.clone()));
        assert!(slot.is_none());
        assert!(!body.locked.get());
    }

    #[test]
    fn missing_body_takes_no_lock() {
        let mut slot: Option<ScrollLock<FakeBody>> = None;
        sync_scroll_lock(&mut slot, true, || None);
        assert!(slot.is_none());
    }

    #[test]
    fn lock_tracks_menu_through_every_sequence() {
        // every sequence of up to 6 operations
        for len in 0..=6u32 {
            for bits in 0..(1u32 << len) {
                let ops: Vec<Op> = (0..len)
                    .map(|i| if bits >> i & 1 == 1 { Op::Toggle } else { Op::Close })
                    .collect();

                let body = FakeBody::default();
                let mut menu = MenuState::default();
                let mut slot = None;
                sync_scroll_lock(&mut slot, menu.is_open(), || Some(body.clone()));
                assert!(!body.locked.get());

                for op in &ops {
                    match op {
                        Op::Toggle => menu.toggle(),
                        Op::Close => menu.close(),
                    }
                    sync_scroll_lock(&mut slot, menu.is_open(), || Some(body.clone()));
                    assert_eq!(body.locked.get(), menu.is_open());
                }

                // view teardown
                drop(slot);
                assert!(!body.locked.get());
            }
        }
    }
}
