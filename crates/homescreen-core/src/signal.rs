use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubId = usize;

#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<Vec<(SubId, Rc<dyn Fn(&T)>)>>,
    next_sub: Cell<SubId>,
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
            next_sub: Cell::new(0),
        }))
    }
    pub fn get(&self) -> T {
        self.0.value.borrow().clone()
    }
    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.value.borrow())
    }
    pub fn set(&self, v: T) {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.0.next_sub.get();
        self.0.next_sub.set(id + 1);
        self.0.subs.borrow_mut().push((id, Rc::new(f)));
        id
    }
    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        let mut subs = self.0.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }
    pub fn subscriber_count(&self) -> usize {
        self.0.subs.borrow().len()
    }

    // Subscribers run on a snapshot with no borrows held, so they may read,
    // write or (un)subscribe this signal.
    fn notify(&self) {
        let snapshot = self.get();
        let subs: Vec<Rc<dyn Fn(&T)>> =
            self.0.subs.borrow().iter().map(|(_, s)| s.clone()).collect();
        for s in subs {
            s(&snapshot);
        }
    }
}

pub fn signal<T: Clone + 'static>(t: T) -> Signal<T> {
    Signal::new(t)
}
