//! Collision-free item id generation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{ItemId, TodoList};

/// Source of wall-clock time in milliseconds.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Hands out ids that follow the wall clock but never repeat.
///
/// Each id is `max(now_millis, last + 1)`: two additions inside the same
/// millisecond (or after the clock stepped backwards) still get distinct,
/// increasing values. Once `last` reaches `u64::MAX` the smallest numeric
/// id not present in the list is used instead.
pub struct IdGenerator {
    last: u64,
    clock: Box<dyn Clock>,
}

impl IdGenerator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { last: 0, clock }
    }

    /// Ensure every future id is strictly greater than `floor`.
    pub fn seed(&mut self, floor: u64) {
        self.last = self.last.max(floor);
    }

    /// Next id not already used by `list`.
    pub fn next_id(&mut self, list: &TodoList) -> ItemId {
        match self.last.checked_add(1) {
            Some(floor) => {
                let next = self.clock.now_millis().max(floor);
                self.last = next;
                ItemId::new(next)
            }
            None => {
                let free = (0..=u64::MAX)
                    .map(ItemId::new)
                    .find(|id| !list.contains(id));
                // A list holding every u64 cannot exist in memory
                free.unwrap_or(ItemId::new(0))
            }
        }
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use std::cell::Cell;
    use std::rc::Rc;

    struct SharedClock(Rc<Cell<u64>>);

    impl Clock for SharedClock {
        fn now_millis(&self) -> u64 {
            self.0.get()
        }
    }

    fn generator(time: &Rc<Cell<u64>>) -> IdGenerator {
        IdGenerator::new(Box::new(SharedClock(time.clone())))
    }

    #[test]
    fn same_tick_ids_do_not_collide() {
        let time = Rc::new(Cell::new(1_000));
        let mut ids = generator(&time);
        let list = TodoList::new();

        assert_eq!(ids.next_id(&list), ItemId::new(1_000));
        assert_eq!(ids.next_id(&list), ItemId::new(1_001));
        assert_eq!(ids.next_id(&list), ItemId::new(1_002));
    }

    #[test]
    fn follows_clock_when_it_advances() {
        let time = Rc::new(Cell::new(1_000));
        let mut ids = generator(&time);
        let list = TodoList::new();

        ids.next_id(&list);
        time.set(5_000);
        assert_eq!(ids.next_id(&list), ItemId::new(5_000));
    }

    #[test]
    fn clock_going_backwards_keeps_increasing() {
        let time = Rc::new(Cell::new(5_000));
        let mut ids = generator(&time);
        let list = TodoList::new();

        ids.next_id(&list);
        time.set(10);
        assert_eq!(ids.next_id(&list), ItemId::new(5_001));
    }

    #[test]
    fn seed_moves_floor_above_restored_ids() {
        let time = Rc::new(Cell::new(0));
        let mut ids = generator(&time);

        ids.seed(41);
        assert_eq!(ids.next_id(&TodoList::new()), ItemId::new(42));
    }

    #[test]
    fn exhausted_range_falls_back_to_smallest_unused_id() {
        let time = Rc::new(Cell::new(0));
        let mut ids = generator(&time);
        let list = TodoList::from(vec![
            Item::new(ItemId::new(u64::MAX), "max"),
            Item::new(ItemId::new(0), "zero"),
            Item::new(ItemId::new(1), "one"),
        ]);

        ids.seed(u64::MAX);
        assert_eq!(ids.next_id(&list), ItemId::new(2));
    }

    #[test]
    fn system_clock_is_past_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
