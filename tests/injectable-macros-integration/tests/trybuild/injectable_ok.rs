use di_abstractions::{Injectable, Resolver, TypeRegistry};
use di_impl::SimpleContainer;
use injectable_macros::Injectable;
use std::sync::Arc;

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

trait Schedule: Send + Sync {
    fn next(&self) -> u64;
    fn has_backup(&self) -> bool;
}

#[derive(Injectable)]
#[injectable(implements(dyn Clock))]
struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        7
    }
}

#[derive(Injectable)]
#[injectable(implements(dyn Schedule))]
struct Scheduler {
    clock: Arc<dyn Clock>,
    #[inject]
    backup: Option<Arc<dyn Clock>>,
    ticks: u64,
}

impl Schedule for Scheduler {
    fn next(&self) -> u64 {
        self.clock.now() + self.ticks
    }

    fn has_backup(&self) -> bool {
        self.backup.is_some()
    }
}

fn main() {
    let descriptor = Scheduler::describe();
    assert_eq!(descriptor.constructor_count(), 1);

    let container = SimpleContainer::create_instance();
    container.register::<dyn Clock, FixedClock>();
    container.register::<dyn Schedule, Scheduler>();

    let schedule = container.resolve::<dyn Schedule>().unwrap();
    assert_eq!(schedule.next(), 7);
    assert!(schedule.has_backup());
}
