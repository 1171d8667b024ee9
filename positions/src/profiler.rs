use std::cell::RefCell;
use std::rc::Rc;

/// Sink for the counters of the manager.
pub trait Profiler {
    fn increment_call_counter(&mut self, name: &str);
    fn add_time(&mut self, name: &str, time_ms: f64);
}

pub type ProfilerHandle = Rc<RefCell<dyn Profiler>>;
