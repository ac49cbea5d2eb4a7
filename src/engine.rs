use crate::environment::{Environment, Event, ListenerHandle, TimerHandle};

/// A mounted component driven by timers and events from its host.
///
/// `on_timer` and `on_event` return `true` when the handle belonged to the
/// widget. After `unmount` the widget owns no timers and no listeners.
pub trait Widget {
    fn name(&self) -> &'static str;
    fn mount(&mut self, env: &mut dyn Environment);
    fn on_timer(&mut self, handle: TimerHandle, env: &mut dyn Environment) -> bool;
    fn on_event(&mut self, listener: ListenerHandle, event: &Event, env: &mut dyn Environment) -> bool;
    fn unmount(&mut self, env: &mut dyn Environment);
}
