use super::*;

/// Detaches the listener from its target when dropped, so callers decide
/// exactly when a handler stops firing instead of waiting for the owning
/// DOM subtree to be replaced.
#[must_use]
pub struct EventListener {
  event_type: &'static str,
  function: Function,
  target: EventTarget,
  _closure: Box<dyn Any>,
}

impl Drop for EventListener {
  fn drop(&mut self) {
    self
      .target
      .remove_event_listener_with_callback(self.event_type, &self.function)
      .ok();
  }
}

pub trait EventTargetExt {
  fn add_event_listener<E, F, R>(&self, event_type: &'static str, callback: F) -> EventListener
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn add_event_listener<E, F, R>(&self, event_type: &'static str, callback: F) -> EventListener
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static,
  {
    let closure: Closure<dyn FnMut(E) -> R> = Closure::new(callback);

    let function = closure.as_ref().dyn_ref::<Function>().unwrap().clone();

    self
      .add_event_listener_with_callback(event_type, &function)
      .unwrap();

    EventListener {
      event_type,
      function,
      target: self.deref().clone(),
      _closure: Box::new(closure),
    }
  }
}
