use super::*;

pub trait Select {
  fn select<T: JsCast>(&self, selector: &str) -> T;

  fn select_optional<T: JsCast>(&self, selector: &str) -> Option<T>;
}

impl<D: Deref<Target = Element>> Select for D {
  fn select<T: JsCast>(&self, selector: &str) -> T {
    self
      .select_optional::<T>(selector)
      .expect("selector returned no elements")
  }

  fn select_optional<T: JsCast>(&self, selector: &str) -> Option<T> {
    self
      .query_selector(selector)
      .expect("invalid selector")
      .map(|element| element.dyn_into::<T>().expect("cast failed"))
  }
}
