use super::*;

#[derive(Clone)]
pub(crate) struct Viewer {
  container: HtmlElement,
  label: HtmlElement,
  listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl Viewer {
  /// Returns `None` unless both presentation targets exist, in which case
  /// the caller must not touch the network or the document.
  pub(crate) fn mount(container_id: &str, label_id: &str) -> Option<Self> {
    let document = web_sys::window()?.document()?;

    let container = document
      .get_element_by_id(container_id)?
      .dyn_into::<HtmlElement>()
      .ok()?;

    let label = document
      .get_element_by_id(label_id)?
      .dyn_into::<HtmlElement>()
      .ok()?;

    Some(Self {
      container,
      label,
      listeners: Rc::new(RefCell::new(Vec::new())),
    })
  }

  pub(crate) async fn load(&self) {
    self.render("Loading...", &LoadingHtml.to_string());

    match fetch_random().await {
      Ok(comic) => {
        self.render(&comic.label(), &ComicHtml { comic }.to_string());
        self.bind("button#new-random");
      }
      Err(err) => {
        log::error!("failed to load comic: {err}");
        self.render("Error", &FailureHtml.to_string());
        self.bind("button#try-again");
      }
    }
  }

  // Label and body always change together, so the number can never name a
  // different comic than the one on screen.
  fn render(&self, label: &str, body: &str) {
    self.listeners.borrow_mut().clear();
    self.label.set_text_content(Some(label));
    self.container.set_inner_html(body);
  }

  fn bind(&self, selector: &str) {
    let viewer = self.clone();

    let listener = self
      .container
      .select::<HtmlButtonElement>(selector)
      .add_event_listener("click", move |_: PointerEvent| -> Promise {
        let viewer = viewer.clone();
        // Reloading as a microtask keeps this closure alive while it runs;
        // render would otherwise drop its own listener mid-invocation.
        wasm_bindgen_futures::future_to_promise(async move {
          viewer.load().await;
          Ok(JsValue::UNDEFINED)
        })
      });

    self.listeners.borrow_mut().push(listener);
  }
}

async fn fetch_random() -> Result<Comic, Error> {
  let archive = Archive::default();

  let latest = archive.latest().await?;

  archive.comic(pick(latest.num, Math::random())).await
}

/// Uniform pick from the closed range `[1, latest]` given a sample from
/// `[0, 1)`. The latest id is reachable like any other.
fn pick(latest: u32, sample: f64) -> u32 {
  (sample * f64::from(latest)).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pick_stays_in_range() {
    for latest in [1, 2, 1000] {
      for i in 0..10_000 {
        let sample = f64::from(i) / 10_000.0;
        let id = pick(latest, sample);
        assert!(
          (1..=latest).contains(&id),
          "pick({latest}, {sample}) = {id}",
        );
      }
    }
  }

  #[test]
  fn pick_reaches_both_bounds() {
    assert_eq!(pick(1000, 0.0), 1);
    assert_eq!(pick(1000, 0.999_999_9), 1000);
    assert_eq!(pick(1, 0.0), 1);
    assert_eq!(pick(1, 0.999_999_9), 1);
  }

  #[test]
  fn forced_sample_picks_comic_seven() {
    assert_eq!(pick(50, 0.13), 7);
  }
}
