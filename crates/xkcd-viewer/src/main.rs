use {
  self::{
    api::{Archive, ARCHIVE},
    comic::Comic,
    templates::{ComicHtml, FailureHtml, LoadingHtml},
    viewer::Viewer,
  },
  boilerplate::Boilerplate,
  browser::{
    js_sys::{Math, Promise},
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsCast, JsValue},
    wasm_bindgen_futures,
    web_sys::{self, HtmlButtonElement, HtmlElement, PointerEvent},
    Api, Error, EventListener, EventTargetExt, Select,
  },
  serde::Deserialize,
  std::{cell::RefCell, rc::Rc},
};

mod api;
mod comic;
mod templates;
mod viewer;

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  browser::initialize_console(log::Level::Info)?;

  // The hosting page loads this module once its structural content is
  // ready. A page without the widget targets is a no-op.
  let Some(viewer) = Viewer::mount("xkcd-container", "comic-number") else {
    return Ok(());
  };

  viewer.load().await;

  Ok(())
}
