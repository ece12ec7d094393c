use {
  js_sys::Function,
  reqwest::{StatusCode, Url},
  serde::de::DeserializeOwned,
  snafu::{ensure, ResultExt, Snafu},
  std::{any::Any, ops::Deref},
  wasm_bindgen::{
    closure::Closure,
    convert::{FromWasmAbi, IntoWasmAbi},
    JsCast, JsError, JsValue,
  },
  web_sys::{Element, EventTarget},
};

pub use {
  self::{
    api::Api,
    error::Error,
    event_target_ext::{EventListener, EventTargetExt},
    select::Select,
  },
  js_sys, log, wasm_bindgen, wasm_bindgen_futures, web_sys,
};

mod api;
mod error;
mod event_target_ext;
mod select;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}
