use std::rc::Rc;

use anyhow::Context;
use drivesmart_core::{
  UiConfig,
  UiController
};

use crate::api::FetchTransport;
use crate::dom::WebSurface;
use crate::events::{
  self,
  App
};
use crate::service_worker;
use crate::timers::BrowserTimers;

const UI_CONFIG_TOML: &str =
  include_str!("../ui-config.toml");

/// Builds the controller for the current
/// document and wires it to the page.
pub fn start() -> anyhow::Result<Rc<App>> {
  let window = web_sys::window()
    .context("no global window")?;
  let document = window
    .document()
    .context("window has no document")?;

  let config = UiConfig::load(UI_CONFIG_TOML);
  let surface = WebSurface::bind(&document)
    .context("failed binding panel elements")?;

  let app = Rc::new(UiController::new(
    config,
    surface,
    BrowserTimers,
    FetchTransport
  ));
  app.init_connectivity(
    window.navigator().on_line()
  );

  events::bind(&app, &window, &document)
    .context("failed binding document events")?;

  if app.config().register_service_worker {
    service_worker::register(
      &window,
      &app.config().service_worker_path
    );
  }

  Ok(app)
}
