mod api;
mod app;
mod dom;
mod events;
mod service_worker;
mod timers;

use gloo::events::EventListener;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting DriveSmart web shell"
  );

  let Some(document) = web_sys::window()
    .and_then(|window| window.document())
  else {
    tracing::error!("no document to attach to");
    return;
  };

  if document.ready_state() == "loading" {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| launch()
    )
    .forget();
  } else {
    launch();
  }
}

fn launch() {
  match app::start() {
    | Ok(_) => tracing::info!("web shell ready"),
    | Err(error) => tracing::error!(
      error = ?error,
      "failed to start web shell"
    )
  }
}
