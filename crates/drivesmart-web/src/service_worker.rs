use gloo::console::log;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
  ServiceWorkerRegistration,
  Window
};

pub fn register(window: &Window, path: &str) {
  let navigator = window.navigator();
  let supported = js_sys::Reflect::has(
    navigator.as_ref(),
    &JsValue::from_str("serviceWorker")
  )
  .ok()
  .unwrap_or(false);

  if !supported {
    tracing::warn!(
      "service workers unsupported in \
       this runtime"
    );
    return;
  }

  let promise =
    navigator.service_worker().register(path);
  let path = path.to_string();

  wasm_bindgen_futures::spawn_local(
    async move {
      match JsFuture::from(promise).await {
        | Ok(registration) => {
          let scope = registration
            .dyn_into::<ServiceWorkerRegistration>()
            .map(|r| r.scope())
            .unwrap_or_default();
          tracing::info!(
            %path,
            %scope,
            "service worker registered"
          );
          log!(format!(
            "Service Worker registered: {scope}"
          ));
        }
        | Err(error) => {
          tracing::error!(
            error = ?error,
            %path,
            "service worker registration \
             failed"
          );
        }
      }
    }
  );
}
