use std::rc::Rc;

use drivesmart_core::action::ACTION_ATTRIBUTE;
use drivesmart_core::{
  Action,
  ConnectionStatus,
  FormField,
  SurfaceError,
  Target,
  UiController
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  KeyboardEvent,
  TouchEvent,
  Window
};

use crate::api::FetchTransport;
use crate::dom::{
  WebSurface,
  dom_error
};
use crate::timers::BrowserTimers;

pub type App = UiController<
  WebSurface,
  BrowserTimers,
  FetchTransport
>;

const VALIDATED_FORMS: &str =
  "form[data-validate]";
const REQUIRED_FIELDS: &str = "[required]";
const ERROR_CLASS: &str = "error";

/// Hooks the controller up to the document.
/// Listeners live as long as the page.
pub fn bind(
  app: &Rc<App>,
  window: &Window,
  document: &Document
) -> Result<(), SurfaceError> {
  let mut listeners = Vec::new();

  {
    let app = Rc::clone(app);
    listeners.push(EventListener::new(
      document,
      "keydown",
      move |event| {
        if let Some(event) =
          event.dyn_ref::<KeyboardEvent>()
        {
          app.on_key(&event.key());
        }
      }
    ));
  }

  {
    let app = Rc::clone(app);
    listeners.push(EventListener::new(
      document,
      "touchstart",
      move |event| {
        if let Some((x, y)) =
          touch_point(event, false)
        {
          app.on_touch_start(x, y);
        }
      }
    ));
  }

  {
    let app = Rc::clone(app);
    listeners.push(EventListener::new(
      document,
      "touchend",
      move |event| {
        if let Some((x, y)) =
          touch_point(event, true)
        {
          app.on_touch_end(x, y);
        }
      }
    ));
  }

  {
    let app = Rc::clone(app);
    listeners.push(
      EventListener::new_with_options(
        document,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
          if app.blocks_touch_scroll() {
            event.prevent_default();
          }
        }
      )
    );
  }

  for (name, status) in [
    ("online", ConnectionStatus::Online),
    ("offline", ConnectionStatus::Offline)
  ] {
    let app = Rc::clone(app);
    listeners.push(EventListener::new(
      window,
      name,
      move |_| {
        app.on_connectivity_change(status)
      }
    ));
  }

  if let Some(overlay) = document
    .get_element_by_id(Target::Overlay.element_id())
  {
    let app = Rc::clone(app);
    listeners.push(EventListener::new(
      &overlay,
      "click",
      move |_| app.close_all_modals()
    ));
  }

  listeners.extend(bind_actions(app, document)?);
  listeners.extend(bind_forms(app, document)?);

  tracing::info!(
    listeners = listeners.len(),
    "bound document events"
  );
  for listener in listeners {
    listener.forget();
  }
  Ok(())
}

fn bind_actions(
  app: &Rc<App>,
  document: &Document
) -> Result<Vec<EventListener>, SurfaceError> {
  let selector = format!("[{ACTION_ATTRIBUTE}]");
  let mut listeners = Vec::new();

  for element in
    query_all(document, &selector)?
  {
    let raw = element
      .get_attribute(ACTION_ATTRIBUTE)
      .unwrap_or_default();
    let action = match raw.parse::<Action>() {
      | Ok(action) => action,
      | Err(error) => {
        tracing::warn!(%error, "ignoring element action");
        continue;
      }
    };

    let app = Rc::clone(app);
    listeners.push(EventListener::new(
      &element,
      "click",
      move |_| dispatch(&app, action)
    ));
  }

  Ok(listeners)
}

fn dispatch(app: &Rc<App>, action: Action) {
  tracing::debug!(?action, "dispatching action");
  match action {
    | Action::ToggleSidebar => {
      app.toggle_sidebar()
    }
    | Action::ToggleUserMenu => {
      app.toggle_user_menu()
    }
    | Action::ToggleFabMenu => {
      app.toggle_fab_menu()
    }
    | Action::CloseModals => {
      app.close_all_modals()
    }
    | Action::ShowNotifications => {
      let app = Rc::clone(app);
      wasm_bindgen_futures::spawn_local(
        async move {
          app.show_notifications().await;
        }
      );
    }
  }
}

fn bind_forms(
  app: &Rc<App>,
  document: &Document
) -> Result<Vec<EventListener>, SurfaceError> {
  let mut listeners = Vec::new();

  for form in
    query_all(document, VALIDATED_FORMS)?
  {
    let app = Rc::clone(app);
    let target = form.clone();
    listeners.push(
      EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
          let fields = match required_fields(&target) {
            | Ok(fields) => fields,
            | Err(error) => {
              tracing::error!(
                error = %error,
                "failed collecting required fields"
              );
              return;
            }
          };
          if !app.validate_form(&fields) {
            event.prevent_default();
          }
        }
      )
    );
  }

  Ok(listeners)
}

/// A `[required]` control; the value is
/// read from whichever form control it is.
struct RequiredField(Element);

impl FormField for RequiredField {
  fn value(&self) -> String {
    if let Some(input) =
      self.0.dyn_ref::<HtmlInputElement>()
    {
      input.value()
    } else if let Some(area) =
      self.0.dyn_ref::<HtmlTextAreaElement>()
    {
      area.value()
    } else if let Some(select) =
      self.0.dyn_ref::<HtmlSelectElement>()
    {
      select.value()
    } else {
      String::new()
    }
  }

  fn set_error(&self, errored: bool) {
    let classes = self.0.class_list();
    let result = if errored {
      classes.add_1(ERROR_CLASS)
    } else {
      classes.remove_1(ERROR_CLASS)
    };
    if let Err(error) = result {
      tracing::warn!(error = ?error, "failed marking field");
    }
  }
}

fn required_fields(
  form: &Element
) -> Result<Vec<RequiredField>, SurfaceError> {
  let nodes = form
    .query_selector_all(REQUIRED_FIELDS)
    .map_err(dom_error)?;
  Ok(
    (0..nodes.length())
      .filter_map(|i| nodes.item(i))
      .filter_map(|node| node.dyn_into::<Element>().ok())
      .map(RequiredField)
      .collect()
  )
}

fn query_all(
  document: &Document,
  selector: &str
) -> Result<Vec<Element>, SurfaceError> {
  let nodes = document
    .query_selector_all(selector)
    .map_err(dom_error)?;
  Ok(
    (0..nodes.length())
      .filter_map(|i| nodes.item(i))
      .filter_map(|node| node.dyn_into::<Element>().ok())
      .collect()
  )
}

/// First point of `touches`, or of
/// `changedTouches` on touchend.
fn touch_point(
  event: &Event,
  changed: bool
) -> Option<(f64, f64)> {
  let event = event.dyn_ref::<TouchEvent>()?;
  let list = if changed {
    event.changed_touches()
  } else {
    event.touches()
  };
  let touch = list.get(0)?;
  Some((
    f64::from(touch.client_x()),
    f64::from(touch.client_y())
  ))
}
