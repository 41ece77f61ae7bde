use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{
  DateTime,
  Datelike,
  NaiveDateTime,
  Timelike,
  Utc
};
use drivesmart_core::connectivity::CONNECTION_ATTRIBUTE;
use drivesmart_core::notifications::{
  DISMISS_GLYPH,
  PANEL_TITLE
};
use drivesmart_core::panel::FAB_ICON_ID;
use drivesmart_core::surface::Callback;
use drivesmart_core::{
  ConnectionStatus,
  Locale,
  NotificationPanelId,
  NotificationPanelView,
  Surface,
  SurfaceError,
  Target,
  Toast,
  ToastId
};
use gloo::events::EventListener;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Document,
  Element,
  HtmlElement
};

const ACTIVE_CLASS: &str = "active";

/// A mounted transient element and the
/// listener that dismisses it.
struct Mounted {
  element:   HtmlElement,
  _listener: EventListener
}

struct Inner {
  document: Document,
  body:     HtmlElement,
  targets:  HashMap<Target, Element>,
  fab_icon: Element,
  toasts:   RefCell<HashMap<ToastId, Mounted>>,
  panels:
    RefCell<HashMap<NotificationPanelId, Mounted>>
}

/// [`Surface`] over the live document.
#[derive(Clone)]
pub struct WebSurface {
  inner: Rc<Inner>
}

impl WebSurface {
  /// Resolves the panel elements. Every
  /// one of them must already exist.
  pub fn bind(
    document: &Document
  ) -> Result<Self, SurfaceError> {
    let body = document
      .body()
      .ok_or(SurfaceError::MissingElement("body"))?;

    let mut targets = HashMap::new();
    for target in Target::ALL {
      targets.insert(
        target,
        element_by_id(document, target.element_id())?
      );
    }
    let fab_icon =
      element_by_id(document, FAB_ICON_ID)?;

    tracing::debug!(
      targets = targets.len(),
      "bound panel elements"
    );

    Ok(Self {
      inner: Rc::new(Inner {
        document: document.clone(),
        body,
        targets,
        fab_icon,
        toasts: RefCell::default(),
        panels: RefCell::default()
      })
    })
  }

  fn create(
    &self,
    tag: &str,
    class: &str,
    text: Option<&str>
  ) -> Result<HtmlElement, SurfaceError> {
    let element = self
      .inner
      .document
      .create_element(tag)
      .map_err(dom_error)?
      .dyn_into::<HtmlElement>()
      .map_err(|el| {
        dom_error(el.into())
      })?;
    if !class.is_empty() {
      element.set_class_name(class);
    }
    if text.is_some() {
      element.set_text_content(text);
    }
    Ok(element)
  }

  fn build_notifications(
    &self,
    view: &NotificationPanelView
  ) -> Result<(HtmlElement, HtmlElement), SurfaceError>
  {
    let dropdown = self.create(
      "div",
      "notification-dropdown",
      None
    )?;

    let header = self.create(
      "div",
      "notification-header",
      None
    )?;
    let title =
      self.create("h3", "", Some(PANEL_TITLE))?;
    let close = self.create(
      "button",
      "",
      Some(DISMISS_GLYPH)
    )?;
    close
      .set_attribute("type", "button")
      .map_err(dom_error)?;
    append(&header, &title)?;
    append(&header, &close)?;
    append(&dropdown, &header)?;

    let list = self.create(
      "div",
      "notification-list",
      None
    )?;
    for row in &view.rows {
      let item =
        self.create("div", row.class_name(), None)?;
      let icon = self.create(
        "div",
        "notification-icon",
        Some(row.icon.as_str())
      )?;
      let content = self.create(
        "div",
        "notification-content",
        None
      )?;
      let title = self.create(
        "div",
        "notification-title",
        Some(row.title.as_str())
      )?;
      let time = self.create(
        "div",
        "notification-time",
        Some(row.time_label.as_str())
      )?;
      append(&content, &title)?;
      append(&content, &time)?;
      append(&item, &icon)?;
      append(&item, &content)?;
      append(&list, &item)?;
    }
    append(&dropdown, &list)?;

    Ok((dropdown, close))
  }
}

impl Surface for WebSurface {
  fn set_active(
    &self,
    target: Target,
    active: bool
  ) {
    let Some(element) =
      self.inner.targets.get(&target)
    else {
      return;
    };
    let classes = element.class_list();
    let result = if active {
      classes.add_1(ACTIVE_CLASS)
    } else {
      classes.remove_1(ACTIVE_CLASS)
    };
    if let Err(error) = result {
      tracing::warn!(
        error = ?error,
        element = target.element_id(),
        "failed updating active class"
      );
    }
  }

  fn set_scroll_locked(&self, locked: bool) {
    let style = self.inner.body.style();
    let result = if locked {
      style.set_property("overflow", "hidden")
    } else {
      style
        .remove_property("overflow")
        .map(|_| ())
    };
    if let Err(error) = result {
      tracing::warn!(
        error = ?error,
        locked,
        "failed updating body overflow"
      );
    }
  }

  fn set_fab_glyph(&self, glyph: &str) {
    self
      .inner
      .fab_icon
      .set_text_content(Some(glyph));
  }

  fn set_connection_status(
    &self,
    status: ConnectionStatus
  ) {
    if let Err(error) = self
      .inner
      .body
      .set_attribute(
        CONNECTION_ATTRIBUTE,
        status.as_str()
      )
    {
      tracing::warn!(
        error = ?error,
        %status,
        "failed stamping connection status"
      );
    }
  }

  fn install_style(
    &self,
    id: &str,
    css: &str
  ) -> Result<bool, SurfaceError> {
    let document = &self.inner.document;
    if document.get_element_by_id(id).is_some()
    {
      return Ok(false);
    }

    let head = document
      .head()
      .ok_or(SurfaceError::MissingElement("head"))?;
    let style = self.create("style", "", Some(css))?;
    style.set_id(id);
    append(&head, &style)?;
    Ok(true)
  }

  fn mount_toast(
    &self,
    toast: &Toast,
    on_click: Callback
  ) -> Result<(), SurfaceError> {
    let element = self.create(
      "div",
      &toast.class_name(),
      Some(toast.message.as_str())
    )?;
    element
      .set_attribute("style", &toast.inline_style())
      .map_err(dom_error)?;
    element
      .set_attribute("role", "status")
      .map_err(dom_error)?;

    let listener =
      deferred_click(&element, on_click);
    append(&self.inner.body, &element)?;

    self.inner.toasts.borrow_mut().insert(
      toast.id,
      Mounted {
        element,
        _listener: listener
      }
    );
    Ok(())
  }

  fn set_toast_animation(
    &self,
    id: ToastId,
    animation: &str
  ) {
    let toasts = self.inner.toasts.borrow();
    let Some(mounted) = toasts.get(&id) else {
      return;
    };
    if let Err(error) = mounted
      .element
      .style()
      .set_property("animation", animation)
    {
      tracing::warn!(
        error = ?error,
        %id,
        "failed switching toast animation"
      );
    }
  }

  fn remove_toast(&self, id: ToastId) {
    let mounted =
      self.inner.toasts.borrow_mut().remove(&id);
    if let Some(mounted) = mounted {
      mounted.element.remove();
    }
  }

  fn mount_notifications(
    &self,
    id: NotificationPanelId,
    view: &NotificationPanelView,
    on_dismiss: Callback
  ) -> Result<(), SurfaceError> {
    let (dropdown, close) =
      self.build_notifications(view)?;
    let listener =
      deferred_click(&close, on_dismiss);
    append(&self.inner.body, &dropdown)?;

    self.inner.panels.borrow_mut().insert(
      id,
      Mounted {
        element:   dropdown,
        _listener: listener
      }
    );
    Ok(())
  }

  fn remove_notifications(
    &self,
    id: NotificationPanelId
  ) {
    let mounted =
      self.inner.panels.borrow_mut().remove(&id);
    if let Some(mounted) = mounted {
      mounted.element.remove();
    }
  }
}

/// Zone and date format come from the
/// browser via `Date`.
impl Locale for WebSurface {
  fn local_to_utc(
    &self,
    naive: NaiveDateTime
  ) -> Option<DateTime<Utc>> {
    let year = u32::try_from(naive.year()).ok()?;
    let millis = naive.nanosecond() / 1_000_000;
    let date =
      js_sys::Date::new_with_year_month_day_hr_min_sec_milli(
        year,
        naive.month0() as i32,
        naive.day() as i32,
        naive.hour() as i32,
        naive.minute() as i32,
        naive.second() as i32,
        millis as i32
      );
    let epoch_ms = date.get_time();
    if epoch_ms.is_nan() {
      return None;
    }
    DateTime::from_timestamp_millis(epoch_ms as i64)
  }

  fn date_label(
    &self,
    at: DateTime<Utc>
  ) -> String {
    let date = js_sys::Date::new(
      &JsValue::from_f64(
        at.timestamp_millis() as f64
      )
    );
    date
      .to_locale_date_string(
        "default",
        &JsValue::UNDEFINED
      )
      .into()
  }
}

/// The callback runs after the listener
/// returns, since dismissal drops the
/// listener itself.
fn deferred_click(
  element: &HtmlElement,
  callback: Callback
) -> EventListener {
  let callback: Rc<dyn Fn()> =
    Rc::from(callback);
  EventListener::new(element, "click", move |_| {
    let callback = Rc::clone(&callback);
    wasm_bindgen_futures::spawn_local(
      async move { callback() }
    );
  })
}

fn element_by_id(
  document: &Document,
  id: &'static str
) -> Result<Element, SurfaceError> {
  document
    .get_element_by_id(id)
    .ok_or(SurfaceError::MissingElement(id))
}

fn append(
  parent: &web_sys::Node,
  child: &web_sys::Node
) -> Result<(), SurfaceError> {
  parent
    .append_child(child)
    .map(|_| ())
    .map_err(dom_error)
}

pub fn dom_error(error: JsValue) -> SurfaceError {
  SurfaceError::Dom(format!("{error:?}"))
}
