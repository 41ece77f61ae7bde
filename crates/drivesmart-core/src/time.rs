use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime,
  Utc
};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

pub const INVALID_DATE_LABEL: &str =
  "Invalid Date";

const NAIVE_FORMATS: [&str; 3] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M"
];

/// The user's time zone and date format.
pub trait Locale {
  /// Reads a zone-less wall-clock time
  /// in the local zone.
  fn local_to_utc(
    &self,
    naive: NaiveDateTime
  ) -> Option<DateTime<Utc>>;

  fn date_label(
    &self,
    at: DateTime<Utc>
  ) -> String;
}

/// Coarse age of a timestamp relative to
/// "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
  JustNow,
  Minutes(i64),
  Hours(i64),
  Date(DateTime<Utc>),
  Invalid
}

impl RelativeTime {
  pub fn classify(
    at: DateTime<Utc>,
    now: DateTime<Utc>
  ) -> Self {
    let diff =
      (now - at).num_milliseconds();

    if diff < MINUTE_MS {
      Self::JustNow
    } else if diff < HOUR_MS {
      Self::Minutes(diff / MINUTE_MS)
    } else if diff < DAY_MS {
      Self::Hours(diff / HOUR_MS)
    } else {
      Self::Date(at)
    }
  }

  pub fn label<L>(
    self,
    locale: &L
  ) -> String
  where
    L: Locale + ?Sized
  {
    match self {
      | Self::JustNow => {
        "Just now".to_string()
      }
      | Self::Minutes(n) => {
        format!("{n}m ago")
      }
      | Self::Hours(n) => {
        format!("{n}h ago")
      }
      | Self::Date(at) => {
        locale.date_label(at)
      }
      | Self::Invalid => {
        INVALID_DATE_LABEL.to_string()
      }
    }
  }
}

/// Accepts RFC 3339 and the zone-less
/// ISO forms the backend emits. Zone-less
/// date-times are local wall-clock times;
/// a bare date is midnight UTC.
pub fn parse_timestamp<L>(
  input: &str,
  locale: &L
) -> Option<DateTime<Utc>>
where
  L: Locale + ?Sized
{
  let raw = input.trim();
  if raw.is_empty() {
    return None;
  }

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(dt.with_timezone(&Utc));
  }

  for format in NAIVE_FORMATS {
    if let Ok(naive) =
      NaiveDateTime::parse_from_str(
        raw, format
      )
    {
      return locale.local_to_utc(naive);
    }
  }

  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .and_then(|date| {
      date.and_hms_opt(0, 0, 0)
    })
    .map(|naive| naive.and_utc())
}

pub fn format_time<L>(
  input: &str,
  now: DateTime<Utc>,
  locale: &L
) -> String
where
  L: Locale + ?Sized
{
  parse_timestamp(input, locale)
    .map(|at| {
      RelativeTime::classify(at, now)
    })
    .unwrap_or(RelativeTime::Invalid)
    .label(locale)
}
