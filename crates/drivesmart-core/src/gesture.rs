#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
  Left,
  Right
}

/// Turns touchstart/touchend pairs into
/// horizontal swipes.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
  threshold: f64,
  start:     Option<(f64, f64)>
}

impl SwipeTracker {
  pub fn new(threshold: f64) -> Self {
    Self {
      threshold,
      start: None
    }
  }

  pub fn start(&mut self, x: f64, y: f64) {
    self.start = Some((x, y));
  }

  /// A swipe needs a horizontal travel
  /// larger than both the vertical travel
  /// and the threshold.
  pub fn end(
    &mut self,
    x: f64,
    y: f64
  ) -> Option<Swipe> {
    let (start_x, start_y) =
      self.start.take()?;
    let dx = start_x - x;
    let dy = start_y - y;

    if dx.abs() > dy.abs()
      && dx.abs() > self.threshold
    {
      Some(if dx > 0.0 {
        Swipe::Left
      } else {
        Swipe::Right
      })
    } else {
      None
    }
  }
}
