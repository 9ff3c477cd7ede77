use crate::gesture::Gesture;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Periodic timer; refreshes the uptime and activity panels.
    Tick,
    Gesture(Gesture),
    Resize { cols: u16, rows: u16 },
}
