//! Event-driven front of the engine: drag state machine, save/load
//! orchestration, and the query surface the grid renders from.

use log::warn;

use crate::persistence::{BlobStore, SaveError, SchedulePersistence};
use crate::week::{WeekSchedule, Weekday};

/// Pointer displacement (per axis, in pixels) past which a press becomes a
/// drag rather than click jitter.
const DRAG_THRESHOLD_PX: f64 = 10.0;

/// Transient pointer-interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        day: Weekday,
        hour: u8,
        x: f64,
        y: f64,
    },
}

/// Owns the current and last-saved [`WeekSchedule`] and applies discrete
/// input events to them.
///
/// All mutation is synchronous and happens in event arrival order; the
/// controller is the only writer of the schedule it owns.
///
/// # Example
///
/// ```
/// use weekgrid::{GridController, MemoryStore, Weekday};
///
/// let mut grid = GridController::new(MemoryStore::new());
/// assert!(!grid.is_dirty());
///
/// // Click hour 9 on Monday, sweep into hour 10, release.
/// grid.cell_pointer_down(Weekday::Monday, 9, 100.0, 40.0);
/// grid.pointer_move(130.0, 40.0, Some((Weekday::Monday, 10)));
/// grid.pointer_up();
///
/// assert!(grid.is_hour_selected(Weekday::Monday, 9));
/// assert!(grid.is_hour_selected(Weekday::Monday, 10));
/// assert!(grid.is_dirty());
///
/// grid.save().unwrap();
/// assert!(!grid.is_dirty());
/// ```
#[derive(Debug)]
pub struct GridController<S: BlobStore> {
    persistence: SchedulePersistence<S>,
    schedule: WeekSchedule,
    saved: WeekSchedule,
    drag: DragState,
}

impl<S: BlobStore> GridController<S> {
    /// Loads the saved schedule from `store` and adopts it as the baseline.
    ///
    /// A missing record starts an empty week; an unreadable or malformed
    /// record is discarded (with a warning) and also starts an empty week,
    /// never a partially-valid one.
    pub fn new(store: S) -> Self {
        let persistence = SchedulePersistence::new(store);
        let schedule = match persistence.load() {
            Ok(Some(schedule)) => schedule,
            Ok(None) => WeekSchedule::new(),
            Err(error) => {
                warn!("discarding unreadable schedule record: {error}");
                WeekSchedule::new()
            }
        };
        Self {
            saved: schedule.clone(),
            schedule,
            persistence,
            drag: DragState::Idle,
        }
    }

    // ── Input events ──────────────────────────────────────────────────

    /// Pointer press on an hour cell: enters the drag state and toggles the
    /// origin cell with full (non-additive) semantics, so a press can
    /// deselect.
    pub fn cell_pointer_down(&mut self, day: Weekday, hour: u8, x: f64, y: f64) {
        self.drag = DragState::Dragging { day, hour, x, y };
        self.schedule.toggle_hour_block(day, hour, false);
    }

    /// Pointer movement; `cell` is the hour cell under the pointer, if any.
    ///
    /// Only acts while dragging, once displacement from the origin exceeds
    /// the jitter threshold on either axis, and only on cells other than
    /// the drag origin. Drag-through toggles additively, so sweeping across
    /// the grid never deselects.
    pub fn pointer_move(&mut self, x: f64, y: f64, cell: Option<(Weekday, u8)>) {
        let DragState::Dragging {
            day: origin_day,
            hour: origin_hour,
            x: origin_x,
            y: origin_y,
        } = self.drag
        else {
            return;
        };

        if (x - origin_x).abs() <= DRAG_THRESHOLD_PX && (y - origin_y).abs() <= DRAG_THRESHOLD_PX {
            return;
        }
        let Some((day, hour)) = cell else {
            return;
        };
        if (day, hour) == (origin_day, origin_hour) {
            return;
        }

        self.schedule.toggle_hour_block(day, hour, true);
    }

    /// Pointer release anywhere: leaves the drag state. No other action.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Click on a day label: binary full-day toggle for that day.
    pub fn day_label_click(&mut self, day: Weekday) {
        self.schedule.toggle_full_day(day);
    }

    /// Click on the clear button: empties the whole week.
    pub fn clear_button_click(&mut self) {
        self.schedule.clear_all();
    }

    /// Persists the current schedule and adopts it as the saved baseline.
    ///
    /// On failure the schedule and the dirty flag are left untouched; the
    /// save counts as not having happened. A save with no unsaved changes
    /// is a no-op that never touches the store.
    pub fn save(&mut self) -> Result<(), SaveError> {
        if !self.is_dirty() {
            return Ok(());
        }
        self.persistence.save(&self.schedule)?;
        self.saved = self.schedule.clone();
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────

    /// See [`crate::day::DaySchedule::is_hour_selected`].
    pub fn is_hour_selected(&self, day: Weekday, hour: u8) -> bool {
        self.schedule.is_hour_selected(day, hour)
    }

    /// See [`crate::day::DaySchedule::is_full_day_selected`].
    pub fn is_full_day_selected(&self, day: Weekday) -> bool {
        self.schedule.is_full_day_selected(day)
    }

    /// Returns true if the current schedule differs from the saved baseline.
    pub fn is_dirty(&self) -> bool {
        self.schedule != self.saved
    }

    /// Borrows the current schedule.
    pub fn schedule(&self) -> &WeekSchedule {
        &self.schedule
    }
}
