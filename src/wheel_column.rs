//! A single scrollable wheel column that snaps to discrete rows.
//!
//! ## Usage
//!
//! Usually rendered by [`crate::wheel_picker::wheel_picker`]; use directly to
//! build custom wheel selectors over arbitrary label lists.
use std::time::{Duration, Instant};

use derive_setters::Setters;
use tessera_ui::{
    CallbackWith, Color, ComputedData, Constraint, CursorEventContent, DimensionValue, Dp,
    MeasurementError, Modifier, PressKeyEventType, Px, PxPosition, State,
    layout::{LayoutInput, LayoutOutput, LayoutSpec, RenderInput},
    receive_frame_nanos, remember, tessera,
};

use tessera_components::{
    modifier::ModifierExt as _,
    pos_misc::is_position_inside_bounds,
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    text::{TextArgs, text},
};

/// Rows visible in a column; row height is the container height divided by
/// this. A design constant of the picker, not configurable.
const ROW_DIVISOR: i32 = 4;
const DEFAULT_SCROLL_SMOOTHING: f32 = 0.12;
const SNAP_IDLE_TIME: Duration = Duration::from_millis(120);
const TAP_SLOP: Dp = Dp(8.0);
const MARK_MAX_HEIGHT: Dp = Dp(65.0);
const MARK_CORNER_RADIUS: Dp = Dp(10.0);
/// Column height used when the parent imposes no bound at all.
const FALLBACK_COLUMN_HEIGHT: Dp = Dp(224.0);
/// Strips per fade overlay; each quarter-height overlay interpolates the fade
/// color's alpha across this many bands.
const FADE_STEPS: usize = 8;

/// Holds scroll position, snap state, and selection for one wheel column.
#[derive(Clone)]
pub struct WheelColumnController {
    item_count: usize,
    row_height: Px,
    /// Current content offset; zero or negative, `-(index * row_height)` when
    /// resting on a row.
    scroll_offset: f32,
    target_offset: f32,
    last_frame_time: Option<Instant>,
    last_scroll_time: Option<Instant>,
    is_dragging: bool,
    last_drag_position: Option<PxPosition>,
    drag_distance: f32,
    /// True while a user gesture (scroll, drag) owns the offset; programmatic
    /// syncs never report selections.
    gesture_active: bool,
    /// Last index delivered to the host, or synced from it.
    reported: Option<usize>,
    pending_report: Option<usize>,
    /// Host-requested index recorded before the first layout pass.
    requested: Option<usize>,
    initialized: bool,
}

impl WheelColumnController {
    /// Creates a controller with no items and no selection.
    pub fn new() -> Self {
        Self {
            item_count: 0,
            row_height: Px::ZERO,
            scroll_offset: 0.0,
            target_offset: 0.0,
            last_frame_time: None,
            last_scroll_time: None,
            is_dragging: false,
            last_drag_position: None,
            drag_distance: 0.0,
            gesture_active: false,
            reported: None,
            pending_report: None,
            requested: None,
            initialized: false,
        }
    }

    /// Index of the row nearest to the current scroll offset.
    pub fn selected_index(&self) -> usize {
        self.nearest_index()
    }

    /// Animates the scroll target to the given row's offset.
    pub fn scroll_to_index(&mut self, index: usize) {
        if index >= self.item_count {
            return;
        }
        self.target_offset = self.offset_for(index);
        self.last_scroll_time = None;
    }

    fn update_layout(&mut self, row_height: Px, item_count: usize) {
        let size_changed = row_height != self.row_height;
        self.row_height = row_height;
        self.item_count = item_count;
        if let Some(reported) = self.reported
            && reported >= item_count
        {
            self.reported = None;
        }

        if item_count == 0 || row_height <= Px::ZERO {
            self.scroll_offset = 0.0;
            self.target_offset = 0.0;
            return;
        }

        if !self.initialized {
            // First layout: animate from the top toward the requested row.
            if let Some(requested) = self.requested.filter(|&i| i < item_count) {
                self.target_offset = self.offset_for(requested);
                self.reported = Some(requested);
            }
            self.initialized = true;
        } else if size_changed {
            let anchor = self.reported.unwrap_or_else(|| self.nearest_index());
            let offset = self.offset_for(anchor);
            self.scroll_offset = offset;
            self.target_offset = offset;
        }

        self.scroll_offset = self.clamp_offset(self.scroll_offset);
        self.target_offset = self.clamp_offset(self.target_offset);
    }

    /// Realigns the column to the host-supplied index.
    ///
    /// A `None` (value not present in the candidate list) or an index equal to
    /// the last reported one leaves the scroll position untouched, so
    /// re-renders never cause redundant jumps.
    fn sync_selected(&mut self, index: Option<usize>) {
        self.requested = index;
        if !self.initialized || self.gesture_active || self.is_dragging {
            return;
        }
        let Some(index) = index.filter(|&i| i < self.item_count) else {
            return;
        };
        if self.reported == Some(index) {
            return;
        }
        self.target_offset = self.offset_for(index);
        self.reported = Some(index);
    }

    fn apply_scroll_delta(&mut self, delta: f32, now: Instant) {
        if self.item_count == 0 || self.row_height <= Px::ZERO {
            return;
        }
        self.scroll_offset = self.clamp_offset(self.scroll_offset + delta);
        self.target_offset = self.scroll_offset;
        self.last_scroll_time = Some(now);
        self.gesture_active = true;
    }

    fn begin_press(&mut self, pos: PxPosition, now: Instant) {
        self.is_dragging = true;
        self.last_drag_position = Some(pos);
        self.drag_distance = 0.0;
        self.last_scroll_time = Some(now);
    }

    fn drag_delta(&mut self, pos: PxPosition) -> Option<f32> {
        let last = self.last_drag_position?;
        self.last_drag_position = Some(pos);
        let delta = (pos.y - last.y).to_f32();
        self.drag_distance += delta.abs() + (pos.x - last.x).to_f32().abs();
        Some(delta)
    }

    fn end_drag(&mut self) {
        self.is_dragging = false;
        self.last_drag_position = None;
    }

    /// Finishes a press: a release within the tap slop selects the tapped row
    /// and returns its index; anything longer was a drag and settles through
    /// the snap logic.
    fn finish_press(&mut self, release_pos: Option<PxPosition>, container_height: Px) -> Option<usize> {
        if !self.is_dragging {
            return None;
        }
        let was_tap = self.drag_distance <= TAP_SLOP.to_pixels_f32();
        self.end_drag();

        if !was_tap {
            return None;
        }
        let pos = release_pos?;
        let index = self.index_at(pos.y.to_f32(), container_height)?;
        self.target_offset = self.offset_for(index);
        self.last_scroll_time = None;
        self.gesture_active = false;
        self.reported = Some(index);
        Some(index)
    }

    /// Maps a position inside the column to the row rendered under it.
    fn index_at(&self, y: f32, container_height: Px) -> Option<usize> {
        if self.item_count == 0 || self.row_height <= Px::ZERO {
            return None;
        }
        let lead = (container_height - self.row_height).to_f32() / 2.0;
        let row = (y - lead - self.scroll_offset) / self.row_height.to_f32();
        if row < 0.0 {
            return None;
        }
        let index = row.floor() as usize;
        (index < self.item_count).then_some(index)
    }

    /// Advances smoothing and idle snapping, and detects gesture settles.
    fn tick(&mut self, now: Instant, smoothing: f32) {
        if self.item_count == 0 || self.row_height <= Px::ZERO {
            return;
        }

        let idle = self
            .last_scroll_time
            .map(|t| now.duration_since(t) > SNAP_IDLE_TIME)
            .unwrap_or(true);
        if idle && !self.is_dragging && self.gesture_active {
            self.target_offset = self.offset_for(self.nearest_index());
        }

        self.update_scroll_offset(now, smoothing.clamp(0.0, 1.0));
        self.scroll_offset = self.clamp_offset(self.scroll_offset);

        // The momentum-scroll-end moment: a user gesture's snap animation has
        // fully settled on a row.
        if self.gesture_active
            && !self.is_dragging
            && idle
            && (self.scroll_offset - self.target_offset).abs() < f32::EPSILON
        {
            let index = self.nearest_index();
            if self.reported != Some(index) {
                self.pending_report = Some(index);
            }
            self.reported = Some(index);
            self.gesture_active = false;
        }
    }

    fn take_pending_selection(&mut self) -> Option<usize> {
        self.pending_report.take()
    }

    fn has_pending_animation(&self) -> bool {
        self.gesture_active
            || self.is_dragging
            || (self.scroll_offset - self.target_offset).abs() > f32::EPSILON
    }

    fn update_scroll_offset(&mut self, now: Instant, smoothing: f32) {
        let delta_time = if let Some(last) = self.last_frame_time {
            now.duration_since(last).as_secs_f32()
        } else {
            1.0 / 60.0
        };
        self.last_frame_time = Some(now);

        let diff = self.target_offset - self.scroll_offset;
        if diff.abs() < 0.5 {
            self.scroll_offset = self.target_offset;
            return;
        }

        let mut movement_factor = (1.0 - smoothing) * delta_time * 60.0;
        if movement_factor > 1.0 {
            movement_factor = 1.0;
        }
        self.scroll_offset += diff * movement_factor;
    }

    fn offset_for(&self, index: usize) -> f32 {
        -(self.row_height.to_f32() * index as f32)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        if self.item_count <= 1 || self.row_height <= Px::ZERO {
            return 0.0;
        }
        let min = -(self.row_height.to_f32() * self.item_count.saturating_sub(1) as f32);
        offset.clamp(min, 0.0)
    }

    fn nearest_index(&self) -> usize {
        if self.item_count == 0 || self.row_height <= Px::ZERO {
            return 0;
        }
        let row = -self.scroll_offset / self.row_height.to_f32();
        let nearest = row.round();
        if !nearest.is_finite() {
            return 0;
        }
        (nearest.max(0.0) as usize).min(self.item_count - 1)
    }

    fn scroll_offset_px(&self) -> Px {
        Px::saturating_from_f32(self.scroll_offset)
    }
}

impl Default for WheelColumnController {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`wheel_column`].
#[derive(Clone, PartialEq, Setters)]
pub struct WheelColumnArgs {
    /// Modifier chain applied to the column subtree.
    pub modifier: Modifier,
    /// Candidate labels in sequence order, one row per label.
    pub items: Vec<String>,
    /// Index of the currently selected item, if it is present in `items`.
    #[setters(strip_option)]
    pub selected_index: Option<usize>,
    /// Text size of the row labels.
    pub font_size: Dp,
    /// Text color of the row labels.
    pub text_color: Color,
    /// Fill color of the centered selection band.
    pub mark_color: Color,
    /// Height of the selection band; defaults to `min(row height, 65dp)`.
    #[setters(strip_option)]
    pub mark_height: Option<Dp>,
    /// Width of the selection band; defaults to 70% of the column width.
    #[setters(strip_option)]
    pub mark_width: Option<Dp>,
    /// Fully opaque edge color of the top and bottom fade overlays.
    pub fade_color: Color,
    /// Smoothing factor for the snap animation.
    pub scroll_smoothing: f32,
    /// Invoked with the settled row index after a scroll settles or a row is
    /// tapped. Never invoked for programmatic re-syncs.
    #[setters(skip)]
    pub on_select: CallbackWith<usize>,
    /// Optional external controller for scroll position and selection.
    #[setters(skip)]
    pub controller: Option<State<WheelColumnController>>,
}

impl Default for WheelColumnArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new().fill_max_size(),
            items: Vec::new(),
            selected_index: None,
            font_size: Dp(22.0),
            text_color: Color::BLACK,
            mark_color: Color::new(0.0, 0.0, 0.0, 0.05),
            mark_height: None,
            mark_width: None,
            fade_color: Color::WHITE,
            scroll_smoothing: DEFAULT_SCROLL_SMOOTHING,
            on_select: CallbackWith::new(|_| {}),
            controller: None,
        }
    }
}

impl WheelColumnArgs {
    /// Sets the selection callback.
    pub fn on_select<F>(mut self, on_select: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_select = CallbackWith::new(on_select);
        self
    }

    /// Sets the selection callback from a shared handle.
    pub fn on_select_shared(mut self, on_select: impl Into<CallbackWith<usize>>) -> Self {
        self.on_select = on_select.into();
        self
    }

    /// Sets an external column controller.
    pub fn controller(mut self, controller: State<WheelColumnController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

#[derive(Clone, PartialEq)]
struct WheelColumnNodeArgs {
    controller: State<WheelColumnController>,
    items: Vec<String>,
    font_size: Dp,
    text_color: Color,
    mark_color: Color,
    mark_height: Option<Dp>,
    mark_width: Option<Dp>,
    fade_color: Color,
    on_select: CallbackWith<usize>,
}

#[derive(Clone)]
struct WheelColumnLayout {
    controller: State<WheelColumnController>,
    item_count: usize,
    mark_height: Option<Dp>,
    mark_width: Option<Dp>,
    scroll_offset: Px,
}

impl PartialEq for WheelColumnLayout {
    fn eq(&self, other: &Self) -> bool {
        self.item_count == other.item_count
            && self.mark_height == other.mark_height
            && self.mark_width == other.mark_width
            && self.scroll_offset == other.scroll_offset
    }
}

impl LayoutSpec for WheelColumnLayout {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        let expected = 1 + self.item_count + 2 * FADE_STEPS;
        if input.children_ids().len() != expected {
            return Err(MeasurementError::MeasureFnFailed(
                "wheel column measured child count mismatch".into(),
            ));
        }

        let parent = input.parent_constraint();
        let label_constraint = Constraint::new(
            DimensionValue::Wrap {
                min: None,
                max: parent.width().get_max(),
            },
            DimensionValue::Wrap {
                min: None,
                max: parent.height().get_max(),
            },
        );

        let label_ids = &input.children_ids()[1..=self.item_count];
        let mut label_sizes = Vec::with_capacity(self.item_count);
        let mut max_label_width = Px::ZERO;
        for &label_id in label_ids {
            let size = input.measure_child(label_id, &label_constraint)?;
            max_label_width = max_label_width.max(size.width);
            label_sizes.push(size);
        }

        let width = resolve_dimension(parent.width(), max_label_width, "wheel column width");
        let height = resolve_dimension(
            parent.height(),
            Px::from(FALLBACK_COLUMN_HEIGHT),
            "wheel column height",
        );
        let row_height = Px(height.0 / ROW_DIVISOR);

        self.controller
            .with_mut(|c| c.update_layout(row_height, self.item_count));
        let scroll_offset = self.controller.with(|c| c.scroll_offset_px());

        // Rows: the selected row rests at the vertical center, under the mark.
        let lead = Px((height.0 - row_height.0) / 2);
        for (row, (&label_id, size)) in label_ids.iter().zip(label_sizes.iter()).enumerate() {
            let row_top = lead + Px(row_height.0 * row as i32) + scroll_offset;
            let x = (width - size.width).max(Px::ZERO) / 2;
            let y = row_top + (row_height - size.height).max(Px::ZERO) / 2;
            output.place_child(label_id, PxPosition::new(x, y));
        }

        // Selection band, centered and purely decorative.
        let mark_width = self
            .mark_width
            .map(Px::from)
            .unwrap_or(Px(width.0 * 7 / 10));
        let mark_height = self
            .mark_height
            .map(Px::from)
            .unwrap_or_else(|| row_height.min(Px::from(MARK_MAX_HEIGHT)));
        let mark_id = input.children_ids()[0];
        let mark_constraint = Constraint::new(
            DimensionValue::Fixed(mark_width),
            DimensionValue::Fixed(mark_height),
        );
        input.measure_child(mark_id, &mark_constraint)?;
        output.place_child(
            mark_id,
            PxPosition::new((width - mark_width) / 2, (height - mark_height) / 2),
        );

        // Fade overlays: each covers a quarter of the column height.
        let quarter = Px(height.0 / ROW_DIVISOR);
        let strip_height = Px((quarter.0 / FADE_STEPS as i32).max(1));
        let strip_constraint = Constraint::new(
            DimensionValue::Fixed(width),
            DimensionValue::Fixed(strip_height),
        );
        let strip_ids = &input.children_ids()[1 + self.item_count..];
        for (strip, &strip_id) in strip_ids.iter().enumerate() {
            input.measure_child(strip_id, &strip_constraint)?;
            let y = if strip < FADE_STEPS {
                Px(strip_height.0 * strip as i32)
            } else {
                height - quarter + Px(strip_height.0 * (strip - FADE_STEPS) as i32)
            };
            output.place_child(strip_id, PxPosition::new(Px::ZERO, y));
        }

        Ok(ComputedData { width, height })
    }

    fn record(&self, input: &RenderInput<'_>) {
        input.metadata_mut().clips_children = true;
    }
}

fn clamp_wrap(min: Option<Px>, max: Option<Px>, measure: Px) -> Px {
    min.unwrap_or(Px(0))
        .max(measure)
        .min(max.unwrap_or(Px::MAX))
}

fn fill_value(min: Option<Px>, max: Option<Px>, measure: Px, context: &str) -> Px {
    let Some(max) = max else {
        panic!("wheel column cannot fill an unbounded {context}");
    };
    let mut value = max.max(measure);
    if let Some(min) = min {
        value = value.max(min);
    }
    value
}

fn resolve_dimension(dim: DimensionValue, measure: Px, context: &str) -> Px {
    match dim {
        DimensionValue::Fixed(v) => v,
        DimensionValue::Wrap { min, max } => clamp_wrap(min, max, measure),
        DimensionValue::Fill { min, max } => fill_value(min, max, measure, context),
    }
}

/// # wheel_column
///
/// Renders one vertically scrollable list of candidate values that snaps to
/// fixed-height rows.
///
/// ## Usage
///
/// Compose several columns to build wheel-style selectors; the date and time
/// pickers in this crate are rows of these.
///
/// ## Parameters
///
/// - `args` — labels, selection, colors, and the selection callback; see
///   [`WheelColumnArgs`].
///
/// ## Examples
///
/// ```
/// use tessera_ui::tessera;
/// use tessera_wheel_picker::wheel_column::{WheelColumnArgs, wheel_column};
///
/// #[tessera]
/// fn demo() {
///     let labels: Vec<String> = (0..60).map(|m| format!("{m:02}")).collect();
///     wheel_column(
///         &WheelColumnArgs::default()
///             .items(labels)
///             .selected_index(30)
///             .on_select(|index| println!("settled on {index}")),
///     );
/// }
/// ```
#[tessera]
pub fn wheel_column(args: &WheelColumnArgs) {
    let args = args.clone();
    let controller = args
        .controller
        .unwrap_or_else(|| remember(WheelColumnController::new));
    let smoothing = args.scroll_smoothing;

    controller.with_mut(|c| {
        c.sync_selected(args.selected_index);
        c.tick(Instant::now(), smoothing);
    });
    if controller.with(|c| c.has_pending_animation()) {
        receive_frame_nanos(move |_frame_nanos| {
            let pending = controller.with_mut(|c| {
                c.tick(Instant::now(), smoothing);
                c.has_pending_animation()
            });
            if pending {
                tessera_ui::FrameNanosControl::Continue
            } else {
                tessera_ui::FrameNanosControl::Stop
            }
        });
    }
    if let Some(index) = controller.with_mut(|c| c.take_pending_selection()) {
        args.on_select.call(index);
    }

    let node_args = WheelColumnNodeArgs {
        controller,
        items: args.items,
        font_size: args.font_size,
        text_color: args.text_color,
        mark_color: args.mark_color,
        mark_height: args.mark_height,
        mark_width: args.mark_width,
        fade_color: args.fade_color,
        on_select: args.on_select,
    };
    let modifier = args.modifier;
    modifier.run(move || wheel_column_node(&node_args));
}

#[tessera]
fn wheel_column_node(args: &WheelColumnNodeArgs) {
    let args = args.clone();
    let controller = args.controller;

    layout(WheelColumnLayout {
        controller,
        item_count: args.items.len(),
        mark_height: args.mark_height,
        mark_width: args.mark_width,
        scroll_offset: controller.with(|c| c.scroll_offset_px()),
    });

    let on_select = args.on_select.clone();
    input_handler(move |input| {
        let is_cursor_in_component = input
            .cursor_position_rel
            .map(|pos| is_position_inside_bounds(input.computed_data, pos))
            .unwrap_or(false);
        let is_dragging = controller.with(|c| c.is_dragging);
        if !is_cursor_in_component && !is_dragging {
            return;
        }

        let now = Instant::now();
        let mut scroll_delta = 0.0;
        for event in input.cursor_events.iter() {
            if let CursorEventContent::Scroll(scroll_event) = &event.content {
                if scroll_event.delta_y.abs() >= 0.01 {
                    scroll_delta += scroll_event.delta_y;
                }
            }
        }
        if scroll_delta.abs() >= 0.01 {
            controller.with_mut(|c| {
                c.apply_scroll_delta(scroll_delta, now);
                c.end_drag();
            });
            input
                .cursor_events
                .retain(|event| !matches!(event.content, CursorEventContent::Scroll(_)));
            return;
        }

        let mut press_pos = None;
        let mut released = false;
        for event in input.cursor_events.iter() {
            match &event.content {
                CursorEventContent::Pressed(PressKeyEventType::Left) => {
                    if is_cursor_in_component {
                        press_pos = input.cursor_position_rel;
                    }
                }
                CursorEventContent::Released(PressKeyEventType::Left) => {
                    released = true;
                }
                _ => {}
            }
        }

        let tapped = controller.with_mut(|c| {
            if let Some(pos) = press_pos {
                c.begin_press(pos, now);
            }
            if c.is_dragging
                && press_pos.is_none()
                && let Some(pos) = input.cursor_position_rel
                && let Some(delta) = c.drag_delta(pos)
            {
                c.apply_scroll_delta(delta, now);
            }
            if released {
                c.finish_press(input.cursor_position_rel, input.computed_data.height)
            } else {
                None
            }
        });

        if let Some(index) = tapped {
            on_select.call(index);
        }
    });

    // Children in paint order: mark band, rows, fade strips on top.
    let mark_color = args.mark_color;
    spacer(&SpacerArgs::new(Modifier::new().background_with_shape(
        mark_color,
        Shape::rounded_rectangle(MARK_CORNER_RADIUS),
    )));

    for label in &args.items {
        let label = label.clone();
        let font_size = args.font_size;
        let text_color = args.text_color;
        text(
            &TextArgs::default()
                .text(label)
                .size(font_size)
                .color(text_color),
        );
    }

    for strip in 0..FADE_STEPS {
        let alpha = 1.0 - strip as f32 / FADE_STEPS as f32;
        spacer(&SpacerArgs::new(
            Modifier::new().background(args.fade_color.with_alpha(alpha)),
        ));
    }
    for strip in 0..FADE_STEPS {
        let alpha = (strip + 1) as f32 / FADE_STEPS as f32;
        spacer(&SpacerArgs::new(
            Modifier::new().background(args.fade_color.with_alpha(alpha)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(row: i32, count: usize) -> WheelColumnController {
        let mut controller = WheelColumnController::new();
        controller.update_layout(Px(row), count);
        controller
    }

    #[test]
    fn requested_index_applies_on_first_layout() {
        let mut controller = WheelColumnController::new();
        controller.sync_selected(Some(9));
        controller.update_layout(Px(40), 31);
        assert_eq!(controller.target_offset, -360.0);
        // Mount scroll animates from the top.
        assert_eq!(controller.scroll_offset, 0.0);
        assert!(controller.has_pending_animation());
    }

    #[test]
    fn gesture_settle_reports_once() {
        let mut controller = laid_out(40, 24);
        let start = Instant::now();
        controller.apply_scroll_delta(-95.0, start);
        // Idle elapses; snap targets the nearest row and settles instantly
        // with zero smoothing.
        let later = start + Duration::from_millis(200);
        controller.tick(later, 0.0);
        controller.tick(later + Duration::from_millis(16), 0.0);
        assert_eq!(controller.take_pending_selection(), Some(2));
        assert_eq!(controller.take_pending_selection(), None);
        assert_eq!(controller.selected_index(), 2);
    }

    #[test]
    fn programmatic_sync_never_reports() {
        let mut controller = laid_out(40, 12);
        controller.sync_selected(Some(5));
        let now = Instant::now();
        controller.tick(now, 0.0);
        controller.tick(now + Duration::from_millis(16), 0.0);
        assert_eq!(controller.take_pending_selection(), None);
        assert_eq!(controller.target_offset, -200.0);
    }

    #[test]
    fn sync_to_reported_index_is_a_no_op() {
        let mut controller = laid_out(40, 12);
        controller.sync_selected(Some(5));
        let target = controller.target_offset;
        controller.sync_selected(Some(5));
        assert_eq!(controller.target_offset, target);
    }

    #[test]
    fn sync_out_of_range_is_ignored() {
        let mut controller = laid_out(40, 12);
        controller.sync_selected(Some(30));
        assert_eq!(controller.target_offset, 0.0);
        controller.sync_selected(None);
        assert_eq!(controller.target_offset, 0.0);
    }

    #[test]
    fn offsets_clamp_to_row_range() {
        let mut controller = laid_out(40, 10);
        let now = Instant::now();
        controller.apply_scroll_delta(-10_000.0, now);
        assert_eq!(controller.scroll_offset, -360.0);
        controller.apply_scroll_delta(20_000.0, now);
        assert_eq!(controller.scroll_offset, 0.0);
    }

    #[test]
    fn tap_within_slop_selects_the_row_under_it() {
        let mut controller = laid_out(40, 31);
        let container = Px(160);
        controller.begin_press(PxPosition::new(Px(10), Px(100)), Instant::now());
        let tapped = controller.finish_press(Some(PxPosition::new(Px(10), Px(100))), container);
        // lead = (160 - 40) / 2 = 60, so y = 100 falls in row 1.
        assert_eq!(tapped, Some(1));
        assert_eq!(controller.target_offset, -40.0);
    }

    #[test]
    fn long_drag_is_not_a_tap() {
        let mut controller = laid_out(40, 31);
        controller.begin_press(PxPosition::new(Px(10), Px(100)), Instant::now());
        let _ = controller.drag_delta(PxPosition::new(Px(10), Px(40)));
        let tapped = controller.finish_press(Some(PxPosition::new(Px(10), Px(40))), Px(160));
        assert_eq!(tapped, None);
    }

    #[test]
    fn nearest_index_rounds_to_closest_row() {
        let mut controller = laid_out(40, 10);
        controller.scroll_offset = -79.0;
        assert_eq!(controller.nearest_index(), 2);
        controller.scroll_offset = -59.0;
        assert_eq!(controller.nearest_index(), 1);
    }

    #[test]
    fn shrinking_item_count_drops_stale_selection() {
        let mut controller = laid_out(40, 31);
        controller.sync_selected(Some(30));
        controller.update_layout(Px(40), 12);
        assert_eq!(controller.reported, None);
        assert!(controller.target_offset >= -(40.0 * 11.0));
    }
}
