//! Wheel-style date and time picker.
//!
//! ## Usage
//!
//! Render [`wheel_picker`] with the current [`PickerDateTime`] and fold the
//! `on_change` values back into host state.
use derive_setters::Setters;
use tessera_ui::{CallbackWith, Color, Dp, Modifier, tessera};

use tessera_components::{
    modifier::ModifierExt as _,
    row::{RowArgs, row},
};

use crate::color::hex_color;
use crate::date_time::{FieldEdit, PickerDateTime, current_year};
use crate::format::{DEFAULT_FORMAT, DateField, PickerMode, resolve_columns};
use crate::locale::MonthLocale;
use crate::wheel_column::{WheelColumnArgs, wheel_column};

/// Years spanned below the end year when the host gives no start year, and by
/// the fallback range when the host range is inverted.
const YEAR_SPAN: i32 = 100;
const DEFAULT_PICKER_HEIGHT: Dp = Dp(224.0);

/// Configuration for [`wheel_picker`].
#[derive(Clone, PartialEq, Setters)]
pub struct WheelPickerArgs {
    /// Modifier chain applied to the picker row.
    pub modifier: Modifier,
    /// Current selection; columns scroll to match it. `None` falls back to
    /// midnight on January 1st of the first selectable year.
    #[setters(strip_option)]
    pub value: Option<PickerDateTime>,
    /// Date columns or time columns.
    pub mode: PickerMode,
    /// Dash-separated date column order, e.g. `"yyyy-mm-dd"`. Ignored in time
    /// mode.
    #[setters(into)]
    pub format: String,
    /// Month-name table for the month column.
    pub locale: MonthLocale,
    /// First selectable year; defaults to one hundred years before the last.
    #[setters(strip_option)]
    pub start_year: Option<i32>,
    /// Last selectable year; defaults to the current year.
    #[setters(strip_option)]
    pub end_year: Option<i32>,
    /// Text size of the column labels.
    pub font_size: Dp,
    /// Text color of the column labels.
    pub text_color: Color,
    /// Fill color of each column's centered selection band.
    pub mark_color: Color,
    /// Height of the selection band; defaults per column.
    #[setters(strip_option)]
    pub mark_height: Option<Dp>,
    /// Width of the selection band; defaults per column.
    #[setters(strip_option)]
    pub mark_width: Option<Dp>,
    /// Hex color of the edge fade overlays, e.g. `"#ffffff"`. Unparsable
    /// values are logged and fall back to white.
    #[setters(into)]
    pub fade_color: String,
    /// Smoothing factor for the columns' snap animation.
    pub scroll_smoothing: f32,
    /// Invoked with the full updated value whenever any column settles on a
    /// new row.
    #[setters(skip)]
    pub on_change: CallbackWith<PickerDateTime>,
}

impl Default for WheelPickerArgs {
    fn default() -> Self {
        let column_defaults = WheelColumnArgs::default();
        Self {
            modifier: Modifier::new()
                .fill_max_width()
                .height(DEFAULT_PICKER_HEIGHT),
            value: None,
            mode: PickerMode::Date,
            format: DEFAULT_FORMAT.to_string(),
            locale: MonthLocale::default(),
            start_year: None,
            end_year: None,
            font_size: column_defaults.font_size,
            text_color: column_defaults.text_color,
            mark_color: column_defaults.mark_color,
            mark_height: None,
            mark_width: None,
            fade_color: "#ffffff".to_string(),
            scroll_smoothing: column_defaults.scroll_smoothing,
            on_change: CallbackWith::new(|_| {}),
        }
    }
}

impl WheelPickerArgs {
    /// Sets the change callback.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(PickerDateTime) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the change callback from a shared handle.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<PickerDateTime>>) -> Self {
        self.on_change = on_change.into();
        self
    }
}

/// Selectable years in ascending order.
///
/// An inverted host range is logged and replaced by the hundred years up to
/// the end year.
fn year_values(start_year: Option<i32>, end_year: Option<i32>) -> Vec<i32> {
    let end = end_year.unwrap_or_else(current_year);
    let mut start = start_year.unwrap_or(end - YEAR_SPAN);
    if start > end {
        tracing::warn!(start, end, "inverted year range, using the default span");
        start = end - YEAR_SPAN;
    }
    (start..=end).collect()
}

/// The value the picker renders: the host's, or midnight on January 1st of
/// the first selectable year.
///
/// Anchoring the fallback to the year range keeps it inside the year column's
/// candidates, so every column opens on a selectable row.
fn effective_value(value: Option<PickerDateTime>, years: &[i32]) -> PickerDateTime {
    value.unwrap_or_else(|| PickerDateTime::start_of_year(years[0]))
}

fn field_items(field: DateField, locale: &MonthLocale, years: &[i32]) -> Vec<String> {
    match field {
        DateField::Day => (1..=31u8).map(|d| d.to_string()).collect(),
        DateField::Month => locale.names().iter().cloned().collect(),
        DateField::Year => years.iter().map(|y| y.to_string()).collect(),
        DateField::Hour => (0..24u8).map(|h| h.to_string()).collect(),
        DateField::Minute => (0..60u8).map(|m| m.to_string()).collect(),
    }
}

/// Row index of the current value in a field's column, or `None` when the
/// value is outside the column's candidates.
fn field_selected_index(field: DateField, value: PickerDateTime, years: &[i32]) -> Option<usize> {
    match field {
        DateField::Day => (1..=31).contains(&value.day).then(|| usize::from(value.day) - 1),
        DateField::Month => (1..=12)
            .contains(&value.month)
            .then(|| usize::from(value.month) - 1),
        DateField::Year => years.iter().position(|&y| y == value.year),
        DateField::Hour => (value.hour < 24).then(|| usize::from(value.hour)),
        DateField::Minute => (value.minute < 60).then(|| usize::from(value.minute)),
    }
}

/// Maps a settled row index back to the field edit it stands for.
fn field_edit(field: DateField, index: usize, first_year: i32) -> FieldEdit {
    match field {
        DateField::Day => FieldEdit::Day(index as u8 + 1),
        DateField::Month => FieldEdit::Month(index as u8 + 1),
        DateField::Year => FieldEdit::Year(first_year + index as i32),
        DateField::Hour => FieldEdit::Hour(index as u8),
        DateField::Minute => FieldEdit::Minute(index as u8),
    }
}

/// # wheel_picker
///
/// A scrollable wheel-style date or time picker: one snapping column per
/// field, a centered selection band, and edge fades.
///
/// The picker is controlled: it renders the `value` it is given and reports
/// every settled edit through `on_change` without mutating anything itself.
///
/// ## Usage
///
/// Keep the selection in host state, pass it as `value`, and write the
/// `on_change` value back.
///
/// ## Parameters
///
/// - `args` — selection, mode, format, locale, colors, and the change
///   callback; see [`WheelPickerArgs`].
///
/// ## Examples
///
/// ```
/// use tessera_ui::{remember, tessera};
/// use tessera_wheel_picker::{PickerDateTime, WheelPickerArgs, wheel_picker};
///
/// #[tessera]
/// fn birthday_field() {
///     let selection = remember(|| PickerDateTime::new(1990, 6, 15, 0, 0));
///     wheel_picker(
///         &WheelPickerArgs::default()
///             .value(selection.get())
///             .format("yyyy-mm-dd")
///             .on_change(move |value| selection.set(value)),
///     );
/// }
/// ```
#[tessera]
pub fn wheel_picker(args: &WheelPickerArgs) {
    let args = args.clone();
    let fields = resolve_columns(args.mode, &args.format);
    let years = year_values(args.start_year, args.end_year);
    let first_year = years[0];
    let value = effective_value(args.value, &years);
    let fade_color = hex_color(&args.fade_color, 1.0).unwrap_or_else(|error| {
        tracing::warn!(%error, "bad picker fade color, falling back to white");
        Color::WHITE
    });

    row(
        RowArgs::default().modifier(args.modifier.clone()),
        move |scope| {
            for field in fields {
                let items = field_items(field, &args.locale, &years);
                let selected = field_selected_index(field, value, &years);
                let on_change = args.on_change.clone();
                let on_select = CallbackWith::new(move |index| {
                    on_change.call(value.with_edit(field_edit(field, index, first_year)));
                });

                let mut column_args = WheelColumnArgs::default()
                    .items(items)
                    .font_size(args.font_size)
                    .text_color(args.text_color)
                    .mark_color(args.mark_color)
                    .fade_color(fade_color)
                    .scroll_smoothing(args.scroll_smoothing)
                    .on_select_shared(on_select);
                if let Some(index) = selected {
                    column_args = column_args.selected_index(index);
                }
                if let Some(height) = args.mark_height {
                    column_args = column_args.mark_height(height);
                }
                if let Some(width) = args.mark_width {
                    column_args = column_args.mark_width(width);
                }
                scope.child_weighted(move || wheel_column(&column_args), 1.0);
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_defaults_to_a_century_ending_now() {
        let years = year_values(None, None);
        let current = current_year();
        assert_eq!(years.len(), YEAR_SPAN as usize + 1);
        assert_eq!(years.first(), Some(&(current - YEAR_SPAN)));
        assert_eq!(years.last(), Some(&current));
    }

    #[test]
    fn explicit_year_range_is_inclusive_on_both_ends() {
        assert_eq!(year_values(Some(1990), Some(1993)), vec![1990, 1991, 1992, 1993]);
        assert_eq!(year_values(Some(2000), Some(2000)), vec![2000]);
    }

    #[test]
    fn inverted_year_range_falls_back_to_the_default_span() {
        let years = year_values(Some(2030), Some(2020));
        assert_eq!(years.first(), Some(&(2020 - YEAR_SPAN)));
        assert_eq!(years.last(), Some(&2020));
    }

    #[test]
    fn missing_value_falls_back_to_the_first_selectable_year() {
        let years = year_values(Some(1950), Some(1960));
        let value = effective_value(None, &years);
        assert_eq!(value, PickerDateTime::start_of_year(1950));
        // The fallback must always be a selectable row in the year column.
        assert_eq!(field_selected_index(DateField::Year, value, &years), Some(0));

        let default_years = year_values(None, None);
        let value = effective_value(None, &default_years);
        assert_eq!(value.year, current_year() - YEAR_SPAN);
    }

    #[test]
    fn host_value_overrides_the_fallback() {
        let years = year_values(Some(1950), Some(1960));
        let value = PickerDateTime::new(1955, 3, 4, 5, 6);
        assert_eq!(effective_value(Some(value), &years), value);
    }

    #[test]
    fn day_column_counts_one_through_thirty_one() {
        let items = field_items(DateField::Day, &MonthLocale::default(), &[]);
        assert_eq!(items.len(), 31);
        assert_eq!(items.first().map(String::as_str), Some("1"));
        assert_eq!(items.last().map(String::as_str), Some("31"));
    }

    #[test]
    fn month_column_renders_locale_names() {
        let items = field_items(DateField::Month, &MonthLocale::english(), &[]);
        assert_eq!(items.first().map(String::as_str), Some("January"));
        assert_eq!(items.last().map(String::as_str), Some("December"));
    }

    #[test]
    fn time_columns_cover_the_full_day() {
        let locale = MonthLocale::default();
        assert_eq!(field_items(DateField::Hour, &locale, &[]).len(), 24);
        assert_eq!(field_items(DateField::Minute, &locale, &[]).len(), 60);
    }

    #[test]
    fn selected_index_matches_each_field() {
        let years = vec![2020, 2021, 2022];
        let value = PickerDateTime::new(2021, 3, 14, 9, 45);
        assert_eq!(field_selected_index(DateField::Day, value, &years), Some(13));
        assert_eq!(field_selected_index(DateField::Month, value, &years), Some(2));
        assert_eq!(field_selected_index(DateField::Year, value, &years), Some(1));
        assert_eq!(field_selected_index(DateField::Hour, value, &years), Some(9));
        assert_eq!(field_selected_index(DateField::Minute, value, &years), Some(45));
    }

    #[test]
    fn value_outside_the_candidates_has_no_selected_index() {
        let years = vec![2020, 2021];
        let value = PickerDateTime::new(1999, 0, 0, 24, 60);
        assert_eq!(field_selected_index(DateField::Year, value, &years), None);
        assert_eq!(field_selected_index(DateField::Month, value, &years), None);
        assert_eq!(field_selected_index(DateField::Day, value, &years), None);
        assert_eq!(field_selected_index(DateField::Hour, value, &years), None);
        assert_eq!(field_selected_index(DateField::Minute, value, &years), None);
    }

    #[test]
    fn field_edits_round_trip_through_selected_index() {
        let years: Vec<i32> = (1990..=1995).collect();
        let value = PickerDateTime::new(1992, 6, 20, 12, 30);
        for field in [
            DateField::Day,
            DateField::Month,
            DateField::Year,
            DateField::Hour,
            DateField::Minute,
        ] {
            let index = field_selected_index(field, value, &years).expect("value in range");
            let edited = value.with_edit(field_edit(field, index, years[0]));
            assert_eq!(edited, value);
        }
    }

    #[test]
    fn settled_row_maps_to_the_edited_value() {
        let value = PickerDateTime::new(2020, 5, 10, 0, 0);
        let edited = value.with_edit(field_edit(DateField::Month, 11, 1920));
        assert_eq!(edited, PickerDateTime::new(2020, 12, 10, 0, 0));
        let edited = value.with_edit(field_edit(DateField::Year, 4, 1920));
        assert_eq!(edited, PickerDateTime::new(1924, 5, 10, 0, 0));
    }
}
