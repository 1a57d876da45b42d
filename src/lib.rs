//! Wheel-style scrolling date and time pickers for the Tessera UI framework.
//!
//! # Usage
//!
//! Keep the selection in host state and render [`wheel_picker`] with it; every
//! settled scroll or tap reports a new [`PickerDateTime`] through `on_change`.
//!
//! ```
//! # use tessera_ui::{remember, tessera};
//! # #[tessera]
//! # fn component() {
//! use tessera_wheel_picker::{
//!     MonthLocale, PickerDateTime, WheelPickerArgs, wheel_picker,
//! };
//!
//! let selection = remember(|| PickerDateTime::new(1995, 7, 14, 0, 0));
//! wheel_picker(
//!     &WheelPickerArgs::default()
//!         .value(selection.get())
//!         .format("yyyy-mm-dd")
//!         .locale(MonthLocale::english())
//!         .on_change(move |value| selection.set(value)),
//! );
//! # }
//! ```
//!
//! Time selection uses the same component with [`PickerMode::Time`], which
//! renders hour and minute columns instead of the date columns.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod date_time;
pub mod format;
pub mod locale;
pub mod wheel_column;
pub mod wheel_picker;

pub use color::{HexColorError, hex_color};
pub use date_time::{FieldEdit, PickerDateTime, current_year};
pub use format::{DEFAULT_FORMAT, DateField, FormatError, PickerMode};
pub use locale::MonthLocale;
pub use wheel_column::{WheelColumnArgs, WheelColumnController, wheel_column};
pub use wheel_picker::{WheelPickerArgs, wheel_picker};
