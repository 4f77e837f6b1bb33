//! Analyte search: the lookup client and the dialog's selection model.

mod lookup;
mod picker;

pub use lookup::{AnalyteKind, AnalyteLookup, AnalyteMatch, LookupError};
pub use picker::{AnalytePicker, MAX_ANALYTE_SELECTIONS, PickerError};
