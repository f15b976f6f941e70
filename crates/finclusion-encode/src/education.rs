//! Education selections that do not look like a one-hot choice.
//!
//! The five education toggles are independent, so a submission may tick
//! none or several of them. The encoder keeps whatever was ticked; this
//! module only classifies the selection so callers can flag it.

use std::fmt;

use finclusion_model::EducationFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationNote {
    /// No education level was ticked.
    NoneSelected,
    /// More than one level was ticked.
    MultipleSelected(usize),
}

impl fmt::Display for EducationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EducationNote::NoneSelected => f.write_str("no education level selected"),
            EducationNote::MultipleSelected(count) => {
                write!(f, "{count} education levels selected")
            }
        }
    }
}

/// Returns `None` when exactly one education level is ticked.
pub fn education_note(flags: &EducationFlags) -> Option<EducationNote> {
    match flags.selected_count() {
        0 => Some(EducationNote::NoneSelected),
        1 => None,
        count => Some(EducationNote::MultipleSelected(count)),
    }
}
