//! Formatting primitives used by every generator.

mod compose;
mod style;
mod text;

pub use compose::{Composer, ParagraphOptions};
pub use style::StyleProfile;
pub use text::{
    address_or_blank, blank_filler, checkbox_glyph, format_address, format_currency, format_date,
    full_name, join_list, letter_marker, or_blank, underline_filler, CHECKED, UNCHECKED,
};
