//! Output formats
//!
//! `text` prints the line format back, `treeviz` draws the forest for terminals, and the
//! registry maps format names (including the serde based json and yaml) to formatters.

pub mod registry;
pub mod text;
pub mod treeviz;

pub use registry::{
    FormatError, FormatRegistry, Formatter, JsonFormatter, TextFormatter, TreevizFormatter,
    YamlFormatter,
};
pub use text::{serialize, serialize_with, write_forest, write_text, TextOptions};
pub use treeviz::to_treeviz_str;
