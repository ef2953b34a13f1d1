//! Output formats for parsed corpora
//!
//! Every format implements [`Formatter`] and is looked up by name through
//! [`FormatRegistry`].

pub mod registry;
pub mod serde_formats;
pub mod ssf;
pub mod summary;
pub mod text;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use ssf::{to_ssf_string, SsfFormatter};
pub use summary::{Summary, SummaryFormatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
