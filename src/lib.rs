//! Homebank Converter Library
//!
//! Converts bank CSV exports into the CSV format imported by the Homebank
//! personal finance application.
//!
//! # Supported Formats
//!
//! - **Baloise**: Baloise Bank SoBa account export (`;`-separated)
//! - **Cornercard**: Cornercard credit card export (`,`-separated)
//!
//! Output is always the Homebank import format: `;`-separated, CRLF line
//! endings, no header and the columns
//! `date;paymode;info;payee;memo;amount;category;tags`.
//!
//! # Examples
//!
//! ## Detecting and converting a file
//!
//! ```no_run
//! use std::path::Path;
//! use homebank_converter::{conversion, dialect};
//!
//! let input = Path::new("export.csv");
//! if let Some(found) = dialect::detect(input) {
//!     let output = conversion::derive_output_path(input);
//!     conversion::convert(found, input, &output)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod dialect;
pub mod csv_codec;
pub mod baloise_format;
pub mod cornercard_format;
pub mod conversion;

// Re-export commonly used types
pub use conversion::{
    convert, convert_baloise, convert_cornercard, derive_output_path, normalize_date, resolve_dialect,
};
pub use dialect::{detect, Dialect};
pub use error::{Error, Result};
pub use types::{PayMode, SourceRow, TargetRow};
