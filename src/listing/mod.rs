//! Decoding of raw directory listings.
//!
//! A listing is plain text in the classic `ls -l` column layout, one row per
//! line, with lines terminated by CRLF:
//!
//! ```text
//! drwxr-xr-x 2 alice staff 4096 Jan 1 12:00 docs
//! ```
//!
//! Fields are taken positionally from the space-separated tokens. No numeric
//! or date parsing happens here; every field stays raw text.

mod column;
mod entry;
mod parser;

pub use column::Column;
pub use entry::Entry;
pub use parser::{LINE_TERMINATOR, parse};
