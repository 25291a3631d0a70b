//! Building blocks of the export parser.
//!
//! Parsing runs in three stages, each usable on its own:
//!
//! 1. [`LineClassifier`] decides whether a line opens a message, trying the
//!    [`DatePattern`]s in order.
//! 2. [`parse_header`] splits the text after the timestamp into sender and
//!    body, detecting system events.
//! 3. [`RecordBuilder`] joins continuation lines and emits
//!    [`MessageRecord`](crate::MessageRecord)s.
//!
//! [`ExportParser`](crate::parser::ExportParser) wires the stages together.

pub mod builder;
pub mod classifier;
pub mod header;
pub mod pattern;

pub use builder::RecordBuilder;
pub use classifier::{LineClassifier, LineKind, MessageStart};
pub use header::{Header, is_system_body, is_system_sender, parse_header};
pub use pattern::{DateOrder, DatePattern};
