//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Feed | Ingest ICS calendars | `import`, `normalize` |
//! | Calendar | Seasons, weeks and events | `map`, `month`, `day`, `augment` |
//! | Store | Stored years | `years`, `clear` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Logging
//!
//! Use `-v` (repeatable) for more log output on stderr:
//! ```bash
//! litcal -vv import calendar.ics
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod calendar;
mod feed_cmd;
mod output;
mod store_cmd;

pub use app::{run, Cli, Commands, YearMonth};
pub use output::{Output, OutputFormat};
