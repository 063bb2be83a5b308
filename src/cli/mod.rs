//! # Command-Line Interface
//!
//! The `sched` binary: the application layer around the scheduling service.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `schedule [INPUT]` | Compute a recommended order (`--now`, `--explain`) |
//! | `validate [INPUT]` | Check titles and report dependencies outside the batch |
//! | `example <KIND>` | Print a sample request (`simple`, `complex`, `parallel`) |
//! | `config` | Show the effective configuration |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON; `schedule` prints the response as
//!   `{"recommendedOrder": [...], "message": "..."}`
//!
//! ## Exit Status
//!
//! `schedule` exits with 2 when no order could be produced (cycle or
//! rejected batch).
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod schedule;
mod example;
mod config_cmd;

pub use app::{run, Cli, Commands};
pub use example::ExampleKind;
pub use output::{Output, OutputFormat};
