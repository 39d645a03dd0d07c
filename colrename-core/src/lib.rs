#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod backup;
pub mod blocks;
pub mod config;
pub mod error;
pub mod log;
pub mod mapping;
pub mod operations;
pub mod output;
pub mod renamer;
pub mod replace;
pub mod scope;

pub use backup::{backup_path, write_backup};
pub use blocks::{apply_mappings_in_blocks, find_blocks, Block, DEFAULT_DELIMITER};
pub use config::Config;
pub use error::RenameError;
pub use log::RunLog;
pub use mapping::{to_snake_case, ColumnMapping, MappingError, MappingTable};
pub use operations::{run_operation, RunError, RunOptions, RunResult};
pub use output::{format_file_report, format_skip_warning, OutputFormat, OutputFormatter};
pub use renamer::{rename_file, FileOutcome, FileReport, RenameOptions, SkipReason};
pub use replace::{apply_mappings, MappingCount, Replacement};
pub use scope::{ModeKind, ScopeMode};
