//! Text primitives and shared infrastructure.
//!
//! ## Modules
//!
//! - [`normalize`] - Trim and lower-case; blank input is "absent"
//! - [`tokenizer`] - Delimiter-based token extraction
//! - [`prefix`] - Separator-bounded progressive prefixes
//! - [`app_data`] - Configuration in the per-user app data directory
//! - [`logging`] - `tracing` subscriber setup
//! - [`progress`] - Progress bar for bulk reindexing
//!
//! ## Key Functions
//!
//! ```
//! use fleetdex::utils::{progressive_prefixes, tokenize};
//!
//! assert_eq!(tokenize("email+test@gmail.com"), vec!["email", "test", "gmail", "com"]);
//! assert_eq!(progressive_prefixes("Model-X"), vec!["model", "model-x"]);
//! ```

pub mod app_data;
pub mod logging;
pub mod normalize;
pub mod prefix;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use normalize::*;
pub use prefix::*;
pub use progress::ReindexProgress;
pub use tokenizer::*;
