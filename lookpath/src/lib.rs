//! Resolve a command name to the executable a shell would run.
//!
//! ```no_run
//! # async fn demo() -> Result<(), lookpath::LookupError> {
//! use lookpath::LookupOptions;
//!
//! let node = lookpath::lookup( "node", &LookupOptions::new() ).await?;
//! let every_python = lookpath::lookup_sync(
//!     "python3",
//!     &LookupOptions::new().find_all( true ).include_common_paths( true ),
//! )?;
//! # Ok(()) }
//! ```

mod common_paths;
mod direct;
mod env;
mod error;
mod extension;
mod lookup;
mod options;
mod platform;
mod probe;
mod search;

pub use common_paths::COMMON_PATHS;
pub use direct::direct_path;
pub use env::SearchEnv;
pub use error::LookupError;
pub use extension::applicable_extensions;
pub use extension::DEFAULT_PATHEXT;
pub use lookup::lookup;
pub use lookup::lookup_sync;
pub use lookup::Resolution;
pub use options::LookupOptions;
pub use platform::Platform;
pub use search::build_search_dirs;
