//! CLI command handlers.

mod completions;
pub(crate) mod lookup;
mod man;
mod open;
mod url;

pub use completions::run_completions;
pub use man::run_man;
pub use open::run_open;
pub use url::run_url;
