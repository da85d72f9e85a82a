// Configuration & file validation.
// Everything here runs before the network call; any failure aborts the run.

pub mod folder;
pub mod loader;
pub mod secrets;

pub use folder::resolve_data_folder;
pub use loader::{load_yaml, read_text_file};
pub use secrets::extract_api_key;
