pub mod paths;
pub mod text;

pub use paths::{document_url, relative_url_path};
pub use text::{title_case, title_from_file_name, truncate_chars};
