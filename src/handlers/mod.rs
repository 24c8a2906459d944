pub mod content_handler;
pub mod generate_handler;
pub mod health_handler;
pub mod options_handler;

pub use content_handler::{copy_content, copy_label, download_content, get_content, toggle_answer};
pub use generate_handler::generate_content;
pub use health_handler::{health, model_health};
pub use options_handler::get_options;
