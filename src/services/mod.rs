pub mod generation_service;
pub mod markdown_renderer;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_renderer;
pub mod render_service;
pub mod session;

pub use generation_service::GenerationService;
pub use model_service::{GeminiClient, ModelBackend};
pub use session::ContentSession;
