pub mod app;
pub mod components;
pub mod context;
pub mod routes;
pub mod sounds;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{build_app_context, AppContext, UiApp};
pub use sounds::EvalSounds;
