pub mod app;
pub mod data;
pub mod form;
pub mod model;
pub mod ui;

pub use app::QuizSetupApp;
pub use form::QuizForm;
pub use model::QuizRequest;
