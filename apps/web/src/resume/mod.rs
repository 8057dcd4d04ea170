pub mod controller;
pub mod validation;

pub use controller::ResumePageController;
