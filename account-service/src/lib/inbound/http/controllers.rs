pub mod log;
pub mod login;
pub mod signup;

pub use log::LogControllerDecorator;
pub use login::LoginController;
pub use signup::SignUpController;
