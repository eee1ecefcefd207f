//! Transport-independent request controllers.

mod signup_controller;

pub use signup_controller::SignUpController;
