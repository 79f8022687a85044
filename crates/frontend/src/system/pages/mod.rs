pub mod home;
pub mod placeholder;
pub mod sign_in;
pub mod sign_up;
