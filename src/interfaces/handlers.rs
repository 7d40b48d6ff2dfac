pub mod home;
pub mod profile;
pub mod system;
