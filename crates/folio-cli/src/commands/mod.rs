pub mod gains;
pub mod home;
pub mod profile;
pub mod project;
pub mod utils;
