pub mod company;
pub mod user;
pub mod vacancy;
