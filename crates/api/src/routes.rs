pub mod booking;
pub mod company;
pub mod health;
pub mod training;
