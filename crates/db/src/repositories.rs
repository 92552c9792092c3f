pub mod company;
pub mod slot;
pub mod training;
