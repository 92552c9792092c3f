/// Slot reservation handlers
pub mod booking;
/// Company CRUD handlers
pub mod company;
/// Training catalogue handlers
pub mod training;
