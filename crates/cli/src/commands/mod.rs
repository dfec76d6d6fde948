pub mod checkup;
pub mod medication;
pub mod vaccination;
