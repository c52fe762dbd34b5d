pub mod schools;
pub mod system;
