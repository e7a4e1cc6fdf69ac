pub mod cp;
pub mod panel;
pub mod system;
