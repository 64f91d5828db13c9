pub mod departments;
pub mod enumerations;
pub mod prokers;
pub mod types;
