pub mod dom;
pub mod scheduler;
