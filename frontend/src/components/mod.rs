pub mod accessibility;
pub mod floating;
pub mod header;
pub mod lazy_image;
pub mod reveal;
pub mod splash;
pub mod stats;
