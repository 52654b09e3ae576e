pub mod format;
pub mod platform;
pub mod timing;
pub mod video;
