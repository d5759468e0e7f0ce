pub mod events;
pub mod imaging;
pub mod resize;
pub mod storage;
