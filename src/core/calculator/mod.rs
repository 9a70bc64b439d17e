pub mod breaks;
pub mod duration;
pub mod limits;
pub mod summary;
pub mod timeline;
pub mod work;
