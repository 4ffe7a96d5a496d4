pub mod common;
pub mod link_speed;
