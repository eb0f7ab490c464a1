pub mod animation;
pub mod collision;
pub mod control;
pub mod kinematics;
pub mod render;
