pub mod animation;
pub mod descriptor;
pub mod entity;
pub mod hitbox;
pub mod tilemap;
