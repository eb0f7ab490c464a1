pub mod level;
pub mod scene;
pub mod time;
