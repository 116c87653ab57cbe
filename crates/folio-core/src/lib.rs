pub mod camera;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod follower;
pub mod form;
pub mod hover;
pub mod loader;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod selectors;
pub mod transform;
pub mod widgets;

pub use camera::*;
pub use config::*;
pub use cursor::*;
pub use follower::*;
pub use form::*;
pub use loader::*;
pub use nav::*;
pub use particles::*;
pub use reveal::*;
pub use scene::*;
pub use transform::*;
