//! Terminal rendering for every screen.

pub mod game_over_scene;
pub mod menu_scene;
pub mod play_scene;
pub mod sprites;

pub use game_over_scene::render_game_over_scene;
pub use menu_scene::render_menu_scene;
pub use play_scene::render_play_scene;
pub use sprites::SpriteSet;
