mod keymap;

pub use keymap::{KeymapPreset, map_key_to_command};
