pub mod path;
pub mod playback;
