pub mod input;
pub mod render;
pub mod terminal;

pub use input::spawn_stdin_reader;
pub use terminal::Shell;
