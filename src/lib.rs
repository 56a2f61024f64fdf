pub mod apple;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod snake;
pub mod terminal_runtime;
