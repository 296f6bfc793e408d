pub mod animation;
pub mod config;
pub mod controllers;
pub mod draw;
pub mod render;
pub mod utilities;
pub mod views;
