//! Session runtime: device boundary traits, the paced session loop, HUD
//! text helpers, and scripted stand-ins for headless runs.

pub mod game_loop;
pub mod hud;
pub mod io;
pub mod stub;
