//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для перемешивания колоды.

pub mod rng;

pub use rng::*;
