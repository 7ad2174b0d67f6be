pub mod classes;
pub mod index;
pub mod pairs;
pub mod split;
