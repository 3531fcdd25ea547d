pub mod cpu;
pub mod painter;
pub mod player;
pub mod shapes;
