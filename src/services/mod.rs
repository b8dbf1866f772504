pub mod directions;
pub mod openroute;
pub mod route_generator;
