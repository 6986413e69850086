mod day_01;
mod day_02;

pub use day_01::Trebuchet;
pub use day_02::CubeConundrum;
