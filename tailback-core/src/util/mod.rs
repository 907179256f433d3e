mod speed_unit;

pub use speed_unit::SpeedUnit;
