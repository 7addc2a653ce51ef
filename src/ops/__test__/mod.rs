pub mod circle_test;
pub mod complex_test;
