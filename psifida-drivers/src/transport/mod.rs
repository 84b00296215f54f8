//! Display transport implementations

pub mod ssd1306_i2c;

pub use ssd1306_i2c::Ssd1306I2c;
