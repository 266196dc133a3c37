pub mod code_point;
pub mod decode;
pub mod literal;

pub use code_point::{any_code_point, code_point, code_point_range};
pub use decode::{DecodeError, decode};
pub use literal::literal;
