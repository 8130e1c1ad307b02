/*
[INPUT]:  Order placement parameters
[OUTPUT]: Typed order sides, kinds and requests
[POS]:    Data layer - request parameter types
[UPDATE]: When order parameters change
*/

pub mod enums;
pub mod requests;

pub use enums::*;
pub use requests::*;
