pub mod fee;
pub mod seeds;
pub mod transfer;
pub mod validate;
