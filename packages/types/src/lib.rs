pub mod claim;
pub mod dex;
pub mod pair;
pub mod token;
