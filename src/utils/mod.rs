pub mod counter;
pub mod escape;
pub mod files;
#[cfg(feature = "image")]
pub mod img;
pub mod title_case;
