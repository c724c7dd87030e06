pub mod binary_image;

pub use binary_image::BinaryImage;
