#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use imxform_image as image;

#[doc(inline)]
pub use imxform_imgproc as imgproc;

#[doc(inline)]
pub use imxform_io as io;
