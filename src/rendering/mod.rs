pub mod codec;

pub use codec::{decode_image, encode_png, raster_from_dynamic, write_output};
