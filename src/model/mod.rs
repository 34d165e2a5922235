mod asset;
mod media;
mod module;

pub use asset::Asset;
pub use media::MediaType;
pub use module::Module;
