mod component;
mod fill;
mod hover;

pub use component::Signature;
