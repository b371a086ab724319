#[cfg(feature = "serde")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "serde")))]
mod serde;

#[cfg(feature = "log")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "log")))]
pub mod log;
