pub mod registry;
pub mod report;

pub use crate::domain::model::Parcel;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
