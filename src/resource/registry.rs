//! Endpoint Registry - resolve a DTO type to its OpenXBL endpoint
//!
//! Each DTO declares its endpoint on the type itself through [`XblDto`],
//! usually with the [`xbl_endpoint!`](crate::xbl_endpoint) macro.

use crate::error::{Result, XblError};
use serde::de::DeserializeOwned;

/// A wire-shaped response body that can be requested through the dispatcher
pub trait XblDto: DeserializeOwned + Send + 'static {
    /// Endpoint path relative to the API base URL, e.g. `/account`
    const ENDPOINT: Option<&'static str> = None;
}

/// Endpoint metadata for one resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub resource_type: &'static str,
    pub endpoint_path: &'static str,
}

/// Declare the endpoint of a DTO type
///
/// ```ignore
/// xbl_endpoint!(AccountDto => "/account");
/// ```
#[macro_export]
macro_rules! xbl_endpoint {
    ($dto:ty => $path:expr) => {
        impl $crate::resource::XblDto for $dto {
            const ENDPOINT: Option<&'static str> = Some($path);
        }
    };
}

/// Get the endpoint descriptor for `T`
pub fn resolve<T: XblDto>() -> Result<ResourceDescriptor> {
    let resource_type = std::any::type_name::<T>();

    match T::ENDPOINT {
        Some(endpoint_path) => Ok(ResourceDescriptor {
            resource_type,
            endpoint_path,
        }),
        None => Err(XblError::Configuration(format!(
            "No OpenXBL endpoint declared for {}",
            resource_type
        ))),
    }
}
