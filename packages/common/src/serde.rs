use std::any::type_name;

use cosmwasm_std::{from_json, Binary, StdError, StdResult};
use serde::{de::DeserializeOwned, Serialize};

pub trait SerdeExt {
    /// Compact JSON, fields in declaration order.
    fn to_vec(&self) -> StdResult<Vec<u8>>
    where
        Self: Sized + Serialize,
    {
        serde_json_wasm::to_vec(self).map_err(|e| StdError::serialize_err(type_name::<Self>(), e))
    }

    fn to_json_text(&self) -> StdResult<String>
    where
        Self: Sized + Serialize,
    {
        String::from_utf8(self.to_vec()?)
            .map_err(|e| StdError::serialize_err(type_name::<Self>(), e))
    }

    fn to_binary(&self) -> StdResult<Binary>
    where
        Self: Sized + Serialize,
    {
        self.to_vec().map(Binary)
    }

    /// Human-readable JSON with two-space indentation.
    fn to_pretty_json(&self) -> StdResult<String>
    where
        Self: Sized + Serialize,
    {
        serde_json::to_string_pretty(self)
            .map_err(|e| StdError::serialize_err(type_name::<Self>(), e))
    }
}

pub trait DeserdeExt {
    fn to_t<T: DeserializeOwned>(&self) -> StdResult<T>;
}

impl DeserdeExt for Binary {
    fn to_t<T: DeserializeOwned>(&self) -> StdResult<T> {
        from_json(self)
    }
}

impl DeserdeExt for str {
    fn to_t<T: DeserializeOwned>(&self) -> StdResult<T> {
        from_json(self.as_bytes())
    }
}
