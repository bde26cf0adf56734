use crate::error::Error;
use crate::schema::{Schema, Shape};
use serde::{Deserialize, Deserializer};
use serde::de::{self, DeserializeOwned};
use serde_json::Value;

/// The response wrapper for account-scoped endpoints. The `success` field selects the variant.
#[derive(Debug, PartialEq, Clone)]
pub enum Envelope<T> {
    /// `success: false`.
    Failure {
        /// The reason given by the server.
        message: String,
    },
    /// `success: true`. The payload fields sit beside `success` and `message`.
    Success {
        /// Usually empty.
        message: String,
        /// The payload.
        payload: T,
    },
}

impl<T> Envelope<T> {
    /// Converts into the payload. A failure becomes [`Error::Api`] with the server's message.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Failure { message } => Err(Error::Api(message)),
            Self::Success { payload, .. } => Ok(payload),
        }
    }

    /// The message from the server.
    pub fn message(&self) -> &str {
        match self {
            Self::Failure { message } => message,
            Self::Success { message, .. } => message,
        }
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let success = value.get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| de::Error::missing_field("success"))?;
        let message = value.get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| de::Error::missing_field("message"))?
            .to_owned();

        if !success {
            return Ok(Self::Failure { message });
        }

        let payload = T::deserialize(value).map_err(de::Error::custom)?;

        Ok(Self::Success { message, payload })
    }
}

impl<T> Shape for Envelope<T>
where
    T: Shape,
{
    fn schema() -> Schema {
        Schema::union("success", [
            (Value::Bool(false), Schema::object([
                ("success", Schema::literal(false)),
                ("message", Schema::string()),
            ])),
            (Value::Bool(true), T::schema().with_fields([
                ("success", Schema::literal(true)),
                ("message", Schema::string()),
            ])),
        ])
    }
}
