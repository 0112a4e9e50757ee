use lambda_runtime::Error;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;

pub const GREETING_MESSAGE: &str = "deploy the image from ECR through lambda";
pub const GREETING_VERSION: &str = "1.0";

/// The HTTP-style record returned to the Lambda runtime.
/// Serializes as `{"statusCode": 200, "body": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// JSON text of a [Greeting]
    pub body: String,
}

/// The structure encoded into `Response::body`.
/// Field order matters: `message` must come before `version`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
    pub version: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            version: GREETING_VERSION.to_string(),
        }
    }
}

impl Response {
    /// Builds the one and only response this function returns.
    pub fn greeting() -> Result<Self, Error> {
        Ok(Self {
            status_code: 200,
            body: to_spaced_json(&Greeting::default())?,
        })
    }
}

/// A JSON formatter that puts a space after `,` and `:`, e.g. `{"a": 1, "b": 2}`.
/// Keeps the body byte-identical to what existing clients of this function receive.
#[derive(Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes the value into a single-line JSON string with `, ` and `: ` separators.
pub fn to_spaced_json<T>(value: &T) -> Result<String, Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8(buf)?)
}
