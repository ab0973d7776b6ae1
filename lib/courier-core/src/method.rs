//! HTTP method types.

use derive_more::Display;

use crate::Encoding;

/// HTTP request method supported by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - parameters travel in the query string.
    #[default]
    #[display("GET")]
    Get,
    /// POST method - parameters travel in the request body.
    #[display("POST")]
    Post,
}

impl Method {
    /// The parameter encoding implied by this method.
    ///
    /// GET sends parameters as a query string, POST as a JSON body.
    #[must_use]
    pub const fn default_encoding(&self) -> Encoding {
        match self {
            Self::Get => Encoding::Query,
            Self::Post => Encoding::Json,
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            other => Err(crate::Error::invalid_request(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn method_defaults_to_get() {
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn method_default_encoding() {
        assert_eq!(Method::Get.default_encoding(), Encoding::Query);
        assert_eq!(Method::Post.default_encoding(), Encoding::Json);
    }

    #[test]
    fn method_into_http() {
        assert_eq!(http::Method::from(Method::Get), http::Method::GET);
        assert_eq!(http::Method::from(Method::Post), http::Method::POST);
    }

    #[test]
    fn method_from_http() {
        assert_eq!(
            Method::try_from(http::Method::POST).expect("POST"),
            Method::Post
        );
        assert!(Method::try_from(http::Method::DELETE).is_err());
    }
}
