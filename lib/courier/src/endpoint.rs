//! Request targets.

use std::borrow::Cow;

/// Something that names the URL a request goes to.
///
/// Strings are endpoints as-is. Applications usually define an enum of their
/// API's endpoints:
///
/// ```
/// use std::borrow::Cow;
/// use courier::Endpoint;
///
/// enum Operations {
///     Demo { base_url: String },
/// }
///
/// impl Endpoint for Operations {
///     fn url(&self) -> Cow<'_, str> {
///         match self {
///             Self::Demo { base_url } => format!("{base_url}api/operations/demo").into(),
///         }
///     }
/// }
///
/// let endpoint = Operations::Demo { base_url: "https://metrics.example.com/".into() };
/// assert_eq!(endpoint.url(), "https://metrics.example.com/api/operations/demo");
/// ```
pub trait Endpoint {
    /// The target URL. It is only validated when the request fires.
    fn url(&self) -> Cow<'_, str>;
}

impl Endpoint for str {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Endpoint for String {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Endpoint for url::Url {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<E: Endpoint + ?Sized> Endpoint for &E {
    fn url(&self) -> Cow<'_, str> {
        (**self).url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_endpoints() {
        assert_eq!("https://a.example/x".url(), "https://a.example/x");
        assert_eq!(String::from("https://b.example/").url(), "https://b.example/");
    }

    #[test]
    fn parsed_urls_are_endpoints() {
        let url = url::Url::parse("https://c.example").expect("url");
        assert_eq!(url.url(), "https://c.example/");
    }

    #[test]
    fn malformed_strings_are_accepted() {
        assert_eq!("not a url".url(), "not a url");
    }
}
