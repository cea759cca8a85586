//! Resource addressing.
//!
//! The gateway answers a created payment request with the URL of the new
//! resource. The trailing path segment of that URL is the identifier used to
//! retrieve or cancel the payment.

/// Extract the payment identifier from a resource location URL.
///
/// Returns the text after the last `/`. The parse is permissive: an empty
/// string, a string without `/`, or one ending in `/` all yield `""`, which
/// callers should read as "no identifier available".
///
/// ```
/// use swish_core::location::instruction_id;
///
/// let location = "https://mss.cpc.getswish.net/swish-cpcapi/api/v1/paymentrequests/AB23D7406ECE4542A80152D909EF9F6B";
/// assert_eq!(instruction_id(location), "AB23D7406ECE4542A80152D909EF9F6B");
/// assert_eq!(instruction_id(""), "");
/// ```
pub fn instruction_id(location: &str) -> &str {
    location
        .rsplit_once('/')
        .map(|(_, id)| id)
        .unwrap_or_default()
}
