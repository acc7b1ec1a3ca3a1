//! The API endpoints URIs.
//!
//! For endpoints that take parameters, e.g., '/api/envelopes/{envelope_id}', use [format_endpoint].

/// The root route, answers with a greeting.
pub const ROOT: &str = "/";
/// The route to list and create envelopes.
pub const ENVELOPES: &str = "/api/envelopes";
/// The route to get, update and delete a single envelope.
pub const ENVELOPE: &str = "/api/envelopes/{envelope_id}";
/// The route to move budget from one envelope to another.
pub const TRANSFER: &str = "/api/envelopes/transfer/{from_id}/{to_id}";

/// Replace the parameters in `endpoint_path` with `ids`, in order.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/envelopes/{envelope_id}', '{envelope_id}' is the parameter.
///
/// Parameters without a matching ID are left as they are, and extra IDs are
/// ignored.
///
/// This function assumes that an endpoint path only contains ASCII characters.
pub fn format_endpoint(endpoint_path: &str, ids: &[i64]) -> String {
    let mut formatted = String::with_capacity(endpoint_path.len());
    let mut ids = ids.iter();
    let mut rest = endpoint_path;

    while let Some(param_start) = rest.find('{') {
        let Some(param_length) = rest[param_start..].find('}') else {
            break;
        };
        let Some(id) = ids.next() else {
            break;
        };

        formatted.push_str(&rest[..param_start]);
        formatted.push_str(&id.to_string());
        rest = &rest[param_start + param_length + 1..];
    }

    formatted.push_str(rest);
    formatted
}
