use serde::Serialize;

/// A record that can be submitted to a FHIR endpoint.
///
/// `TYPE` is the resource type name, used both as the `resourceType` field
/// in the payload and as the URL path segment of the submission request.
pub trait Resource: Serialize {
    const TYPE: &'static str;
}
