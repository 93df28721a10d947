use async_graphql::{ErrorExtensionValues, ErrorExtensions, Response, ServerError};
use mini_events_common::{ErrorCode, EventError};

const INTERNAL_MESSAGE: &str = "Internal server error";

fn coded(msg: impl Into<String>, code: ErrorCode) -> async_graphql::Error {
    async_graphql::Error::new(msg.into()).extend_with(|_, e| {
        e.set("code", code.as_str());
    })
}

/// Create an INVALID_INPUT GraphQL error.
pub fn invalid_input(msg: impl std::fmt::Display) -> async_graphql::Error {
    coded(msg.to_string(), ErrorCode::InvalidInput)
}

/// Create a NOT_FOUND GraphQL error.
pub fn not_found(msg: impl std::fmt::Display) -> async_graphql::Error {
    coded(msg.to_string(), ErrorCode::NotFound)
}

/// Create an INTERNAL_SERVER_ERROR GraphQL error (hides internal details).
pub fn internal(msg: impl std::fmt::Display) -> async_graphql::Error {
    tracing::error!("internal error: {msg}");
    coded(INTERNAL_MESSAGE, ErrorCode::InternalServerError)
}

/// Map a domain error onto its wire code. Internal causes are logged here
/// and never reach the caller.
pub fn from_event_error(err: EventError) -> async_graphql::Error {
    match err {
        EventError::InvalidInput(msg) => invalid_input(msg),
        EventError::NotFound(msg) => not_found(msg),
        EventError::DuplicateEmail(msg) => coded(msg, ErrorCode::DuplicateEmail),
        EventError::Internal(e) => internal(format!("{e:#}")),
    }
}

fn has_code(err: &ServerError) -> bool {
    err.extensions
        .as_ref()
        .is_some_and(|ext| ext.get("code").is_some())
}

/// Replace every error that carries no `code` extension (query parse
/// failures, unknown fields, bad variables) with a generic
/// INTERNAL_SERVER_ERROR. Used in production only.
pub fn mask_uncoded_errors(response: &mut Response) {
    for err in response.errors.iter_mut() {
        if has_code(err) {
            continue;
        }
        let mut extensions = ErrorExtensionValues::default();
        extensions.set("code", ErrorCode::InternalServerError.as_str());

        let mut masked = ServerError::new(INTERNAL_MESSAGE, None);
        masked.path = std::mem::take(&mut err.path);
        masked.extensions = Some(extensions);
        *err = masked;
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::Value;

    use super::*;

    fn code_of(err: &async_graphql::Error) -> Option<Value> {
        err.extensions.as_ref().and_then(|e| e.get("code").cloned())
    }

    #[test]
    fn maps_each_kind_to_its_code() {
        let cases = [
            (EventError::invalid_input("bad"), "INVALID_INPUT"),
            (EventError::not_found("gone"), "NOT_FOUND"),
            (EventError::DuplicateEmail("dup".into()), "DUPLICATE_EMAIL"),
            (
                EventError::Internal(anyhow::anyhow!("secret detail")),
                "INTERNAL_SERVER_ERROR",
            ),
        ];
        for (err, code) in cases {
            let gql = from_event_error(err);
            assert_eq!(code_of(&gql), Some(Value::from(code)));
        }
    }

    #[test]
    fn internal_detail_is_hidden() {
        let gql = from_event_error(EventError::Internal(anyhow::anyhow!("secret detail")));
        assert_eq!(gql.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn masks_only_uncoded_errors() {
        let mut response = Response::from_errors(vec![
            ServerError::new("Unknown field \"nope\"", None),
            not_found("Event 9 not found").into_server_error(Default::default()),
        ]);
        mask_uncoded_errors(&mut response);

        assert_eq!(response.errors[0].message, INTERNAL_MESSAGE);
        assert_eq!(
            response.errors[0].extensions.as_ref().and_then(|e| e.get("code").cloned()),
            Some(Value::from("INTERNAL_SERVER_ERROR"))
        );
        assert_eq!(response.errors[1].message, "Event 9 not found");
    }
}
