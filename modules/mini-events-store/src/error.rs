use mini_events_common::EventError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Event {0} not found")]
    EventNotFound(String),

    #[error("Attendee {attendee_id} not found in event {event_id}")]
    AttendeeNotFound {
        event_id: String,
        attendee_id: String,
    },

    /// Failure inside the backing store itself.
    #[error("store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for EventError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EventNotFound(_) | StoreError::AttendeeNotFound { .. } => {
                EventError::NotFound(err.to_string())
            }
            StoreError::Backend(e) => EventError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use mini_events_common::ErrorCode;

    use super::*;

    #[test]
    fn lookups_map_to_not_found() {
        let err: EventError = StoreError::EventNotFound("9".into()).into();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Event 9 not found");

        let err: EventError = StoreError::AttendeeNotFound {
            event_id: "1".into(),
            attendee_id: "a".into(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn backend_maps_to_internal() {
        let err: EventError = StoreError::Backend(anyhow::anyhow!("io")).into();
        assert_eq!(err.code(), ErrorCode::InternalServerError);
    }
}
