use serde::Deserialize;

use crate::modules::calendar::core::event::EventId;
use crate::shared::core::validation::{ValidationError, positive};

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEventBody {
    #[serde(default)]
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteEvent {
    pub id: EventId,
}

impl TryFrom<DeleteEventBody> for DeleteEvent {
    type Error = ValidationError;

    fn try_from(body: DeleteEventBody) -> Result<Self, Self::Error> {
        Ok(Self {
            id: positive(body.id, ValidationError::NonPositiveId)?,
        })
    }
}
