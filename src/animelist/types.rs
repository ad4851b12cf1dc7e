//! Watch-list domain types.
//!
//! Providers report statuses as open string keys; these enums close them
//! with an explicit `Unknown` variant so an unrecognized value degrades
//! to a logged default instead of failing a discovery pass.

/// One show on the user's watch list, as a read-only snapshot for a
/// single discovery cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedEntry {
    pub title: String,
    pub airing_status: AiringStatus,
}

/// Whether a show is still broadcasting new episodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiringStatus {
    Airing,
    Finished,
    Unknown,
}

impl AiringStatus {
    /// Map a Kitsu anime `status` attribute.
    pub fn from_kitsu(status: &str) -> Self {
        match status {
            "current" => Self::Airing,
            "finished" => Self::Finished,
            other => {
                tracing::warn!("unknown airing status from kitsu: {other}");
                Self::Unknown
            }
        }
    }
}

/// The user's list state for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Watching,
    PlanToWatch,
    Completed,
    Dropped,
    OnHold,
    Unknown,
}

impl ListStatus {
    /// Map a Kitsu library-entry `status` attribute.
    pub fn from_kitsu(status: &str) -> Self {
        match status {
            "current" => Self::Watching,
            "planned" => Self::PlanToWatch,
            "completed" => Self::Completed,
            "dropped" => Self::Dropped,
            "on_hold" => Self::OnHold,
            other => {
                tracing::warn!("unknown list status from kitsu: {other}");
                Self::Unknown
            }
        }
    }

    /// The Kitsu filter value for this status, if it has one.
    pub fn as_kitsu(self) -> Option<&'static str> {
        match self {
            Self::Watching => Some("current"),
            Self::PlanToWatch => Some("planned"),
            Self::Completed => Some("completed"),
            Self::Dropped => Some("dropped"),
            Self::OnHold => Some("on_hold"),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airing_status_mapping() {
        assert_eq!(AiringStatus::from_kitsu("current"), AiringStatus::Airing);
        assert_eq!(AiringStatus::from_kitsu("finished"), AiringStatus::Finished);
        assert_eq!(AiringStatus::from_kitsu("tba"), AiringStatus::Unknown);
    }

    #[test]
    fn list_status_round_trip() {
        for status in [
            ListStatus::Watching,
            ListStatus::PlanToWatch,
            ListStatus::Completed,
            ListStatus::Dropped,
            ListStatus::OnHold,
        ] {
            let key = status.as_kitsu().unwrap();
            assert_eq!(ListStatus::from_kitsu(key), status);
        }
        assert_eq!(ListStatus::from_kitsu("???"), ListStatus::Unknown);
        assert_eq!(ListStatus::Unknown.as_kitsu(), None);
    }
}
