use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

/// Profile of a user together with who they follow and who follows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub followers: Vec<UserSummary>,
    #[serde(default)]
    pub following: Vec<UserSummary>,
}

impl UserProfile {
    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    pub fn following_count(&self) -> usize {
        self.following.len()
    }
}

/// Envelope returned by `GET /api/users/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMeResponse {
    #[serde(default)]
    pub result: Option<String>,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_me_response() {
        let json = r#"{"result": "true", "user": {"id": 1, "name": "alice", "followers": [{"id": 2, "name": "bob"}], "following": []}}"#;
        let resp: UserMeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.name, "alice");
        assert_eq!(resp.user.follower_count(), 1);
        assert_eq!(resp.user.following_count(), 0);
        assert_eq!(resp.user.followers[0].name, "bob");
    }

    #[test]
    fn test_parse_user_profile_without_follow_lists() {
        let json = r#"{"id": 7, "name": "carol"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.followers.is_empty());
        assert!(user.following.is_empty());
    }
}
