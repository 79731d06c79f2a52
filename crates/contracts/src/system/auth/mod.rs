use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    Read,
    Create,
    Update,
    Delete,
}

/// One grant issued by the auth service. `resource = "*"` covers every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub action: PermissionAction,
    pub resource: String,
}

pub const ANY_RESOURCE: &str = "*";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<PermissionGrant>,
}

impl UserInfo {
    /// Permission check; the decision itself belongs to the auth service,
    /// this only evaluates the grants it returned.
    pub fn can(&self, action: PermissionAction, resource: &str) -> bool {
        self.is_admin
            || self
                .permissions
                .iter()
                .any(|g| g.action == action && (g.resource == resource || g.resource == ANY_RESOURCE))
    }
}
