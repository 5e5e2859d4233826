//! User domain entity and related types.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::License;

/// Snapshot of the store: user key to record, ordered by key.
pub type UserMap = BTreeMap<String, User>;

/// Metadata of an uploaded mugshot file. The file contents are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Mugshot {
    #[schema(example = "john.png")]
    pub filename: String,
    #[schema(example = "image/png")]
    pub content_type: Option<String>,
    /// Size in bytes
    pub size: usize,
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub mugshot: Option<Mugshot>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub licenses: Vec<License>,
}

impl User {
    /// Create a new user without age or licenses
    pub fn new(name: String, password: String, mugshot: Option<Mugshot>) -> Self {
        Self {
            name,
            password,
            mugshot,
            age: None,
            licenses: Vec::new(),
        }
    }

    /// Attach a license
    pub fn with_license(mut self, license: License) -> Self {
        self.licenses.push(license);
        self
    }

    /// Set the age
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Merge a partial update into this record.
    ///
    /// Only fields present in the patch are written; everything else keeps
    /// its current value.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(mugshot) = patch.mugshot {
            self.mugshot = mugshot;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(licenses) = patch.licenses {
            self.licenses = licenses;
        }
    }
}

/// User creation data
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub mugshot: Option<Mugshot>,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        User::new(new_user.name, new_user.password, new_user.mugshot)
    }
}

/// Partial user update.
///
/// An omitted field leaves the stored value untouched. For the nullable
/// fields (`mugshot`, `age`) an explicit `null` clears the stored value,
/// so they are tracked as `Option<Option<_>>`: outer `None` means omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UserPatch {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[schema(example = "jane")]
    pub name: Option<String>,
    #[validate(length(
        min = 4,
        max = 16,
        message = "Password must be between 4 and 16 characters"
    ))]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Mugshot>)]
    pub mugshot: Option<Option<Mugshot>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>, example = 31)]
    pub age: Option<Option<i64>>,
    pub licenses: Option<Vec<License>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "john")]
    pub name: String,
    pub mugshot: Option<Mugshot>,
    #[schema(example = 30)]
    pub age: Option<i64>,
    pub licenses: Vec<License>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            mugshot: user.mugshot,
            age: user.age,
            licenses: user.licenses,
        }
    }
}
