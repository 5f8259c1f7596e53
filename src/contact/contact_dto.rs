use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveContactRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub company: String,
    #[validate(length(max = 50))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SaveContactRequest {
    /// Tags are trimmed and blank ones dropped.
    pub fn clean_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactFilters {
    pub search: Option<String>,
}
