/// Secret token authorizing calls to one provider
#[derive(Clone)]
pub struct Credential {
    provider: String,
    api_key: String,
}

impl Credential {
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: api_key.into(),
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("provider", &self.provider)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
