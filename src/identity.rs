//! Identity-provider endpoints
//!
//! Values derived from the Auth0 settings. Pure string computation, no
//! network access.

use std::sync::Arc;
use url::Url;

use crate::config::ClientSettings;

/// Tenant host suffix appended to the configured domain prefix
pub const AUTH0_HOST_SUFFIX: &str = "auth0.com";

/// Algorithms the tenant signs access tokens with
pub const SIGNING_ALGORITHMS: &[&str] = &["RS256"];

/// Endpoints of the configured Auth0 tenant
#[derive(Debug, Clone)]
pub struct IdentityProviderEndpoints {
    settings: Arc<ClientSettings>,
}

impl IdentityProviderEndpoints {
    pub fn new(settings: Arc<ClientSettings>) -> Self {
        Self { settings }
    }

    /// Full tenant host, e.g. "cjohannb.eu.auth0.com"
    pub fn tenant_domain(&self) -> String {
        format!("{}.{}", self.settings.auth_domain_prefix, AUTH0_HOST_SUFFIX)
    }

    /// Expected `iss` claim of issued tokens
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_domain())
    }

    /// JSON Web Key Set of the tenant
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.tenant_domain())
    }

    /// Login link for the implicit flow the client uses
    pub fn authorize_url(&self) -> crate::Result<String> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.tenant_domain()))?;
        url.query_pairs_mut()
            .append_pair("audience", &self.settings.auth_audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.settings.auth_client_id)
            .append_pair("redirect_uri", &self.settings.auth_callback_url);
        Ok(url.to_string())
    }

    /// Logout link returning to the callback URL
    pub fn logout_url(&self) -> crate::Result<String> {
        let mut url = Url::parse(&format!("https://{}/v2/logout", self.tenant_domain()))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.settings.auth_client_id)
            .append_pair("returnTo", &self.settings.auth_callback_url);
        Ok(url.to_string())
    }
}
