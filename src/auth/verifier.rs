use std::collections::HashMap;

use jsonwebtoken::{
    decode, decode_header,
    errors::ErrorKind,
    jwk::{AlgorithmParameters, JwkSet},
    Algorithm, DecodingKey, Validation,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    config::Config,
    errors::{AppError, AppResult, AuthError},
};

const INCORRECT_CLAIMS: &str = "Incorrect claims. Please, check the audience and issuer.";
const UNPARSEABLE_TOKEN: &str = "Unable to parse authentication token.";

/// Verifies bearer tokens against the tenant's signing keys.
///
/// Production mode holds one RSA key per JWKS `kid`. Dev mode holds a single
/// symmetric key so local runs and tests can mint their own tokens;
/// `Config::validate_for_production` refuses to start in that mode.
#[derive(Clone)]
pub struct TokenVerifier {
    keys: HashMap<String, DecodingKey>,
    shared_key: Option<DecodingKey>,
    validation: Validation,
}

impl TokenVerifier {
    pub fn from_jwks(jwks: &JwkSet, audience: &str, issuer: &str) -> AppResult<Self> {
        let mut keys = HashMap::new();

        for jwk in &jwks.keys {
            if !matches!(jwk.algorithm, AlgorithmParameters::RSA(_)) {
                continue;
            }
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            let key = DecodingKey::from_jwk(jwk)
                .map_err(|e| AppError::Internal(format!("unusable JWK '{}': {}", kid, e)))?;
            keys.insert(kid, key);
        }

        if keys.is_empty() {
            return Err(AppError::Internal(
                "JWKS contains no RSA signing keys".to_string(),
            ));
        }

        Ok(Self {
            keys,
            shared_key: None,
            validation: Self::validation_for(Algorithm::RS256, audience, issuer),
        })
    }

    pub fn from_secret(secret: &SecretString, audience: &str, issuer: &str) -> Self {
        Self {
            keys: HashMap::new(),
            shared_key: Some(DecodingKey::from_secret(secret.expose_secret().as_bytes())),
            validation: Self::validation_for(Algorithm::HS256, audience, issuer),
        }
    }

    /// Builds the verifier the configuration asks for: symmetric when
    /// `AUTH_DEV_SECRET` is set, otherwise RS256 keys fetched once from the
    /// tenant's JWKS endpoint.
    pub async fn bootstrap(config: &Config) -> AppResult<Self> {
        match &config.auth_dev_secret {
            Some(secret) => {
                log::warn!("AUTH_DEV_SECRET is set; verifying tokens with a symmetric dev key");
                Ok(Self::from_secret(
                    secret,
                    &config.api_audience,
                    &config.issuer(),
                ))
            }
            None => {
                let url = config.jwks_url();
                let jwks = fetch_jwks(&url).await?;
                log::info!("loaded {} signing key(s) from {}", jwks.keys.len(), url);
                Self::from_jwks(&jwks, &config.api_audience, &config.issuer())
            }
        }
    }

    /// Signature, expiry, audience, and issuer checks, mapped onto the
    /// authorization error taxonomy. Header-format checks happen before this
    /// is called; permission checks after.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidClaims {
            description: UNPARSEABLE_TOKEN,
        })?;

        let key = match header.kid {
            Some(ref kid) => self.keys.get(kid).or(self.shared_key.as_ref()),
            None => self.shared_key.as_ref(),
        }
        .ok_or(AuthError::InvalidClaims {
            description: UNPARSEABLE_TOKEN,
        })?;

        match decode::<Claims>(token, key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::ImmatureSignature
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims {
                    description: INCORRECT_CLAIMS,
                },
                _ => AuthError::InvalidClaims {
                    description: UNPARSEABLE_TOKEN,
                },
            }),
        }
    }

    fn validation_for(algorithm: Algorithm, audience: &str, issuer: &str) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[audience]);
        validation.set_issuer(&[issuer]);
        validation
    }
}

async fn fetch_jwks(url: &str) -> AppResult<JwkSet> {
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| AppError::Internal(format!("failed to fetch JWKS from {}: {}", url, e)))?;

    response
        .json::<JwkSet>()
        .await
        .map_err(|e| AppError::Internal(format!("failed to parse JWKS from {}: {}", url, e)))
}
