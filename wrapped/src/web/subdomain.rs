use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use std::convert::Infallible;

/// Username taken from the first label of the request's host, for
/// `alice.wrapped.run`-style public views. A bare host carries no username.
#[derive(Clone, Debug)]
pub(crate) struct Subdomain(pub(crate) Option<String>);

impl Subdomain {
    fn from_host(host: &str) -> Self {
        // the Host header may carry a port
        let host = host.rsplit_once(':').map(|(h, _)| h).unwrap_or(host);
        let mut labels = host.split('.');
        match (labels.next(), labels.next()) {
            (Some(first), Some(_)) if !first.is_empty() => Subdomain(Some(first.to_string())),
            _ => Subdomain(None),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Subdomain
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok());
        Ok(host.map(Subdomain::from_host).unwrap_or(Subdomain(None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdomain_is_first_label() {
        assert_eq!(
            Subdomain::from_host("alice.wrapped.run").0.as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn bare_host_has_no_username() {
        assert!(Subdomain::from_host("localhost").0.is_none());
        assert!(Subdomain::from_host("localhost:3000").0.is_none());
    }

    #[test]
    fn port_is_stripped_before_splitting() {
        assert_eq!(
            Subdomain::from_host("alice.localhost:3000").0.as_deref(),
            Some("alice")
        );
    }
}
