use crate::principal::Principal;

/// `SecurityContext` carries the authenticated principal through the
/// request lifecycle.
///
/// Built by the API gateway once the admin gate has allowed a request and
/// handed to the wrapped action.
#[derive(Debug, Clone)]
pub struct SecurityContext {
    principal: Option<Principal>,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Id of the principal, or an empty string when none was set.
    #[must_use]
    pub fn subject_id(&self) -> &str {
        self.principal.as_ref().map_or("", |p| p.id.as_str())
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    principal: Option<Principal>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            principal: self.principal,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_security_context_builder_full() {
        let ctx = SecurityContext::builder()
            .principal(Principal::new("u1").with_email("u1@example.com"))
            .build();

        assert_eq!(ctx.subject_id(), "u1");
        assert_eq!(
            ctx.principal().and_then(|p| p.email.as_deref()),
            Some("u1@example.com")
        );
    }

    #[test]
    fn test_security_context_without_principal() {
        let ctx = SecurityContext::builder().build();

        assert!(ctx.principal().is_none());
        assert_eq!(ctx.subject_id(), "");
    }
}
