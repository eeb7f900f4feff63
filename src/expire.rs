//! Expiring cookies through `Set-Cookie` is attribute-matched: a deletion
//! only lands if name, domain, path, and secure-ness line up with however the
//! cookie was originally set, and there is no wildcard form. Since the request
//! never tells us those attributes, we emit one expiration per combination we
//! can plausibly cover.

const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Extracts the cookie names presented in a `Cookie` request header.
///
/// Order follows the header, duplicates are kept. Segments without `=` or
/// with an empty name (malformed, or stray attributes) are dropped rather
/// than treated as errors.
pub fn cookie_names(header: &str) -> Vec<String> {
    let mut names = Vec::new();

    for segment in header.split(';') {
        let Some((name, _value)) = segment.split_once('=') else {
			continue;
		};

        let name = name.trim();
        if !name.is_empty() {
            names.push(name.to_owned());
        }
    }

    names
}

/// One `Set-Cookie` expiration: empty value, `Max-Age=0`, epoch `Expires`.
/// Each expiration can remove at most the one stored cookie whose attributes
/// it matches exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieExpiration {
    pub name: String,
    /// `None` targets host-only cookies (no `Domain` attribute at all).
    pub domain: Option<String>,
    pub path: String,
    pub secure: bool,
    pub same_site_none: bool,
}

impl CookieExpiration {
    pub fn header_value(&self) -> String {
        let mut value = format!("{}=; Max-Age=0; Expires={EPOCH}", self.name);

        if let Some(domain) = &self.domain {
            value.push_str(&format!("; Domain={domain}"));
        }

        value.push_str(&format!("; Path={}", self.path));

        if self.secure {
            value.push_str("; Secure");
        }

        value.push_str("; HttpOnly");

        if self.same_site_none {
            value.push_str("; SameSite=None");
        }

        value
    }
}

#[derive(Clone, Debug)]
pub struct ExpireOptions<'a> {
    /// Path scopes to cover, minimally `/`.
    pub paths: &'a [String],
    /// Mirrors the current transport. A plaintext `Secure` expiration is
    /// rejected by browsers, and a non-secure one can't remove a secure
    /// cookie, so this is never forced either way.
    pub secure: bool,
    /// Also emit `SameSite=None` twins, for deployments that set cross-site
    /// cookies. Some browsers won't match those from a directive that omits
    /// the attribute.
    pub same_site_none: bool,
}

/// Every expiration needed to cover one cookie name: the cross product of
/// domain scopes (parent domain, exact host, host-only) and configured paths.
pub fn expirations_for(
    name: &str,
    host: &str,
    parent_domain: &str,
    options: &ExpireOptions,
) -> Vec<CookieExpiration> {
    let mut domains: Vec<Option<&str>> = Vec::with_capacity(3);
    if parent_domain != host && !parent_domain.is_empty() {
        domains.push(Some(parent_domain));
    }
    if !host.is_empty() {
        domains.push(Some(host));
    }
    domains.push(None);

    let mut expirations = Vec::new();

    for path in options.paths {
        for domain in &domains {
            let expiration = CookieExpiration {
                name: name.to_owned(),
                domain: domain.map(str::to_owned),
                path: path.clone(),
                secure: options.secure,
                same_site_none: false,
            };

            if options.same_site_none {
                expirations.push(CookieExpiration {
                    same_site_none: true,
                    ..expiration.clone()
                });
            }

            expirations.push(expiration);
        }
    }

    expirations
}

pub fn expire_all(
    names: &[String],
    host: &str,
    parent_domain: &str,
    options: &ExpireOptions,
) -> Vec<CookieExpiration> {
    names
        .iter()
        .flat_map(|name| expirations_for(name, host, parent_domain, options))
        .collect()
}
