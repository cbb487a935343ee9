/// A normalized waitlist signup, ready to be inserted into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub email: String,
    pub country: String,
}

impl Entry {
    /// Build an entry from raw field values.
    ///
    /// The name is trimmed (case kept), the email is trimmed and lowercased,
    /// and the country is passed through untouched.
    pub fn normalized(name: &str, email: &str, country: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            country: country.to_string(),
        }
    }

    /// Domain part of the email, for logging without the full address.
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

/// Whether `email` would pass an HTML `<input type="email">` required check.
///
/// Follows the WHATWG "valid email address" production: a non-empty local part
/// of atext characters and dots, then one `@`, then one or more dot-separated
/// labels of alphanumerics and inner hyphens, each at most 63 characters.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    local_ok && !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_trimmed_and_lowercased() {
        let entry = Entry::normalized("Ada", " Foo@Bar.COM ", "France");
        assert_eq!(entry.email, "foo@bar.com");
    }

    #[test]
    fn test_name_keeps_case() {
        let entry = Entry::normalized("  Ada Lovelace\t", "a@b.c", "France");
        assert_eq!(entry.name, "Ada Lovelace");
    }

    #[test]
    fn test_country_passes_through() {
        let entry = Entry::normalized("Ada", "a@b.c", "United Kingdom");
        assert_eq!(entry.country, "United Kingdom");
    }

    #[test]
    fn test_email_domain() {
        let entry = Entry::normalized("Ada", "ada@example.org", "Other");
        assert_eq!(entry.email_domain(), "example.org");
    }

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("foo@bar.com"));
        assert!(is_plausible_email(" Foo@Bar.COM "));
        assert!(is_plausible_email("first.last+tag@sub.example-mail.io"));
        assert!(is_plausible_email("user@localhost"));
    }

    #[test]
    fn test_implausible_emails() {
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("foo"));
        assert!(!is_plausible_email("@bar.com"));
        assert!(!is_plausible_email("foo@"));
        assert!(!is_plausible_email("foo@bar..com"));
        assert!(!is_plausible_email("foo@-bar.com"));
        assert!(!is_plausible_email("foo@@bar.com"));
        assert!(!is_plausible_email("fo o@bar.com"));
    }
}
