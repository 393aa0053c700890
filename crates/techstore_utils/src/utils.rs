use chrono::NaiveDateTime;

pub fn get_utc_datetime() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// Check that a string is shaped like `local@domain.tld`
///
/// This is a plausibility check only; deliverability is never verified.
///
/// # Arguments
///
/// * `email` - The address to check
///
/// # Returns
///
/// * `bool` - true when the address has a single `@`, a non-empty local part
///   and a dotted domain without empty labels
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// True when the string is empty or only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ana.lopez@techstore.com"));
        assert!(is_valid_email("  vendedor@tienda.com.bo "));

        assert!(!is_valid_email("ana.lopez"));
        assert!(!is_valid_email("@techstore.com"));
        assert!(!is_valid_email("ana@techstore"));
        assert!(!is_valid_email("ana@@techstore.com"));
        assert!(!is_valid_email("ana@techstore..com"));
        assert!(!is_valid_email("ana lopez@techstore.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" Ana "));
    }
}
