use std::fmt::Write;

use crate::auth::repo_types::User;

/// Render the registrant report: one numbered entry per record, in the
/// order the caller supplied (the store sorts by full name).
pub fn render(users: &[User]) -> String {
    let mut out = String::new();
    out.push_str("Mind AI Forge - Registered Users\n");
    out.push_str("================================\n\n");

    for (index, user) in users.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({})", index + 1, user.full_name, user.employee_id);
        let _ = writeln!(out, "   Email: {}", user.email);
        let _ = writeln!(
            out,
            "   Designation: {}",
            user.designation.as_deref().unwrap_or("-")
        );
        let _ = writeln!(
            out,
            "   Tech: {} | Exp: {} years",
            user.primary_technology.as_deref().unwrap_or("-"),
            user.experience_years
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".into()),
        );
        let _ = writeln!(
            out,
            "   Uploaded Idea: {}",
            if user.idea_pdf_key.is_some() { "Yes" } else { "No" }
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::{test_user, Role};

    #[test]
    fn renders_one_numbered_entry_per_user() {
        let mut first = test_user(Role::User);
        first.idea_pdf_key = Some("ideas/a/b.pdf".into());
        let mut second = test_user(Role::User);
        second.full_name = "Bob Sample".into();
        second.employee_id = "EMP002".into();
        second.email = "bob@example.com".into();
        second.designation = None;
        second.experience_years = None;

        let report = render(&[first, second]);

        assert!(report.starts_with("Mind AI Forge - Registered Users"));
        assert!(report.contains("1. Alice Example (EMP001)"));
        assert!(report.contains("   Email: alice@example.com"));
        assert!(report.contains("   Tech: Rust | Exp: 5 years"));
        assert!(report.contains("   Uploaded Idea: Yes"));
        assert!(report.contains("2. Bob Sample (EMP002)"));
        assert!(report.contains("   Designation: -"));
        assert!(report.contains("   Uploaded Idea: No"));
    }

    #[test]
    fn empty_store_renders_just_the_header() {
        let report = render(&[]);
        assert!(report.contains("Registered Users"));
        assert!(!report.contains("1."));
    }
}
