use chrono::NaiveDate;

use crate::models::portfolio::PortfolioUser;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// `2022-01-15` → `Jan 2022`
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// `Jan 2022 - Jun 2023`, or `Jan 2022 - Present` for an ongoing range.
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = end
        .map(format_month_year)
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", format_month_year(start), end)
}

pub const GITHUB_AVATAR_SIZE: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    /// Rendered as a colored block with this letter.
    Initial(char),
}

/// Returns the trimmed URL if it is absolute `http` or `https`. Other schemes are never
/// emitted into `href` or `src`.
pub fn web_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    let scheme_end = url.find("://")?;
    let scheme = &url[..scheme_end];
    let rest = &url[scheme_end + 3..];
    let web = scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https");
    (web && !rest.is_empty()).then_some(url)
}

/// Profile picture for the about section: uploaded image, then the GitHub avatar,
/// then the username's initial. An uploaded URL that is not http(s) is skipped.
pub fn resolve_avatar(user: &PortfolioUser) -> Avatar {
    if let Some(url) = user
        .profile_image_url
        .as_deref()
        .and_then(web_url)
    {
        return Avatar::Image(url.to_string());
    }

    if is_github_login(&user.github_username) {
        return Avatar::Image(format!(
            "https://github.com/{}.png?size={GITHUB_AVATAR_SIZE}",
            user.github_username
        ));
    }

    let initial = user
        .github_username
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('?');
    Avatar::Initial(initial)
}

/// GitHub logins: 1–39 ASCII alphanumerics or single hyphens, no leading or trailing hyphen.
fn is_github_login(name: &str) -> bool {
    let valid_chars = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    valid_chars
        && (1..=39).contains(&name.len())
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(github_username: &str, profile_image_url: Option<&str>) -> PortfolioUser {
        PortfolioUser {
            github_username: github_username.to_string(),
            portfolio_username: github_username.to_string(),
            bio: None,
            profile_image_url: profile_image_url.map(String::from),
            resume_text: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ongoing_range_renders_present() {
        assert_eq!(format_date_range(date(2022, 1, 15), None), "Jan 2022 - Present");
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(
            format_date_range(date(2022, 1, 15), Some(date(2023, 6, 1))),
            "Jan 2022 - Jun 2023"
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_avatar_prefers_uploaded_image() {
        let u = user("octocat", Some("https://cdn.example.com/me.jpg"));
        assert_eq!(
            resolve_avatar(&u),
            Avatar::Image("https://cdn.example.com/me.jpg".to_string())
        );
    }

    #[test]
    fn test_avatar_falls_back_to_github() {
        let u = user("octocat", Some("   "));
        assert_eq!(
            resolve_avatar(&u),
            Avatar::Image("https://github.com/octocat.png?size=400".to_string())
        );
    }

    #[test]
    fn test_avatar_initial_when_login_is_not_usable() {
        assert_eq!(resolve_avatar(&user("élodie dev", None)), Avatar::Initial('É'));
        assert_eq!(resolve_avatar(&user("", None)), Avatar::Initial('?'));
    }

    #[test]
    fn test_avatar_skips_non_web_upload() {
        let u = user("octocat", Some("javascript:alert(1)"));
        assert_eq!(
            resolve_avatar(&u),
            Avatar::Image("https://github.com/octocat.png?size=400".to_string())
        );
        let u = user("-bad-", Some("data:image/svg+xml,<svg/>"));
        assert_eq!(resolve_avatar(&u), Avatar::Initial('-'));
    }

    #[test]
    fn test_web_url_accepts_http_schemes_only() {
        assert_eq!(web_url(" https://a.example/x "), Some("https://a.example/x"));
        assert_eq!(web_url("HTTP://a.example"), Some("HTTP://a.example"));
        assert_eq!(web_url("javascript:alert(1)"), None);
        assert_eq!(web_url("javascript://%0aalert(1)"), None);
        assert_eq!(web_url("//a.example"), None);
        assert_eq!(web_url("https://"), None);
        assert_eq!(web_url(""), None);
    }

    #[test]
    fn test_github_login_rules() {
        assert!(is_github_login("a-b"));
        assert!(!is_github_login("-ab"));
        assert!(!is_github_login("a--b"));
        assert!(!is_github_login(&"a".repeat(40)));
    }
}
