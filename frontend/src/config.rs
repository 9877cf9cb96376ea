use log::Level;

pub const SITE_NAME: &str = "Stack Websites London";
pub const SITE_URL: &str = "https://websitelondon.co.uk";

pub const CONTACT_EMAIL: &str = "hello@websitelondon.co.uk";
pub const CONTACT_PHONE: &str = "+44 20 1234 5678";
pub const CONTACT_PHONE_HREF: &str = "tel:+442012345678";
pub const CONTACT_LOCATION: &str = "London, United Kingdom";
pub const BUSINESS_HOURS: &str = "Mon-Fri: 9am-6pm";

/// localStorage key holding the cookie notice acknowledgement.
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";
pub const COOKIE_CONSENT_VALUE: &str = "accepted";

/// How long the splash overlay stays fully on screen.
pub const SPLASH_DURATION_MS: u32 = 4_000;
/// Slide-out animation after the splash duration elapses.
pub const SPLASH_EXIT_MS: u32 = 800;

/// Stand-in latency for the lead submission.
pub const SUBMIT_DELAY_MS: u32 = 2_000;
/// The success banner clears itself after this long.
pub const SUCCESS_CLEAR_MS: u32 = 5_000;

pub const LEGAL_LAST_UPDATED: &str = "February 4, 2026";

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn canonical(path: &str) -> String {
    if path == "/" {
        SITE_URL.to_string()
    } else {
        format!("{}{}", SITE_URL, path)
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_root_has_no_trailing_slash() {
        assert_eq!(canonical("/"), "https://websitelondon.co.uk");
        assert_eq!(canonical("/contact"), "https://websitelondon.co.uk/contact");
    }

    #[test]
    fn mailto_uses_contact_email() {
        assert_eq!(mailto(), "mailto:hello@websitelondon.co.uk");
    }
}
