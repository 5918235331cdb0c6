use std::time::Duration;

/// Timings and thresholds shared by the page sections.
///
/// `App` provides one of these through context; components fall back to
/// [`SiteConfig::default`] when rendered outside of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    /// Fraction of a section that must be visible before it reveals.
    pub reveal_threshold: f64,
    /// Window scroll offset (px) past which the navbar switches to its solid style.
    pub condensed_nav_after: f64,
    pub carousel_interval: Duration,
    /// Simulated processing time for a contact form submission.
    pub submit_delay: Duration,
    /// How long the "thank you" confirmation stays up.
    pub confirmation_visible: Duration,
    pub skill_bar_stagger: Duration,
    pub timeline_stagger: Duration,
    pub resume_href: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            condensed_nav_after: 50.0,
            carousel_interval: Duration::from_secs(5),
            submit_delay: Duration::from_millis(1500),
            confirmation_visible: Duration::from_secs(5),
            skill_bar_stagger: Duration::from_millis(100),
            timeline_stagger: Duration::from_millis(200),
            resume_href: "/resume.pdf",
        }
    }
}

impl SiteConfig {
    pub fn carousel_interval_ms(&self) -> u64 {
        self.carousel_interval.as_millis() as u64
    }

    pub fn submit_delay_ms(&self) -> f64 {
        self.submit_delay.as_millis() as f64
    }

    pub fn confirmation_visible_ms(&self) -> f64 {
        self.confirmation_visible.as_millis() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.carousel_interval_ms(), 5000);
        assert_eq!(config.submit_delay_ms(), 1500.0);
        assert_eq!(config.confirmation_visible_ms(), 5000.0);
        assert_eq!(config.resume_href, "/resume.pdf");
    }
}
