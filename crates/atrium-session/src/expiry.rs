//! Periodic session expiry detection.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::service::AuthService;

/// Default period between expiry checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Shortest period [`watch_expiry`] will use.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Longest period [`watch_expiry`] will use.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(86_400);

/// Bring `period` into `MIN_POLL_INTERVAL..=MAX_POLL_INTERVAL`.
pub fn clamp_poll_interval(period: Duration) -> Duration {
    period.clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL)
}

/// Outcome of one expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryCheck {
    /// The token is still valid.
    Valid,
    /// Expiry was observed for the first time; the session should end.
    Expired,
    /// The token is still expired and this expiry was already reported.
    Handled,
}

/// Edge-triggered expiry detector.
///
/// Reports [`ExpiryCheck::Expired`] once per transition into the expired
/// state. Seeing a valid token again re-arms it.
#[derive(Debug, Default)]
pub struct ExpiryWatch {
    tripped: bool,
}

impl ExpiryWatch {
    /// Create an armed watch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Query `auth` and classify the result.
    pub fn check<A: AuthService + ?Sized>(&mut self, auth: &A) -> ExpiryCheck {
        if !auth.is_token_expired() {
            self.tripped = false;
            return ExpiryCheck::Valid;
        }

        if self.tripped {
            ExpiryCheck::Handled
        } else {
            self.tripped = true;
            ExpiryCheck::Expired
        }
    }
}

/// Poll `auth` every `period` and call `on_expired` once per expiry
/// detection.
///
/// `period` is clamped with [`clamp_poll_interval`], so zero and very large
/// periods are accepted. The first check happens one full period after the
/// call. Ticks missed while the executor was busy are skipped, not
/// replayed. The loop never returns; drop the future to stop it.
pub async fn watch_expiry<A, F>(auth: &A, period: Duration, mut on_expired: F)
where
    A: AuthService + ?Sized,
    F: FnMut(),
{
    let period = clamp_poll_interval(period);
    let now = Instant::now();
    let start = now.checked_add(period).unwrap_or(now);
    let mut ticker = interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut watch = ExpiryWatch::new();

    tracing::debug!(?period, "Session expiry watch started");

    loop {
        ticker.tick().await;
        if watch.check(auth) == ExpiryCheck::Expired {
            tracing::info!("Session token expired");
            on_expired();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::descriptor::SessionDescriptor;
    use crate::service::{Destination, NavigationHandle, SessionService};
    use crate::store::SessionStore;
    use crate::token::{Claims, SessionToken};
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingNav {
        redirects: RefCell<Vec<Destination>>,
    }

    impl NavigationHandle for RecordingNav {
        fn redirect(&self, destination: Destination) {
            self.redirects.borrow_mut().push(destination);
        }
    }

    #[derive(Default)]
    struct FakeAuth {
        expired: Cell<bool>,
        checks: Cell<u32>,
    }

    impl AuthService for FakeAuth {
        fn user(&self) -> Option<SessionDescriptor> {
            None
        }

        fn is_token_expired(&self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.expired.get()
        }

        fn logout(&self, nav: &dyn NavigationHandle) {
            nav.redirect(Destination::Login);
        }
    }

    #[test]
    fn test_watch_reports_expiry_once() {
        let auth = FakeAuth::default();
        let mut watch = ExpiryWatch::new();

        assert_eq!(watch.check(&auth), ExpiryCheck::Valid);

        auth.expired.set(true);
        assert_eq!(watch.check(&auth), ExpiryCheck::Expired);
        assert_eq!(watch.check(&auth), ExpiryCheck::Handled);
        assert_eq!(watch.check(&auth), ExpiryCheck::Handled);
    }

    #[test]
    fn test_watch_rearms_after_valid_token() {
        let auth = FakeAuth::default();
        let mut watch = ExpiryWatch::new();

        auth.expired.set(true);
        assert_eq!(watch.check(&auth), ExpiryCheck::Expired);

        auth.expired.set(false);
        assert_eq!(watch.check(&auth), ExpiryCheck::Valid);

        auth.expired.set(true);
        assert_eq!(watch.check(&auth), ExpiryCheck::Expired);
    }

    #[test]
    fn test_watch_fires_on_first_check_without_session() {
        let auth = FakeAuth::default();
        auth.expired.set(true);
        assert_eq!(ExpiryWatch::new().check(&auth), ExpiryCheck::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_check_before_first_period() {
        let auth = FakeAuth::default();
        auth.expired.set(true);
        let fired = Cell::new(0);

        let run = watch_expiry(&auth, Duration::from_secs(60), || fired.set(fired.get() + 1));
        let _ = tokio::time::timeout(Duration::from_secs(59), run).await;

        assert_eq!(auth.checks.get(), 0);
        assert_eq!(fired.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_fires_once_per_detection() {
        let auth = FakeAuth::default();
        auth.expired.set(true);
        let fired = Cell::new(0);

        let run = watch_expiry(&auth, Duration::from_secs(60), || fired.set(fired.get() + 1));
        let _ = tokio::time::timeout(Duration::from_secs(60 * 5 + 1), run).await;

        assert_eq!(auth.checks.get(), 5);
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_session_never_fires() {
        let auth = FakeAuth::default();
        let fired = Cell::new(0);

        let run = watch_expiry(&auth, Duration::from_secs(1), || fired.set(fired.get() + 1));
        let _ = tokio::time::timeout(Duration::from_secs(30), run).await;

        assert!(auth.checks.get() >= 29);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_clamp_poll_interval() {
        assert_eq!(clamp_poll_interval(Duration::ZERO), MIN_POLL_INTERVAL);
        assert_eq!(clamp_poll_interval(Duration::from_secs(u64::MAX)), MAX_POLL_INTERVAL);
        assert_eq!(clamp_poll_interval(DEFAULT_POLL_INTERVAL), DEFAULT_POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_polls_every_second() {
        let auth = FakeAuth::default();
        let fired = Cell::new(0);

        let run = watch_expiry(&auth, Duration::ZERO, || fired.set(fired.get() + 1));
        let _ = tokio::time::timeout(Duration::from_millis(3_500), run).await;

        assert_eq!(auth.checks.get(), 3);
        assert_eq!(fired.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_period_does_not_overflow() {
        let auth = FakeAuth::default();
        auth.expired.set(true);
        let fired = Cell::new(0);

        let run = watch_expiry(&auth, Duration::from_secs(u64::MAX), || {
            fired.set(fired.get() + 1)
        });
        let _ = tokio::time::timeout(MAX_POLL_INTERVAL + Duration::from_secs(1), run).await;

        assert_eq!(auth.checks.get(), 1);
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_session_logs_out_once() {
        let clock = Arc::new(ManualClock::new(1_000));
        let service = SessionService::with_clock(SessionStore::in_memory(), clock.clone());
        let token = SessionToken::encode_unsigned(&Claims {
            sub: "9".into(),
            email: "kim@example.com".into(),
            name: None,
            admin: false,
            exp: Some(1_090),
        })
        .unwrap();
        service.sign_in(&token).unwrap();

        let nav = RecordingNav::default();
        let period = Duration::from_secs(60);

        // Valid for the first tick, expired from the second on.
        let run = watch_expiry(&service, period, || {
            service.logout(&nav);
        });
        let ticks = async {
            tokio::time::sleep(period + Duration::from_secs(1)).await;
            assert!(nav.redirects.borrow().is_empty());
            clock.advance(120);
            tokio::time::sleep(period * 4).await;
        };
        tokio::select! {
            _ = run => unreachable!("expiry watch never returns"),
            _ = ticks => {}
        }

        assert_eq!(*nav.redirects.borrow(), vec![Destination::Login]);
        assert!(service.user().is_none());
    }
}
