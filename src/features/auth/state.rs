//! Authorization state for one application instance. `AuthContext` owns the
//! session handle and the API client, lazily resolves the profile into an
//! `AuthorizationSnapshot`, and collapses overlapping profile fetches into a
//! single outbound request whose outcome every caller shares.
//!
//! Lifecycle: `init` at start-up, `load_profile` before gated work,
//! `invalidate` on sign-out or when a stored token fails validation. A fetch
//! that completes after an invalidation is discarded.

use crate::{
    app_lib::{ApiClient, AppConfig, AppError},
    features::auth::{
        client,
        menu::{self, MenuNode},
        permissions::{self, ResourcePermissions},
        types::{MeResponse, Profile, SignInRequest, SignInResponse},
    },
    session::{Session, SessionStore},
};
use serde::Serialize;
use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Progress of the profile bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// What the current user may see and do.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizationSnapshot {
    pub user: Option<Profile>,
    pub roles: BTreeSet<String>,
    pub permissions: BTreeSet<String>,
    pub menus: Vec<MenuNode>,
    pub loaded: bool,
}

impl AuthorizationSnapshot {
    fn empty_loaded() -> Self {
        Self {
            loaded: true,
            ..Self::default()
        }
    }

    fn from_profile(me: MeResponse) -> Self {
        Self {
            user: me.user,
            roles: me.roles.into_iter().collect(),
            permissions: me.permissions.into_iter().collect(),
            menus: menu::normalize(me.menus),
            loaded: true,
        }
    }
}

struct Inner {
    snapshot: AuthorizationSnapshot,
    state: BootstrapState,
    // Bumped whenever the stored identity changes; a fetch started under an
    // older value is stale.
    generation: u64,
}

type Outcome = Option<Result<(), AppError>>;

/// Fetch currently in flight, tagged with the generation it was started under.
struct Inflight {
    generation: u64,
    receiver: watch::Receiver<Outcome>,
}

enum Flight {
    Leader(watch::Sender<Outcome>, u64),
    Follower(watch::Receiver<Outcome>),
}

pub struct AuthContext {
    api: ApiClient,
    inner: RwLock<Inner>,
    inflight: Mutex<Option<Inflight>>,
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        formatter
            .debug_struct("AuthContext")
            .field("state", &inner.state)
            .field("loaded", &inner.snapshot.loaded)
            .finish_non_exhaustive()
    }
}

impl AuthContext {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner {
                snapshot: AuthorizationSnapshot::default(),
                state: BootstrapState::Uninitialized,
                generation: 0,
            }),
            inflight: Mutex::new(None),
        }
    }

    /// Builds the context for an application instance over `store`.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn init(config: &AppConfig, store: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        let api = ApiClient::new(config, Session::new(store))?;
        Ok(Self::new(api))
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// True when a token is stored; says nothing about its validity.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn is_authenticated(&self) -> Result<bool, AppError> {
        self.session().has_token()
    }

    #[must_use]
    pub fn state(&self) -> BootstrapState {
        self.read().state
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read().snapshot.loaded
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthorizationSnapshot {
        self.read().snapshot.clone()
    }

    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        permissions::has_permission(&self.read().snapshot.permissions, permission)
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.read().snapshot.roles.contains(role)
    }

    #[must_use]
    pub fn permissions_for(&self, resource: &str) -> ResourcePermissions {
        ResourcePermissions::resolve(resource, &self.read().snapshot.permissions)
    }

    /// Resolves the profile unless already loaded; `force` refetches.
    ///
    /// Without a stored token the snapshot becomes empty-but-loaded and no
    /// request is made. With a token, concurrent callers share one request.
    /// A failed fetch leaves the previous snapshot in place. Callers only join
    /// a fetch started under the current identity.
    ///
    /// # Errors
    /// Returns the profile-fetch failure, or a storage error.
    pub async fn load_profile(&self, force: bool) -> Result<(), AppError> {
        if !force && self.is_loaded() {
            return Ok(());
        }

        if !self.session().has_token()? {
            let mut inner = self.write();
            inner.snapshot = AuthorizationSnapshot::empty_loaded();
            inner.state = BootstrapState::Ready;
            inner.generation += 1;
            debug!("no stored token, authorization is empty");
            return Ok(());
        }

        let flight = {
            let mut slot = self.inflight_slot();
            let generation = self.read().generation;
            match slot.as_ref() {
                Some(current) if current.generation == generation => {
                    Flight::Follower(current.receiver.clone())
                }
                _ => {
                    let (sender, receiver) = watch::channel(None);
                    *slot = Some(Inflight {
                        generation,
                        receiver,
                    });
                    Flight::Leader(sender, generation)
                }
            }
        };

        match flight {
            Flight::Follower(receiver) => {
                debug!("joining in-flight profile fetch");
                wait_for_outcome(receiver).await
            }
            Flight::Leader(sender, generation) => {
                let _slot = InflightReset {
                    slot: &self.inflight,
                    generation,
                };
                let outcome = self.fetch_and_apply(generation).await;
                sender.send_replace(Some(outcome.clone()));
                outcome
            }
        }
    }

    /// Clears the stored session and the snapshot. Any fetch still in flight
    /// will not repopulate the snapshot.
    ///
    /// # Errors
    /// Returns the first storage failure; the snapshot is reset regardless.
    pub fn invalidate(&self) -> Result<(), AppError> {
        {
            let mut inner = self.write();
            inner.snapshot = AuthorizationSnapshot::default();
            inner.state = BootstrapState::Uninitialized;
            inner.generation += 1;
        }
        info!("session invalidated");
        self.session().clear()
    }

    /// Signs in and marks the snapshot stale so the next load fetches the
    /// new identity.
    ///
    /// # Errors
    /// Returns the sign-in failure or a storage error.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, AppError> {
        let response = client::sign_in(&self.api, request).await?;
        {
            let mut inner = self.write();
            inner.snapshot = AuthorizationSnapshot::default();
            inner.state = BootstrapState::Uninitialized;
            inner.generation += 1;
        }
        Ok(response)
    }

    /// Revokes the token on the backend (best effort) and invalidates locally.
    ///
    /// # Errors
    /// Returns a storage error if the session cannot be cleared.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        if self.session().has_token()? {
            client::sign_out(&self.api).await;
        }
        self.invalidate()
    }

    async fn fetch_and_apply(&self, generation: u64) -> Result<(), AppError> {
        {
            let mut inner = self.write();
            if inner.generation != generation {
                return Err(superseded());
            }
            inner.state = BootstrapState::Loading;
        }

        let result = client::fetch_me(&self.api).await;

        let mut inner = self.write();
        if inner.generation != generation {
            debug!("session changed during profile fetch, discarding result");
            return Err(superseded());
        }

        match result {
            Ok(me) => {
                inner.snapshot = AuthorizationSnapshot::from_profile(me);
                inner.state = BootstrapState::Ready;
                debug!(
                    roles = inner.snapshot.roles.len(),
                    permissions = inner.snapshot.permissions.len(),
                    menus = menu::count(&inner.snapshot.menus),
                    "profile loaded"
                );
                Ok(())
            }
            Err(err) => {
                inner.state = BootstrapState::Failed;
                warn!("profile fetch failed: {err}");
                Err(err)
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn inflight_slot(&self) -> MutexGuard<'_, Option<Inflight>> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn superseded() -> AppError {
    AppError::Cancelled("Session changed while the profile was loading.".to_string())
}

/// Frees the in-flight slot when the leading fetch finishes or is dropped,
/// unless a newer fetch has already taken it over.
struct InflightReset<'a> {
    slot: &'a Mutex<Option<Inflight>>,
    generation: u64,
}

impl Drop for InflightReset<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot
            .as_ref()
            .is_some_and(|current| current.generation == self.generation)
        {
            slot.take();
        }
    }
}

async fn wait_for_outcome(mut receiver: watch::Receiver<Outcome>) -> Result<(), AppError> {
    let cancelled =
        || AppError::Cancelled("Profile fetch was abandoned before completing.".to_string());

    match receiver.wait_for(Option::is_some).await {
        Ok(outcome) => (*outcome).clone().unwrap_or_else(|| Err(cancelled())),
        Err(_) => Err(cancelled()),
    }
}
