// SPDX-License-Identifier: MPL-2.0
//! The locale runtime: active locale, installed catalogs, and the
//! switch/reload lifecycle.
//!
//! [`LocaleRuntime`] is an explicitly constructed handle that the host
//! application clones into whatever needs translation lookups. All
//! collaborators are injected at construction; there is no ambient global
//! state.
//!
//! Every load operation replaces the installed catalogs wholesale: each
//! slot is cleared before the fetch starts, so a context change (e.g. a
//! different authenticated user) can never leak the previous context's
//! strings. Operations crossing the fetch await point are serialized, and
//! a newer request supersedes an in-flight one, whose results are then
//! discarded rather than installed over fresher state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::branding::{self, Branding};
use crate::catalog::{Catalog, CatalogSet};
use crate::config::{Config, LANGUAGE_PREF_KEY, TITLE_RESYNC_DELAY_MS};
use crate::detect;
use crate::diagnostics::DiagnosticsHandle;
use crate::loader::CatalogLoader;
use crate::locale::Locale;
use crate::port::auth::AuthStatus;
use crate::port::fetch::{CatalogFetcher, SourceContext};
use crate::port::platform::LocaleReporter;
use crate::port::prefs::PreferenceStore;
use crate::port::surface::{DocumentSurface, NavigationContext};
use crate::title::{TitleSynchronizer, Translator};

/// Logical lifecycle of the runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Created, nothing loaded yet.
    Uninitialized,
    /// A clear-then-repopulate sequence is in flight.
    Loading,
    /// Catalogs installed; lookups serve real content.
    Ready,
}

/// Result of a load operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Catalogs were installed; `populated` lists the locales that ended
    /// up with content (possibly fewer than the supported set).
    Installed {
        active: Locale,
        populated: Vec<Locale>,
    },
    /// A newer switch/reload superseded this one; nothing was installed.
    Superseded,
}

/// The injected collaborators, one per port.
pub struct Collaborators {
    pub fetcher: Arc<dyn CatalogFetcher>,
    pub auth: Arc<dyn AuthStatus>,
    pub prefs: Arc<dyn PreferenceStore>,
    pub platform: Arc<dyn LocaleReporter>,
    pub nav: Arc<dyn NavigationContext>,
    pub surface: Arc<dyn DocumentSurface>,
}

/// Runtime tuning derived from deployment configuration.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    pub branding: Branding,
    pub default_locale: Locale,
    /// Delay before the second title sync after a switch/reload.
    pub title_resync_delay: Duration,
}

impl RuntimeOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            branding: Branding::from_config(config),
            default_locale: config.effective_default_locale(),
            title_resync_delay: Duration::from_millis(TITLE_RESYNC_DELAY_MS),
        }
    }
}

struct RuntimeState {
    phase: LifecyclePhase,
    active: Locale,
    catalogs: CatalogSet,
}

struct RuntimeInner {
    options: RuntimeOptions,
    state: RwLock<RuntimeState>,
    /// Generation counter for supersede-and-discard. Bumped by every new
    /// request before it queues on `op_lock`.
    epoch: AtomicU64,
    /// Serializes the clear-then-repopulate sequences.
    op_lock: tokio::sync::Mutex<()>,
    loader: CatalogLoader,
    auth: Arc<dyn AuthStatus>,
    prefs: Arc<dyn PreferenceStore>,
    platform: Arc<dyn LocaleReporter>,
    surface: Arc<dyn DocumentSurface>,
    title: TitleSynchronizer,
    diagnostics: DiagnosticsHandle,
}

/// What a load operation does with its result once installed.
struct LoadPlan {
    activate: Option<Locale>,
    persist: bool,
    reflect_language: bool,
    resync_title: bool,
}

/// Cheaply clonable handle over the shared runtime state.
#[derive(Clone)]
pub struct LocaleRuntime {
    inner: Arc<RuntimeInner>,
}

impl LocaleRuntime {
    pub fn new(
        collaborators: Collaborators,
        options: RuntimeOptions,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        let Collaborators {
            fetcher,
            auth,
            prefs,
            platform,
            nav,
            surface,
        } = collaborators;

        let title = TitleSynchronizer::new(
            nav,
            Arc::clone(&surface),
            options.branding.site_name.clone(),
        );
        let loader = CatalogLoader::new(fetcher, diagnostics.clone());
        let mut catalogs = CatalogSet::new();
        for locale in Locale::SUPPORTED {
            catalogs.insert(locale, Catalog::default());
        }

        Self {
            inner: Arc::new(RuntimeInner {
                state: RwLock::new(RuntimeState {
                    phase: LifecyclePhase::Uninitialized,
                    active: options.default_locale,
                    catalogs,
                }),
                options,
                epoch: AtomicU64::new(0),
                op_lock: tokio::sync::Mutex::new(()),
                loader,
                auth,
                prefs,
                platform,
                surface,
                title,
                diagnostics,
            }),
        }
    }

    /// Initial asynchronous load: resolves the startup locale, loads both
    /// context catalogs, and activates it. Does not persist the preference
    /// (only an explicit switch confirms a choice).
    pub async fn init(&self) -> LoadOutcome {
        let detection = detect::resolve_initial_locale(
            self.inner.prefs.as_ref(),
            self.inner.platform.as_ref(),
            self.inner.options.default_locale,
        );
        if let Some(requested) = &detection.coerced_from {
            self.inner.diagnostics.locale_coerced(requested);
        }
        self.run_load(LoadPlan {
            activate: Some(detection.locale),
            persist: false,
            reflect_language: false,
            resync_title: false,
        })
        .await
    }

    /// Switches the active locale, reloading every catalog from the
    /// current source context.
    ///
    /// An unsupported `target` is coerced to [`Locale::FALLBACK`] and the
    /// coercion reported on the diagnostics channel; the call itself still
    /// succeeds. On success the chosen tag is persisted and reflected to
    /// the document surface.
    pub async fn switch_locale(&self, target: &str) -> LoadOutcome {
        let locale = match Locale::from_tag(target) {
            Some(locale) => locale,
            None => {
                self.inner.diagnostics.locale_coerced(target);
                Locale::FALLBACK
            }
        };
        self.run_load(LoadPlan {
            activate: Some(locale),
            persist: true,
            reflect_language: true,
            resync_title: true,
        })
        .await
    }

    /// Reloads every catalog while preserving the active locale.
    ///
    /// Called on authentication-state transitions, where the source
    /// context changes without a user-driven language change.
    pub async fn reload_catalogs(&self) -> LoadOutcome {
        self.run_load(LoadPlan {
            activate: None,
            persist: false,
            reflect_language: false,
            resync_title: true,
        })
        .await
    }

    /// Resolves a translation key: active catalog, then the fallback
    /// locale's catalog, then the key itself. Never fails.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        let state = self.inner.state.read().expect("state lock");
        if let Some(text) = state
            .catalogs
            .get(&state.active)
            .and_then(|catalog| catalog.lookup(key))
        {
            return text.to_string();
        }
        if state.active != Locale::FALLBACK {
            if let Some(text) = state
                .catalogs
                .get(&Locale::FALLBACK)
                .and_then(|catalog| catalog.lookup(key))
            {
                return text.to_string();
            }
        }
        key.to_string()
    }

    /// The currently active locale.
    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.inner.state.read().expect("state lock").active
    }

    /// Locales whose catalogs currently hold content.
    #[must_use]
    pub fn populated_locales(&self) -> Vec<Locale> {
        self.inner
            .state
            .read()
            .expect("state lock")
            .catalogs
            .iter()
            .filter(|(_, catalog)| !catalog.is_empty())
            .map(|(locale, _)| *locale)
            .collect()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.inner.state.read().expect("state lock").phase
    }

    async fn run_load(&self, plan: LoadPlan) -> LoadOutcome {
        let ticket = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = self.inner.op_lock.lock().await;

        // A newer request queued up while we waited for the lock; it will
        // run right after us, so doing our (now stale) load would be wasted.
        if self.inner.epoch.load(Ordering::SeqCst) != ticket {
            self.inner.diagnostics.load_superseded();
            return LoadOutcome::Superseded;
        }

        // Clear every slot before fetching; no cross-context strings may
        // survive into the repopulated state.
        {
            let mut state = self.inner.state.write().expect("state lock");
            state.phase = LifecyclePhase::Loading;
            for locale in Locale::SUPPORTED {
                state.catalogs.insert(locale, Catalog::default());
            }
        }

        let context = SourceContext::from_authenticated(self.inner.auth.is_authenticated());
        let mut catalogs = self.inner.loader.load(context).await;
        branding::inject(&mut catalogs, &self.inner.options.branding);

        // The fetch crossed an await point; discard if superseded meanwhile.
        if self.inner.epoch.load(Ordering::SeqCst) != ticket {
            self.inner.diagnostics.load_superseded();
            return LoadOutcome::Superseded;
        }

        let populated: Vec<Locale> = catalogs.keys().copied().collect();
        let active = {
            let mut state = self.inner.state.write().expect("state lock");
            for (locale, catalog) in catalogs {
                state.catalogs.insert(locale, catalog);
            }
            if let Some(locale) = plan.activate {
                state.active = locale;
            }
            state.phase = LifecyclePhase::Ready;
            state.active
        };

        if plan.persist {
            if let Err(error) = self.inner.prefs.set(LANGUAGE_PREF_KEY, active.as_tag()) {
                self.inner
                    .diagnostics
                    .preference_write_failed(&error.to_string());
            }
        }
        if plan.reflect_language {
            self.inner.surface.set_language(active.as_tag());
        }

        self.inner.title.sync(self);
        if plan.resync_title {
            // Second pass covers asynchronous UI re-render races
            let runtime = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(runtime.inner.options.title_resync_delay).await;
                runtime.inner.title.sync(&runtime);
            });
        }

        LoadOutcome::Installed { active, populated }
    }
}

impl Translator for LocaleRuntime {
    fn translate(&self, key: &str) -> String {
        LocaleRuntime::translate(self, key)
    }
}
